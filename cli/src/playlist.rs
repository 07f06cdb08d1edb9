use minidj_core::Song;

/// Ordered sequence of songs owned by the shell.
///
/// The playlist is the single owner of its records: songs enter it only
/// after the core has validated them, and lookups go by id.
#[derive(Debug, Default)]
pub struct Playlist {
  songs: Vec<Song>,
}

impl Playlist {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  pub fn add(&mut self, song: Song) {
    self.songs.push(song);
  }

  pub fn iter(&self) -> impl Iterator<Item = &Song> {
    self.songs.iter()
  }

  pub fn find_mut(&mut self, id: u64) -> Option<&mut Song> {
    self.songs.iter_mut().find(|s| s.id().as_u64() == id)
  }

  /// Removes and returns the song with the given id, keeping the order
  /// of the remaining songs.
  pub fn remove(&mut self, id: u64) -> Option<Song> {
    let i = self.songs.iter().position(|s| s.id().as_u64() == id)?;
    Some(self.songs.remove(i))
  }

  /// All songs matching the keyword, in playlist order.
  pub fn search(&self, keyword: &str) -> Vec<&Song> {
    self.songs.iter().filter(|s| s.matches_keyword(keyword)).collect()
  }

  /// Reorders in place: rating descending, title ascending, id ascending.
  pub fn sort(&mut self) {
    self.songs.sort();
  }
}
