mod input;
mod playlist;

use anyhow::Result;
use minidj_core::{Rating, Song};
use playlist::Playlist;

fn print_menu() {
  println!();
  println!("=== MiniDJ ===");
  println!("1) add   2) list   3) search   4) edit   5) tag+   6) tag-   7) delete   8) sort   0) exit");
}

fn main() -> Result<()> {
  let mut playlist = Playlist::new();

  loop {
    print_menu();
    let Some(choice) = input::read_line("> ")? else {
      break; // EOF
    };
    match choice.trim() {
      "1" => op_add(&mut playlist)?,
      "2" => op_list(&playlist),
      "3" => op_search(&playlist)?,
      "4" => op_edit(&mut playlist)?,
      "5" => op_tag_add(&mut playlist)?,
      "6" => op_tag_remove(&mut playlist)?,
      "7" => op_delete(&mut playlist)?,
      "8" => op_sort(&mut playlist),
      "0" => break,
      _ => println!("[note] unknown option"),
    }
  }

  Ok(())
}

/// Option 1: prompt for the four fields and insert the song only if the
/// core accepts it. Every validation message is printed.
fn op_add(playlist: &mut Playlist) -> Result<()> {
  let Some(title) = input::read_line("title: ")? else { return Ok(()) };
  let Some(artist) = input::read_line("artist: ")? else { return Ok(()) };
  let Some(duration) = input::read_positive("duration (seconds): ")? else { return Ok(()) };
  let Ok(duration) = u32::try_from(duration) else {
    println!("[note] duration out of range, song not added");
    return Ok(());
  };

  let Some(rating_line) = input::read_line("rating (1-5, empty for default 3): ")? else {
    return Ok(());
  };
  let rating = if rating_line.trim().is_empty() {
    Rating::default().as_u8()
  } else {
    match input::parse_uint(&rating_line) {
      Some(r @ 1..=5) => r as u8,
      _ => {
        println!("[note] rating must be between 1 and 5, using default 3");
        Rating::default().as_u8()
      }
    }
  };

  match Song::new(&title, &artist, duration, rating) {
    Ok(song) => {
      println!("[added] {song}");
      playlist.add(song);
    }
    Err(errors) => {
      for err in errors.iter() {
        println!("[error] {err}");
      }
      println!("[failed] song not added");
    }
  }
  Ok(())
}

/// Option 2: print every song in playlist order.
fn op_list(playlist: &Playlist) {
  if playlist.is_empty() {
    println!("[empty] the playlist is empty");
    return;
  }
  for song in playlist.iter() {
    println!("{song}");
  }
}

/// Option 3: case-insensitive substring search over title, artist and tags.
fn op_search(playlist: &Playlist) -> Result<()> {
  let Some(keyword) = input::read_line("keyword: ")? else { return Ok(()) };
  if keyword.trim().is_empty() {
    println!("[note] keyword must not be empty");
    return Ok(());
  }

  let hits = playlist.search(&keyword);
  if hits.is_empty() {
    println!("[note] no matches");
    return Ok(());
  }
  println!("[results]");
  for song in hits {
    println!("{song}");
  }
  Ok(())
}

/// Option 4: edit a song field by field; an empty line keeps the current
/// value, and rejected edits are reported and ignored.
fn op_edit(playlist: &mut Playlist) -> Result<()> {
  let Some(id) = input::read_positive("song id to edit: ")? else { return Ok(()) };
  let Some(song) = playlist.find_mut(id) else {
    println!("[note] no song with that id");
    return Ok(());
  };
  println!("current: {song}");
  println!("(empty line = keep)");

  let Some(new_title) = input::read_line("new title: ")? else { return Ok(()) };
  if !new_title.trim().is_empty() {
    if let Err(err) = song.set_title(&new_title) {
      println!("[note] {err}, edit ignored");
    }
  }

  let Some(new_artist) = input::read_line("new artist: ")? else { return Ok(()) };
  if !new_artist.trim().is_empty() {
    if let Err(err) = song.set_artist(&new_artist) {
      println!("[note] {err}, edit ignored");
    }
  }

  let Some(duration_line) = input::read_line("new duration (seconds): ")? else { return Ok(()) };
  if !duration_line.trim().is_empty() {
    match input::parse_uint(&duration_line).and_then(|n| u32::try_from(n).ok()) {
      Some(seconds) => {
        if let Err(err) = song.set_duration(seconds) {
          println!("[note] {err}, edit ignored");
        }
      }
      None => println!("[note] duration must be a positive integer, edit ignored"),
    }
  }

  let Some(rating_line) = input::read_line("new rating (1-5): ")? else { return Ok(()) };
  if !rating_line.trim().is_empty() {
    match input::parse_uint(&rating_line).and_then(|n| u8::try_from(n).ok()) {
      Some(rating) => {
        if let Err(err) = song.set_rating(rating) {
          println!("[note] {err}, edit ignored");
        }
      }
      None => println!("[note] rating must be between 1 and 5, edit ignored"),
    }
  }

  println!("updated: {song}");
  Ok(())
}

/// Option 5: add a tag to a song; duplicates (case-insensitive) and empty
/// tags are rejected by the core.
fn op_tag_add(playlist: &mut Playlist) -> Result<()> {
  let Some(id) = input::read_positive("song id to tag: ")? else { return Ok(()) };
  let Some(song) = playlist.find_mut(id) else {
    println!("[note] no song with that id");
    return Ok(());
  };

  let Some(tag) = input::read_line("tag: ")? else { return Ok(()) };
  match song.add_tag(&tag) {
    Ok(()) => println!("[done] {song}"),
    Err(err) => println!("[note] {err}"),
  }
  Ok(())
}

/// Option 6: remove a tag (case-insensitive) from a song.
fn op_tag_remove(playlist: &mut Playlist) -> Result<()> {
  let Some(id) = input::read_positive("song id to untag: ")? else { return Ok(()) };
  let Some(song) = playlist.find_mut(id) else {
    println!("[note] no song with that id");
    return Ok(());
  };

  let Some(tag) = input::read_line("tag to remove: ")? else { return Ok(()) };
  match song.remove_tag(&tag) {
    Ok(()) => println!("[done] {song}"),
    Err(err) => println!("[note] {err}"),
  }
  Ok(())
}

/// Option 7: delete a song by id.
fn op_delete(playlist: &mut Playlist) -> Result<()> {
  let Some(id) = input::read_positive("song id to delete: ")? else { return Ok(()) };
  match playlist.remove(id) {
    Some(song) => println!("[deleted] {song}"),
    None => println!("[note] no song with that id"),
  }
  Ok(())
}

/// Option 8: apply the three-level order (rating desc, title asc, id asc).
fn op_sort(playlist: &mut Playlist) {
  playlist.sort();
  println!("[done] playlist sorted");
}
