use crate::domain::ids::SongId;
use crate::domain::rating::Rating;
use crate::errors::{FieldError, TagError, ValidationErrors};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// La Canción (Song): una entrada validada de la lista de reproducción.
///
/// Una `Song` solo puede existir si todas sus invariantes se cumplen:
/// título y artista no vacíos (tras recortar espacios), duración positiva,
/// valoración en `[1, 5]` y etiquetas sin duplicados (ignorando mayúsculas).
/// La construcción fallida devuelve las reglas violadas en lugar de un
/// objeto a medio inicializar.
#[derive(Debug, Clone, Serialize)]
pub struct Song {
  id: SongId,
  title: String,
  artist: String,
  duration_secs: u32,
  rating: Rating,
  tags: Vec<String>,
}

impl Song {
  /// Construye una canción validando los cuatro campos.
  ///
  /// Las cuatro reglas se evalúan siempre, sin cortocircuito, y TODAS las
  /// violaciones aplicables se devuelven juntas. El id solo se reserva
  /// cuando la validación completa pasa: un intento fallido no consume
  /// ningún valor del contador.
  pub fn new(
    title: &str,
    artist: &str,
    duration_secs: u32,
    rating: u8,
  ) -> Result<Self, ValidationErrors> {
    let title = title.trim();
    let artist = artist.trim();

    let mut violations = Vec::new();
    if title.is_empty() {
      violations.push(FieldError::EmptyTitle);
    }
    if artist.is_empty() {
      violations.push(FieldError::EmptyArtist);
    }
    if duration_secs == 0 {
      violations.push(FieldError::InvalidDuration);
    }

    match Rating::new(rating) {
      Some(rating) if violations.is_empty() => Ok(Song {
        id: SongId::allocate(),
        title: title.to_owned(),
        artist: artist.to_owned(),
        duration_secs,
        rating,
        tags: Vec::new(),
      }),
      Some(_) => Err(ValidationErrors(violations)),
      None => {
        violations.push(FieldError::InvalidRating);
        Err(ValidationErrors(violations))
      }
    }
  }

  /// Construye una canción con la valoración por defecto (3).
  pub fn with_default_rating(
    title: &str,
    artist: &str,
    duration_secs: u32,
  ) -> Result<Self, ValidationErrors> {
    Self::new(title, artist, duration_secs, Rating::default().as_u8())
  }

  // --- Accesores de solo lectura ---

  pub fn id(&self) -> SongId {
    self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn artist(&self) -> &str {
    &self.artist
  }

  pub fn duration_secs(&self) -> u32 {
    self.duration_secs
  }

  pub fn rating(&self) -> Rating {
    self.rating
  }

  /// Vista ordenada de solo lectura de las etiquetas.
  pub fn tags(&self) -> &[String] {
    &self.tags
  }

  // --- Modificadores ---
  // Cada uno valida su argumento y, o bien reemplaza exactamente un campo,
  // o bien rechaza dejando la canción intacta.

  pub fn set_title(&mut self, title: &str) -> Result<(), FieldError> {
    let title = title.trim();
    if title.is_empty() {
      return Err(FieldError::EmptyTitle);
    }
    self.title = title.to_owned();
    Ok(())
  }

  pub fn set_artist(&mut self, artist: &str) -> Result<(), FieldError> {
    let artist = artist.trim();
    if artist.is_empty() {
      return Err(FieldError::EmptyArtist);
    }
    self.artist = artist.to_owned();
    Ok(())
  }

  pub fn set_duration(&mut self, seconds: u32) -> Result<(), FieldError> {
    if seconds == 0 {
      return Err(FieldError::InvalidDuration);
    }
    self.duration_secs = seconds;
    Ok(())
  }

  pub fn set_rating(&mut self, rating: u8) -> Result<(), FieldError> {
    self.rating = Rating::new(rating).ok_or(FieldError::InvalidRating)?;
    Ok(())
  }

  // --- Etiquetas ---

  /// Añade una etiqueta al final, rechazando duplicados sin distinguir
  /// mayúsculas de minúsculas. Se guarda el texto recortado con su
  /// capitalización original.
  pub fn add_tag(&mut self, tag: &str) -> Result<(), TagError> {
    let tag = tag.trim();
    if tag.is_empty() {
      return Err(TagError::EmptyTag);
    }
    let folded = tag.to_lowercase();
    if self.tags.iter().any(|t| t.to_lowercase() == folded) {
      return Err(TagError::DuplicateTag);
    }
    self.tags.push(tag.to_owned());
    Ok(())
  }

  /// Elimina la primera etiqueta que coincida ignorando mayúsculas.
  /// El orden de las etiquetas restantes se conserva.
  pub fn remove_tag(&mut self, tag: &str) -> Result<(), TagError> {
    let tag = tag.trim();
    if tag.is_empty() {
      return Err(TagError::EmptyTag);
    }
    let folded = tag.to_lowercase();
    match self.tags.iter().position(|t| t.to_lowercase() == folded) {
      Some(i) => {
        self.tags.remove(i);
        Ok(())
      }
      None => Err(TagError::TagNotFound),
    }
  }

  // --- Búsqueda ---

  /// Comprueba si la palabra clave aparece como subcadena (ignorando
  /// mayúsculas) en el título, el artista o alguna etiqueta.
  ///
  /// Una palabra clave vacía tras recortar no coincide con nada: no es
  /// un comodín.
  pub fn matches_keyword(&self, keyword: &str) -> bool {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
      return false;
    }
    self.title.to_lowercase().contains(&keyword)
      || self.artist.to_lowercase().contains(&keyword)
      || self.tags.iter().any(|t| t.to_lowercase().contains(&keyword))
  }
}

/// Orden total de las canciones, en tres niveles de desempate:
/// valoración descendente, luego título ascendente, luego id ascendente.
/// Como los ids son únicos, dos canciones distintas nunca empatan.
impl Ord for Song {
  fn cmp(&self, other: &Self) -> Ordering {
    other
      .rating
      .cmp(&self.rating)
      .then_with(|| self.title.cmp(&other.title))
      .then_with(|| self.id.cmp(&other.id))
  }
}

impl PartialOrd for Song {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

// La igualdad sigue a la comparación de tres niveles para que `Ord` sea
// un orden total legal.
impl PartialEq for Song {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Song {}

impl fmt::Display for Song {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "[#{}] {} - {} ({}s) {}",
      self.id, self.artist, self.title, self.duration_secs, self.rating
    )?;
    if !self.tags.is_empty() {
      write!(f, "  [tags: {}]", self.tags.join(", "))?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::{Mutex, MutexGuard, PoisonError};

  // El contador de ids es global al proceso y el arnés de pruebas es
  // multihilo: las pruebas que crean canciones se serializan para poder
  // afirmar relaciones aritméticas entre ids consecutivos.
  fn gate() -> MutexGuard<'static, ()> {
    static GATE: Mutex<()> = Mutex::new(());
    GATE.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn sample() -> Song {
    Song::new("Plastic Love", "Mariya Takeuchi", 294, 5).unwrap()
  }

  #[test]
  fn test_create_trims_and_stores() {
    let _g = gate();
    let s = Song::new("  Tsubasa o Kudasai \t", "  Susan Osborn ", 262, 4).unwrap();
    assert_eq!(s.title(), "Tsubasa o Kudasai");
    assert_eq!(s.artist(), "Susan Osborn");
    assert_eq!(s.duration_secs(), 262);
    assert_eq!(s.rating().as_u8(), 4);
    assert!(s.tags().is_empty());
    assert!(s.id().as_u64() >= 1);
  }

  #[test]
  fn test_create_uses_default_rating() {
    let _g = gate();
    let s = Song::with_default_rating("Stay With Me", "Miki Matsubara", 247).unwrap();
    assert_eq!(s.rating(), Rating::default());
  }

  #[test]
  fn test_create_reports_all_violations() {
    let _g = gate();
    let errs = Song::new("   ", "\t", 0, 9).unwrap_err();
    assert_eq!(errs.len(), 4);
    let collected: Vec<_> = errs.iter().copied().collect();
    assert_eq!(
      collected,
      vec![
        FieldError::EmptyTitle,
        FieldError::EmptyArtist,
        FieldError::InvalidDuration,
        FieldError::InvalidRating,
      ]
    );
  }

  #[test]
  fn test_create_reports_single_violation() {
    let _g = gate();
    let errs = Song::new("Title", "Artist", 180, 0).unwrap_err();
    assert_eq!(errs.len(), 1);
    assert!(errs.contains(FieldError::InvalidRating));
  }

  #[test]
  fn test_failed_create_does_not_consume_id() {
    let _g = gate();
    let a = sample();
    assert!(Song::new("", "Nobody", 10, 3).is_err());
    let b = sample();
    assert_eq!(b.id().as_u64(), a.id().as_u64() + 1);
  }

  #[test]
  fn test_ids_strictly_increase() {
    let _g = gate();
    let a = sample();
    let b = sample();
    let c = sample();
    assert!(a.id() < b.id());
    assert!(b.id() < c.id());
  }

  #[test]
  fn test_setters_accept_valid_input() {
    let _g = gate();
    let mut s = sample();
    assert!(s.set_title("  Ride on Time ").is_ok());
    assert!(s.set_artist(" Tatsuro Yamashita ").is_ok());
    assert!(s.set_duration(378).is_ok());
    assert!(s.set_rating(4).is_ok());
    assert_eq!(s.title(), "Ride on Time");
    assert_eq!(s.artist(), "Tatsuro Yamashita");
    assert_eq!(s.duration_secs(), 378);
    assert_eq!(s.rating().as_u8(), 4);
  }

  #[test]
  fn test_setters_reject_and_leave_untouched() {
    let _g = gate();
    let mut s = sample();
    assert_eq!(s.set_title("   "), Err(FieldError::EmptyTitle));
    assert_eq!(s.set_artist(""), Err(FieldError::EmptyArtist));
    assert_eq!(s.set_duration(0), Err(FieldError::InvalidDuration));
    assert_eq!(s.set_rating(0), Err(FieldError::InvalidRating));
    assert_eq!(s.set_rating(9), Err(FieldError::InvalidRating));
    assert_eq!(s.title(), "Plastic Love");
    assert_eq!(s.artist(), "Mariya Takeuchi");
    assert_eq!(s.duration_secs(), 294);
    assert_eq!(s.rating().as_u8(), 5);
  }

  #[test]
  fn test_add_tag_dedups_case_insensitive() {
    let _g = gate();
    let mut s = sample();
    assert!(s.add_tag("Rock").is_ok());
    assert_eq!(s.add_tag("ROCK"), Err(TagError::DuplicateTag));
    assert_eq!(s.add_tag(" rock "), Err(TagError::DuplicateTag));
    // Queda una sola etiqueta, con la capitalización de la primera inserción.
    assert_eq!(s.tags(), ["Rock"]);
  }

  #[test]
  fn test_add_tag_trims_and_rejects_empty() {
    let _g = gate();
    let mut s = sample();
    assert_eq!(s.add_tag("   "), Err(TagError::EmptyTag));
    assert!(s.add_tag("  city pop ").is_ok());
    assert_eq!(s.tags(), ["city pop"]);
  }

  #[test]
  fn test_remove_tag_case_insensitive() {
    let _g = gate();
    let mut s = sample();
    s.add_tag("rock").unwrap();
    assert!(s.remove_tag("ROCK").is_ok());
    assert!(s.tags().is_empty());
    assert_eq!(s.remove_tag("rock"), Err(TagError::TagNotFound));
    assert_eq!(s.remove_tag("  "), Err(TagError::EmptyTag));
  }

  #[test]
  fn test_remove_tag_preserves_order() {
    let _g = gate();
    let mut s = sample();
    s.add_tag("live").unwrap();
    s.add_tag("city pop").unwrap();
    s.add_tag("80s").unwrap();
    s.remove_tag("City Pop").unwrap();
    assert_eq!(s.tags(), ["live", "80s"]);
  }

  #[test]
  fn test_matches_keyword() {
    let _g = gate();
    let mut s = sample();
    s.add_tag("J-Pop").unwrap();
    // Una palabra clave vacía nunca coincide, no es un comodín.
    assert!(!s.matches_keyword(""));
    assert!(!s.matches_keyword("   "));
    assert!(s.matches_keyword("plastic"));
    assert!(s.matches_keyword("TAKEUCHI"));
    assert!(s.matches_keyword("jp")); // subcadena de "J-Pop" plegada
    assert!(s.matches_keyword(" love "));
    assert!(!s.matches_keyword("metal"));
  }

  #[test]
  fn test_sort_rating_desc_then_title_asc() {
    let _g = gate();
    let mut songs = vec![
      Song::new("Z", "Someone", 100, 3).unwrap(),
      Song::new("B", "Someone", 100, 5).unwrap(),
      Song::new("A", "Someone", 100, 5).unwrap(),
    ];
    songs.sort();
    let titles: Vec<_> = songs.iter().map(Song::title).collect();
    assert_eq!(titles, ["A", "B", "Z"]);
    assert_eq!(songs[0].rating().as_u8(), 5);
    assert_eq!(songs[2].rating().as_u8(), 3);
  }

  #[test]
  fn test_sort_id_breaks_ties() {
    let _g = gate();
    let first = Song::new("Same", "Same", 100, 4).unwrap();
    let second = Song::new("Same", "Same", 100, 4).unwrap();
    let mut songs = vec![second.clone(), first.clone()];
    songs.sort();
    assert_eq!(songs[0].id(), first.id());
    assert_eq!(songs[1].id(), second.id());
  }

  #[test]
  fn test_display_format() {
    let _g = gate();
    let mut s = Song::new("Title", "Artist", 215, 3).unwrap();
    assert_eq!(s.to_string(), format!("[#{}] Artist - Title (215s) ★★★", s.id()));
    s.add_tag("rock").unwrap();
    s.add_tag("Live").unwrap();
    assert_eq!(
      s.to_string(),
      format!("[#{}] Artist - Title (215s) ★★★  [tags: rock, Live]", s.id())
    );
  }
}
