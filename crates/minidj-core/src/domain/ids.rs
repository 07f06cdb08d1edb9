use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Contador global de ids. Arranca en 1, nunca retrocede ni se reinicia,
// ni siquiera cuando se borran canciones.
static NEXT_SONG_ID: AtomicU64 = AtomicU64::new(1);

/// Identificador único de una canción dentro del proceso.
///
/// Los ids se asignan de forma estrictamente creciente a partir de 1 y
/// jamás se reutilizan. La única vía de asignación es la construcción de
/// una [`crate::Song`] válida: no existe constructor público desde un
/// entero arbitrario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SongId(u64);

impl SongId {
  /// Reserva el siguiente id del contador global.
  ///
  /// Solo se llama después de que la validación completa haya pasado;
  /// una construcción fallida no consume ningún id.
  pub(crate) fn allocate() -> Self {
    SongId(NEXT_SONG_ID.fetch_add(1, Ordering::Relaxed))
  }

  /// Devuelve el valor entero interno.
  pub fn as_u64(&self) -> u64 {
    self.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
