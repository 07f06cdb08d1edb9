// crates/minidj-core/src/errors.rs
use thiserror::Error;

/// Violación de una regla de validación sobre un campo de la canción.
///
/// Cada variante corresponde a exactamente un campo. La capa superior
/// (CLI, etc.) decide cómo presentar el mensaje al usuario.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
  #[error("title must not be empty")]
  EmptyTitle,

  #[error("artist must not be empty")]
  EmptyArtist,

  #[error("duration must be a positive number of seconds")]
  InvalidDuration,

  #[error("rating must be between 1 and 5")]
  InvalidRating,
}

/// Fallo de una operación sobre la colección de etiquetas.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
  #[error("tag must not be empty")]
  EmptyTag,

  #[error("tag already exists (case-insensitive)")]
  DuplicateTag,

  #[error("tag not found")]
  TagNotFound,
}

/// Conjunto ordenado de reglas violadas al construir una [`crate::Song`].
///
/// La construcción evalúa las cuatro reglas sin cortocircuito, así que
/// aquí puede haber más de una violación a la vez. Nunca está vacío.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub(crate) Vec<FieldError>);

impl ValidationErrors {
  /// Itera las violaciones en el orden fijo de evaluación.
  pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
    self.0.iter()
  }

  pub fn contains(&self, err: FieldError) -> bool {
    self.0.contains(&err)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }
}
