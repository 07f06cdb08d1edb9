use serde::Serialize;
use std::fmt;

/// Valoración de una canción en una escala entera de 1 a 5.
///
/// El valor se guarda ya validado: una `Rating` existente siempre está
/// dentro del rango. La valoración por defecto es 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Rating(u8);

impl Rating {
  /// Valor mínimo permitido.
  pub const MIN: u8 = 1;
  /// Valor máximo permitido.
  pub const MAX: u8 = 5;

  /// Crea una `Rating` a partir de un entero.
  ///
  /// Devuelve `None` si el valor queda fuera del rango `[1, 5]`.
  pub fn new(value: u8) -> Option<Self> {
    if (Self::MIN..=Self::MAX).contains(&value) { Some(Self(value)) } else { None }
  }

  /// Devuelve la valoración como entero en `[1, 5]`.
  pub fn as_u8(&self) -> u8 {
    self.0
  }
}

impl Default for Rating {
  fn default() -> Self {
    Rating(3)
  }
}

impl fmt::Display for Rating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Una estrella por punto, sin relleno hasta 5.
    for _ in 0..self.0 {
      write!(f, "★")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rating_range() {
    assert!(Rating::new(0).is_none());
    assert!(Rating::new(6).is_none());
    assert_eq!(Rating::new(1).unwrap().as_u8(), 1);
    assert_eq!(Rating::new(5).unwrap().as_u8(), 5);
    assert_eq!(Rating::default().as_u8(), 3);
  }

  #[test]
  fn test_rating_stars() {
    assert_eq!(Rating::new(1).unwrap().to_string(), "★");
    assert_eq!(Rating::new(4).unwrap().to_string(), "★★★★");
  }
}
