pub mod domain;
pub mod errors;

pub use domain::{Rating, Song, SongId};
pub use errors::{FieldError, TagError, ValidationErrors};
