pub mod ids;
pub mod rating;
pub mod song;

pub use ids::SongId;
pub use rating::Rating;
pub use song::Song;
