pub mod genre;
pub mod title;
pub mod video;
