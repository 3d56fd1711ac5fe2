//! Screen state the views bind to.
//!
//! Each screen owns a request generation so a response that settles after
//! the user moved on is dropped instead of overwriting newer state.

pub mod cards;
pub mod detail;
pub mod home;
pub mod listing;

pub use cards::{Banner, DetailView, TitleCard};
pub use detail::DetailScreen;
pub use home::{favorite_cards, load_banner, load_rows, unfavorite, Row};
pub use listing::{ListingScreen, ListingSource, ListingState};
