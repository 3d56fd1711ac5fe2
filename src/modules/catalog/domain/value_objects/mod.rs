mod category;
mod rating;
mod release_date;
mod runtime;

pub use category::Category;
pub use rating::{Rating, RatingTier};
pub use release_date::ReleaseDate;
pub use runtime::Runtime;
