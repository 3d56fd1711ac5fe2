pub mod auth;
pub mod browse;
pub mod catalog;
pub mod favorites;
