pub mod ports;
pub mod service;

pub use ports::CatalogProvider;
pub use service::CatalogService;
