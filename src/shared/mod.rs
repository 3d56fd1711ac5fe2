// Shared kernel used by every module

pub mod application; // Screen-state patterns shared by views
pub mod config; // Environment-backed configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Shared HTTP plumbing
pub mod storage; // Key-value storage port and adapters
pub mod utils; // Logging and validation

pub use config::AppConfig;
pub use errors::{AppError, AppResult};
