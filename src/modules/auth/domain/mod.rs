pub mod credentials;
pub mod session;

// Re-exports for easy access
pub use credentials::Credentials;
pub use session::{AuthUser, Session, SignUpOutcome};
