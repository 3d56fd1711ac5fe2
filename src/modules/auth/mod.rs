pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{extract_code, AuthGateway, IdentityProvider, CODE_VERIFIER_KEY, SESSION_KEY};
pub use domain::{AuthUser, Credentials, Session, SignUpOutcome};
pub use infrastructure::SupabaseAuthClient;
