pub mod callback;
pub mod gateway;
pub mod ports;

pub use callback::extract_code;
pub use gateway::{AuthGateway, CODE_VERIFIER_KEY, SESSION_KEY};
pub use ports::IdentityProvider;
