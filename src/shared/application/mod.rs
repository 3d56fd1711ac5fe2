/// Shared application layer patterns
///
/// Screen state that every view binds to: what is loaded, and whether a
/// response still belongs to the latest request.
pub mod load_state;
pub mod request_guard;

pub use load_state::LoadState;
pub use request_guard::{RequestGuard, RequestTicket};
