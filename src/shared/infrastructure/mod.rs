/// Shared infrastructure concerns
///
/// Infrastructure used by more than one module (catalog and auth both talk
/// HTTP through the same client).
pub mod http_client;

// Re-exports for convenience
pub use http_client::ThrottledClient;
