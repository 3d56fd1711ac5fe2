use async_trait::async_trait;

use crate::modules::auth::domain::{Credentials, Session, SignUpOutcome};
use crate::shared::errors::AppResult;

/// Port (interface) for the hosted identity provider
/// Errors a user should read come back as `AppError::AuthError`
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Password grant
    async fn sign_in_with_password(&self, credentials: &Credentials) -> AppResult<Session>;

    /// Register; `code_challenge` ties the e-mail confirmation link to this client
    async fn sign_up(&self, credentials: &Credentials, code_challenge: &str)
        -> AppResult<SignUpOutcome>;

    /// Revoke the session server-side
    async fn sign_out(&self, access_token: &str) -> AppResult<()>;

    /// Trade the one-time code from the redirect for a session
    async fn exchange_code_for_session(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> AppResult<Session>;
}
