use super::callback::extract_code;
use super::ports::IdentityProvider;
use crate::modules::auth::domain::{Credentials, Session, SignUpOutcome};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::storage::KeyValueStorage;
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_error, log_warn};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Storage key of the persisted session
pub const SESSION_KEY: &str = "quickbet-auth-session";
/// Storage key of the pending PKCE verifier between sign-up and callback
pub const CODE_VERIFIER_KEY: &str = "quickbet-auth-code-verifier";

/// Session owner for the whole app.
///
/// Wraps the identity provider, persists the session across restarts and
/// notifies subscribers whenever the session appears or goes away.
pub struct AuthGateway {
    provider: Arc<dyn IdentityProvider>,
    storage: Arc<dyn KeyValueStorage>,
    sender: watch::Sender<Option<Session>>,
}

impl AuthGateway {
    /// Restore the persisted session, dropping it if expired or unreadable
    pub fn new(provider: Arc<dyn IdentityProvider>, storage: Arc<dyn KeyValueStorage>) -> Self {
        let restored = Self::restore_session(storage.as_ref());
        let (sender, _) = watch::channel(restored);
        Self {
            provider,
            storage,
            sender,
        }
    }

    fn restore_session(storage: &dyn KeyValueStorage) -> Option<Session> {
        let raw = match storage.get(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                LogContext::degraded("Reading stored session", &e);
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_expired() => {
                LogContext::auth_event("stored session expired", session.email());
                if let Err(e) = storage.remove(SESSION_KEY) {
                    log_warn!("Auth: failed to clear expired session: {}", e);
                }
                None
            }
            Ok(session) => {
                LogContext::auth_event("session restored", session.email());
                Some(session)
            }
            Err(e) => {
                log_warn!("Auth: stored session is malformed, ignoring: {}", e);
                None
            }
        }
    }

    pub fn current_session(&self) -> Option<Session> {
        self.sender.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// Fires on every sign-in, sign-out and callback exchange
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.sender.subscribe()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
        let credentials = Credentials::new(email, password)?;
        LogContext::auth_event("sign-in requested", Some(credentials.email()));

        let session = self
            .provider
            .sign_in_with_password(&credentials)
            .await
            .map_err(user_facing)?;

        self.set_session(Some(session.clone()));
        LogContext::auth_event("signed in", session.email());
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<SignUpOutcome> {
        let credentials = Credentials::new(email, password)?;
        LogContext::auth_event("sign-up requested", Some(credentials.email()));

        let verifier = new_code_verifier();
        if let Err(e) = self.storage.set(CODE_VERIFIER_KEY, &verifier) {
            // Without it the confirmation link cannot be redeemed here
            log_warn!("Auth: failed to store code verifier: {}", e);
        }

        let outcome = self
            .provider
            .sign_up(&credentials, &verifier)
            .await
            .map_err(user_facing)?;

        match &outcome {
            SignUpOutcome::SessionStarted(session) => {
                self.clear_code_verifier();
                self.set_session(Some(session.clone()));
                LogContext::auth_event("signed up and signed in", session.email());
            }
            SignUpOutcome::ConfirmationRequired { email } => {
                LogContext::auth_event("confirmation e-mail sent", Some(email.as_str()));
            }
        }
        Ok(outcome)
    }

    /// Local sign-out always succeeds; server-side revocation is best effort
    pub async fn sign_out(&self) {
        let previous = self.sender.borrow().clone();
        self.set_session(None);

        match previous {
            Some(session) => {
                if let Err(e) = self.provider.sign_out(&session.access_token).await {
                    log_warn!("Auth: server-side sign-out failed: {}", e);
                }
                LogContext::auth_event("signed out", session.email());
            }
            None => log_debug!("Auth: sign-out with no active session"),
        }
    }

    /// Complete a redirect-based flow. `Ok(None)` when the URL has no code.
    pub async fn handle_callback(&self, url: &str) -> AppResult<Option<Session>> {
        match extract_code(url) {
            Some(code) => self.exchange_code_for_session(&code).await.map(Some),
            None => {
                log_debug!("Auth: callback URL carried no code");
                Ok(None)
            }
        }
    }

    pub async fn exchange_code_for_session(&self, code: &str) -> AppResult<Session> {
        let verifier = match self.storage.get(CODE_VERIFIER_KEY) {
            Ok(Some(verifier)) => verifier,
            Ok(None) => {
                return Err(AppError::AuthError(
                    "This confirmation link was opened on another device or has already been used"
                        .to_string(),
                ))
            }
            Err(e) => {
                log_error!("Auth: failed to read code verifier: {}", e);
                return Err(AppError::AuthError(
                    "Could not complete sign-in, please try again".to_string(),
                ));
            }
        };

        let session = self
            .provider
            .exchange_code_for_session(code, &verifier)
            .await
            .map_err(user_facing)?;

        self.clear_code_verifier();
        self.set_session(Some(session.clone()));
        LogContext::auth_event("code exchanged for session", session.email());
        Ok(session)
    }

    fn set_session(&self, session: Option<Session>) {
        let persisted = match &session {
            Some(s) => serde_json::to_string(s)
                .map_err(AppError::from)
                .and_then(|json| self.storage.set(SESSION_KEY, &json)),
            None => self.storage.remove(SESSION_KEY),
        };
        if let Err(e) = persisted {
            log_error!("Auth: failed to persist session change: {}", e);
        }
        self.sender.send_replace(session);
    }

    fn clear_code_verifier(&self) {
        if let Err(e) = self.storage.remove(CODE_VERIFIER_KEY) {
            log_warn!("Auth: failed to clear code verifier: {}", e);
        }
    }
}

/// 64 unreserved characters, inside the 43–128 range PKCE allows
fn new_code_verifier() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Collapse provider failures into messages a form can show inline
fn user_facing(err: AppError) -> AppError {
    match err {
        AppError::AuthError(_) => err,
        AppError::ApiError(msg)
        | AppError::Unauthorized(msg)
        | AppError::ValidationError(msg)
        | AppError::InvalidInput(msg) => AppError::AuthError(msg),
        AppError::RateLimitError(_) => {
            AppError::AuthError("Too many attempts, please wait a moment and try again".to_string())
        }
        other => {
            log_error!("Auth: provider failure: {}", other);
            AppError::AuthError("The sign-in service is unavailable right now".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_verifier_shape() {
        let verifier = new_code_verifier();
        assert_eq!(verifier.len(), 64);
        assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(verifier, new_code_verifier());
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            user_facing(AppError::ApiError("Invalid login credentials".into())),
            AppError::AuthError("Invalid login credentials".into())
        );
        assert!(matches!(
            user_facing(AppError::RateLimitError("429".into())),
            AppError::AuthError(msg) if msg.contains("Too many attempts")
        ));
        assert!(matches!(
            user_facing(AppError::ExternalServiceError("HTTP 502: bad gateway".into())),
            AppError::AuthError(msg) if msg.contains("unavailable")
        ));
    }
}
