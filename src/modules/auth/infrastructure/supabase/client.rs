use crate::{
    modules::auth::{
        application::ports::IdentityProvider,
        domain::{AuthUser, Credentials, Session, SignUpOutcome},
    },
    shared::{
        config::SupabaseConfig,
        errors::{AppError, AppResult},
        infrastructure::ThrottledClient,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use super::models::*;

/// PKCE method; the verifier doubles as the challenge
const CODE_CHALLENGE_METHOD: &str = "plain";

/// Supabase Auth (GoTrue) adapter over its REST endpoints
pub struct SupabaseAuthClient {
    http_client: ThrottledClient,
    config: SupabaseConfig,
}

impl SupabaseAuthClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self::with_client(ThrottledClient::for_supabase(), config)
    }

    /// Create client with custom HTTP client (for testing)
    pub fn with_client(http_client: ThrottledClient, config: SupabaseConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// `{project}/auth/v1{endpoint}`
    pub fn build_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1{}", self.config.url, endpoint)
    }

    fn signup_url(&self) -> String {
        let url = self.build_url("/signup");
        match &self.config.redirect_url {
            Some(redirect) => format!("{}?redirect_to={}", url, urlencoding::encode(redirect)),
            None => url,
        }
    }

    async fn post_token(&self, grant_type: &str, body: Value) -> AppResult<Session> {
        let url = self.build_url(&format!("/token?grant_type={}", grant_type));
        let bearer = format!("Bearer {}", self.config.anon_key);
        let headers = [
            ("apikey", self.config.anon_key.as_str()),
            ("Authorization", bearer.as_str()),
        ];

        let token: TokenResponse = self
            .http_client
            .post_json(&url, &headers, &body)
            .await
            .map_err(map_auth_error)?;
        Ok(to_session(token, Utc::now()))
    }
}

#[async_trait]
impl IdentityProvider for SupabaseAuthClient {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> AppResult<Session> {
        log::info!("Supabase: Password sign-in for {}", credentials.email());

        let body = serde_json::to_value(PasswordGrantRequest {
            email: credentials.email(),
            password: credentials.password(),
        })?;
        self.post_token("password", body).await
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        code_challenge: &str,
    ) -> AppResult<SignUpOutcome> {
        log::info!("Supabase: Registering {}", credentials.email());

        let body = serde_json::to_value(SignUpRequest {
            email: credentials.email(),
            password: credentials.password(),
            code_challenge,
            code_challenge_method: CODE_CHALLENGE_METHOD,
        })?;
        let bearer = format!("Bearer {}", self.config.anon_key);
        let headers = [
            ("apikey", self.config.anon_key.as_str()),
            ("Authorization", bearer.as_str()),
        ];

        let response: SignUpResponse = self
            .http_client
            .post_json(&self.signup_url(), &headers, &body)
            .await
            .map_err(map_auth_error)?;

        Ok(match response {
            SignUpResponse::Session(token) => {
                SignUpOutcome::SessionStarted(to_session(token, Utc::now()))
            }
            SignUpResponse::User(user) => SignUpOutcome::ConfirmationRequired {
                email: user
                    .email
                    .unwrap_or_else(|| credentials.email().to_string()),
            },
        })
    }

    async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        let url = self.build_url("/logout");
        let bearer = format!("Bearer {}", access_token);
        let headers = [
            ("apikey", self.config.anon_key.as_str()),
            ("Authorization", bearer.as_str()),
        ];

        self.http_client
            .post_no_content(&url, &headers, None)
            .await
            .map_err(map_auth_error)
    }

    async fn exchange_code_for_session(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> AppResult<Session> {
        log::info!("Supabase: Exchanging auth code for a session");

        let body = serde_json::to_value(PkceGrantRequest {
            auth_code,
            code_verifier,
        })?;
        self.post_token("pkce", body).await
    }
}

/// Build the domain session; `now` anchors `expires_in` when `expires_at` is absent
fn to_session(token: TokenResponse, now: DateTime<Utc>) -> Session {
    let expires_at = token
        .expires_at
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .or_else(|| token.expires_in.map(|secs| now + Duration::seconds(secs)));

    Session {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        token_type: token.token_type,
        expires_at,
        user: AuthUser {
            id: token.user.id,
            email: token.user.email,
        },
    }
}

/// Client-side rejections carry GoTrue's own wording, which the form shows as-is
fn map_auth_error(err: AppError) -> AppError {
    match err {
        AppError::ApiError(msg) | AppError::Unauthorized(msg) | AppError::ValidationError(msg) => {
            AppError::AuthError(msg)
        }
        AppError::RateLimitError(_) => AppError::AuthError(
            "Too many attempts, please wait a moment and try again".to_string(),
        ),
        AppError::ExternalServiceError(msg) => {
            log::error!("Supabase: auth service failure: {}", msg);
            AppError::AuthError("The sign-in service is unavailable right now".to_string())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn client(redirect_url: Option<&str>) -> SupabaseAuthClient {
        SupabaseAuthClient::new(SupabaseConfig {
            url: "https://project.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            redirect_url: redirect_url.map(str::to_string),
        })
    }

    fn token(expires_in: Option<i64>, expires_at: Option<i64>) -> TokenResponse {
        TokenResponse {
            access_token: "access".to_string(),
            token_type: "bearer".to_string(),
            expires_in,
            expires_at,
            refresh_token: "refresh".to_string(),
            user: GoTrueUser {
                id: Uuid::nil(),
                email: Some("ana@example.com".to_string()),
            },
        }
    }

    #[test]
    fn test_build_url() {
        assert_eq!(
            client(None).build_url("/token?grant_type=password"),
            "https://project.supabase.co/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn test_signup_url_carries_redirect() {
        assert_eq!(client(None).signup_url(), "https://project.supabase.co/auth/v1/signup");
        assert_eq!(
            client(Some("http://localhost:3000/auth/callback")).signup_url(),
            "https://project.supabase.co/auth/v1/signup?redirect_to=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fcallback"
        );
    }

    #[test]
    fn test_to_session_prefers_absolute_expiry() {
        let now = Utc::now();
        let session = to_session(token(Some(3600), Some(1_767_225_600)), now);
        assert_eq!(session.expires_at.map(|at| at.timestamp()), Some(1_767_225_600));
        assert_eq!(session.email(), Some("ana@example.com"));
    }

    #[test]
    fn test_to_session_falls_back_to_relative_expiry() {
        let now = Utc::now();
        let session = to_session(token(Some(3600), None), now);
        assert_eq!(session.expires_at, Some(now + Duration::seconds(3600)));

        let session = to_session(token(None, None), now);
        assert_eq!(session.expires_at, None);
    }

    #[test]
    fn test_map_auth_error() {
        assert_eq!(
            map_auth_error(AppError::ApiError("User already registered".into())),
            AppError::AuthError("User already registered".into())
        );
        assert!(matches!(
            map_auth_error(AppError::ExternalServiceError("HTTP 500: boom".into())),
            AppError::AuthError(msg) if msg.contains("unavailable")
        ));
        assert!(matches!(
            map_auth_error(AppError::SerializationError("bad".into())),
            AppError::SerializationError(_)
        ));
    }
}
