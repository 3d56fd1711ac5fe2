use serde::{Deserialize, Serialize};
use uuid::Uuid;

// GoTrue (Supabase Auth) wire types

#[derive(Debug, Clone, Deserialize)]
pub struct GoTrueUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Reply of `/token` (password and pkce grants) and of an auto-confirmed signup
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: Option<i64>,
    /// Unix seconds
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub refresh_token: String,
    pub user: GoTrueUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// `/signup` answers with a session when confirmations are off, or with the
/// bare user when a confirmation e-mail went out
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(TokenResponse),
    User(GoTrueUser),
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub code_challenge: &'a str,
    pub code_challenge_method: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PkceGrantRequest<'a> {
    pub auth_code: &'a str,
    pub code_verifier: &'a str,
}
