use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Signed-in session issued by the identity provider
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AuthUser,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|at| at <= now).unwrap_or(false)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn email(&self) -> Option<&str> {
        self.user.email.as_deref()
    }
}

// Tokens stay out of logs
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Result of a sign-up request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Provider signed the user straight in
    SessionStarted(Session),
    /// Provider sent a confirmation e-mail; the session arrives via the
    /// redirect callback
    ConfirmationRequired { email: String },
}
