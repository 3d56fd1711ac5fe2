use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use std::fmt;

/// E-mail and password as typed into the sign-in or sign-up form
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validate and normalize. Errors carry the inline form message.
    pub fn new(email: &str, password: &str) -> AppResult<Self> {
        let to_auth = |e: AppError| match e {
            AppError::ValidationError(msg) => AppError::AuthError(msg),
            other => other,
        };
        Validator::validate_email(email).map_err(to_auth)?;
        Validator::validate_password(password).map_err(to_auth)?;

        Ok(Self {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}
