use regex::Regex;

use crate::shared::errors::AppError;

/// Minimum password length accepted by the identity provider
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct Validator;

impl Validator {
    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if email.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Email cannot be empty".to_string(),
            ));
        }
        if email.len() > 254 {
            return Err(AppError::ValidationError(
                "Email too long (max 254 characters)".to_string(),
            ));
        }

        let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .map_err(|e| AppError::ValidationError(format!("Invalid email pattern: {}", e)))?;
        if !re.is_match(email.trim()) {
            return Err(AppError::ValidationError(
                "Email address is not valid".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::ValidationError(
                "Password cannot be empty".to_string(),
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        Ok(())
    }

    pub fn validate_title_id(id: u32) -> Result<(), AppError> {
        if id == 0 {
            return Err(AppError::ValidationError(
                "Title ID must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
