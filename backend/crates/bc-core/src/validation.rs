//! Input validation for sign-up and sign-in payloads

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 256;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 32;

#[track_caller]
fn invalid(field: &str, message: String) -> CoreError {
    CoreError::Validation {
        message,
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Normalize an email for lookup: trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(invalid("email", "email cannot be empty".to_string()));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid(
            "email",
            format!("email exceeds {} characters", MAX_EMAIL_LENGTH),
        ));
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(invalid("email", "email is not a valid address".to_string())),
    }
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(invalid(
            "password",
            format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(invalid(
            "password",
            format!("password exceeds {} characters", MAX_PASSWORD_LENGTH),
        ));
    }

    Ok(())
}

#[track_caller]
pub fn validate_username(username: &str) -> CoreErrorResult<()> {
    let len = username.trim().chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(invalid(
            "username",
            format!(
                "username must be {}-{} characters",
                MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
            ),
        ));
    }

    Ok(())
}
