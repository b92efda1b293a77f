//! Error handlers
//!
//! Turns authentication failures into text that is safe to show to users.

use crate::error::types::AuthError;
use log::warn;

/// Message shown to the user for a failed attempt.
///
/// Unknown users and wrong secrets share one message so the prompt cannot be
/// used to discover which accounts exist.
pub fn user_message(err: &AuthError) -> &'static str {
    match err {
        AuthError::ValueRequired => "username and password are required",
        AuthError::LengthExceeded => "username or password is too long",
        AuthError::UserNotFound | AuthError::InvalidCredential => "invalid username or password",
    }
}

/// Log a failed attempt with its real cause.
pub fn log_auth_failure(attempt: usize, err: &AuthError) {
    warn!("Login attempt {} failed: {}", attempt, err);
}
