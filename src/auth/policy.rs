//! Input validation
//!
//! Cheap checks applied before any store access so malformed input gets its
//! own failure kind.

use crate::error::AuthError;

pub const DEFAULT_MAX_IDENTITY_LENGTH: usize = 100;
pub const DEFAULT_MAX_SECRET_LENGTH: usize = 14;

/// Rejects the pair when either value is empty.
pub fn validate_required(identity: &str, secret: &str) -> Result<(), AuthError> {
    if identity.is_empty() || secret.is_empty() {
        return Err(AuthError::ValueRequired);
    }
    Ok(())
}

/// Maximum input lengths, measured in bytes.
///
/// A limit of zero rejects every non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPolicy {
    Disabled,
    Enforced {
        max_identity: usize,
        max_secret: usize,
    },
}

impl Default for LengthPolicy {
    fn default() -> Self {
        LengthPolicy::Enforced {
            max_identity: DEFAULT_MAX_IDENTITY_LENGTH,
            max_secret: DEFAULT_MAX_SECRET_LENGTH,
        }
    }
}

impl LengthPolicy {
    pub fn enforced(max_identity: usize, max_secret: usize) -> Self {
        LengthPolicy::Enforced {
            max_identity,
            max_secret,
        }
    }

    /// Rejects the pair when either value is longer than its limit.
    pub fn check(&self, identity: &str, secret: &str) -> Result<(), AuthError> {
        match *self {
            LengthPolicy::Disabled => Ok(()),
            LengthPolicy::Enforced {
                max_identity,
                max_secret,
            } => {
                if identity.len() > max_identity || secret.len() > max_secret {
                    Err(AuthError::LengthExceeded)
                } else {
                    Ok(())
                }
            }
        }
    }
}
