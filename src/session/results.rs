//! Session result types

use crate::auth::AuthSuccess;

/// How a login session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Authenticated(AuthSuccess),
    /// Every allowed attempt failed.
    Blocked { attempts: usize },
}
