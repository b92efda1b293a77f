//! Authentication result types
//!
//! Defines the value returned by a successful authentication.

use crate::store::UserRecord;

/// Result of a successful authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub user_id: u64,
    pub username: String,
}

impl From<&UserRecord> for AuthSuccess {
    fn from(record: &UserRecord) -> Self {
        Self {
            user_id: record.id(),
            username: record.name().to_string(),
        }
    }
}
