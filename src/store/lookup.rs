//! Lookup capability
//!
//! The contract the authentication service uses to fetch records, so any
//! backing store can be substituted without touching the service.

use std::sync::Arc;

use crate::error::LookupError;
use crate::store::UserRecord;

/// Answers "does a record with this name exist, and if so what is it".
///
/// Implementations must be safe to call concurrently (`Send + Sync`); the
/// service only ever reads through this trait.
pub trait UserLookup: Send + Sync {
    /// Returns an owned copy of the record named `name`.
    ///
    /// Any string is accepted, including the empty one. The only failure is
    /// [`LookupError::NotFound`].
    fn find(&self, name: &str) -> Result<UserRecord, LookupError>;
}

impl<L: UserLookup + ?Sized> UserLookup for &L {
    #[inline]
    fn find(&self, name: &str) -> Result<UserRecord, LookupError> {
        (**self).find(name)
    }
}

impl<L: UserLookup + ?Sized> UserLookup for Arc<L> {
    #[inline]
    fn find(&self, name: &str) -> Result<UserRecord, LookupError> {
        (**self).find(name)
    }
}

impl<L: UserLookup + ?Sized> UserLookup for Box<L> {
    #[inline]
    fn find(&self, name: &str) -> Result<UserRecord, LookupError> {
        (**self).find(name)
    }
}
