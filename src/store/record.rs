//! User record types
//!
//! Defines the stored representation of an account and the seed entries the
//! store is built from.

use serde::Deserialize;
use std::fmt;

/// One registered account.
///
/// Records handed out by a store are owned copies, so changing one never
/// touches the store's own state.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: u64,
    name: String,
    secret: String,
}

impl UserRecord {
    pub fn new(id: u64, name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            secret: secret.into(),
        }
    }

    /// Returns the identifier assigned when the record was created.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the name used as the lookup key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored credential.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"***")
            .finish()
    }
}

/// A name/secret pair used to seed a store. Ids are assigned by the store.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UserSeed {
    pub name: String,
    pub secret: String,
}

impl UserSeed {
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: secret.into(),
        }
    }
}

/// Seed used when no users are configured.
pub fn default_seeds() -> Vec<UserSeed> {
    vec![UserSeed::new("joao", "1234")]
}
