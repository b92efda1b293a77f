//! In-memory user store
//!
//! Records are seeded once at construction and never change afterwards, so
//! shared references can be read from any number of threads.

use std::collections::{HashMap, HashSet};

use log::info;

use crate::error::{LookupError, SeedError};
use crate::store::{UserLookup, UserRecord, UserSeed};

/// Read-only store backed by a map from name to record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserStore {
    /// Builds a store from seeds, assigning ids 1, 2, 3... in seed order.
    ///
    /// Rejects empty names and names that appear more than once.
    pub fn from_seeds<'a, I>(seeds: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = &'a UserSeed>,
    {
        let records = seeds
            .into_iter()
            .zip(1u64..)
            .map(|(seed, id)| UserRecord::new(id, seed.name.as_str(), seed.secret.as_str()));
        Self::from_records(records)
    }

    /// Builds a store from records whose ids were assigned elsewhere.
    ///
    /// Rejects empty names, repeated names and repeated ids.
    pub fn from_records<I>(records: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = UserRecord>,
    {
        let mut users = HashMap::new();
        let mut ids = HashSet::new();

        for record in records {
            if record.name().is_empty() {
                return Err(SeedError::EmptyName);
            }
            if users.contains_key(record.name()) {
                return Err(SeedError::DuplicateName(record.name().to_string()));
            }
            if !ids.insert(record.id()) {
                return Err(SeedError::DuplicateId(record.id()));
            }
            users.insert(record.name().to_string(), record);
        }

        info!("User store seeded with {} record(s)", users.len());
        Ok(Self { users })
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Checks whether a record named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }
}

impl UserLookup for InMemoryUserStore {
    fn find(&self, name: &str) -> Result<UserRecord, LookupError> {
        self.users
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }
}
