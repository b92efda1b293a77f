//! User store
//!
//! Holds user records keyed by name and exposes the lookup contract the
//! authentication service depends on.

pub mod lookup;
pub mod memory;
pub mod record;

pub use lookup::UserLookup;
pub use memory::InMemoryUserStore;
pub use record::{UserRecord, UserSeed, default_seeds};
