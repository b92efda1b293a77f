pub mod auth;
pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use auth::{AuthService, AuthSuccess, CredentialVerifier, LengthPolicy, PlaintextVerifier};
pub use error::AuthError;
pub use store::{InMemoryUserStore, UserLookup, UserRecord};
