//! Authentication system
//!
//! Validates credential input, looks up the claimed user and compares
//! secrets, returning a categorized outcome.

pub mod policy;
pub mod results;
pub mod service;
pub mod verifier;

pub use policy::{
    DEFAULT_MAX_IDENTITY_LENGTH, DEFAULT_MAX_SECRET_LENGTH, LengthPolicy, validate_required,
};
pub use results::AuthSuccess;
pub use service::AuthService;
pub use verifier::{CredentialVerifier, PlaintextVerifier};
