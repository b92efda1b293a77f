//! Error types
//!
//! Defines the closed set of failures each module can return.

use std::fmt;
use std::io;

/// Why an authentication attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthError {
    /// Identity or secret was empty.
    ValueRequired,
    /// Identity or secret exceeded the configured maximum length.
    LengthExceeded,
    /// No record exists for the supplied identity.
    UserNotFound,
    /// A record exists but the supplied secret does not match.
    InvalidCredential,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::ValueRequired => write!(f, "value is required"),
            AuthError::LengthExceeded => write!(f, "maximum length exceeded"),
            AuthError::UserNotFound => write!(f, "user does not exist"),
            AuthError::InvalidCredential => write!(f, "invalid credential"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Lookup module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    NotFound(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound(name) => write!(f, "User not found: {}", name),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<LookupError> for AuthError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::NotFound(_) => AuthError::UserNotFound,
        }
    }
}

/// Errors raised while seeding a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    EmptyName,
    DuplicateName(String),
    DuplicateId(u64),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::EmptyName => write!(f, "User name cannot be empty"),
            SeedError::DuplicateName(name) => write!(f, "Duplicate user name: {}", name),
            SeedError::DuplicateId(id) => write!(f, "Duplicate user id: {}", id),
        }
    }
}

impl std::error::Error for SeedError {}

/// Top-level error for the login front end
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Seed(SeedError),
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Seed(e) => write!(f, "Seed error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Seed(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<SeedError> for AppError {
    fn from(error: SeedError) -> Self {
        AppError::Seed(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}
