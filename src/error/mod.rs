//! Error handling
//!
//! Defines error types and presentation helpers for the login system.

pub mod handlers;
pub mod types;

pub use types::*;
