//! Interactive login session
//!
//! Prompts for credentials, hands them to the authentication service and
//! reports the outcome, retrying up to a caller-supplied bound.

pub mod handler;
pub mod results;

pub use handler::run_login_session;
pub use results::SessionOutcome;
