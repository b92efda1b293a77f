//! RAX Login - Entry Point
//!
//! Interactive username/password check against a seeded in-memory user store.

use log::{error, info};
use std::sync::Arc;
use tokio::io::BufReader;

use rax_login::config::AppConfig;
use rax_login::error::AppError;
use rax_login::session::{SessionOutcome, run_login_session};
use rax_login::{AuthService, InMemoryUserStore};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching login prompt...");

    if let Err(e) = run().await {
        error!("Login prompt failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let store = Arc::new(InMemoryUserStore::from_seeds(&config.users)?);
    let service = AuthService::new(store).with_length_policy(config.auth.length_policy());

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    match run_login_session(&service, &mut stdin, &mut stdout, config.login.max_attempts).await? {
        SessionOutcome::Authenticated(success) => {
            info!("Session granted to {}", success.username);
        }
        SessionOutcome::Blocked { attempts } => {
            info!("Session refused after {} attempt(s)", attempts);
        }
    }

    Ok(())
}
