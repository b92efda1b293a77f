//! Configuration management for the login prompt
//!
//! Loads an optional `config.toml` with environment overrides. Every field has
//! a default, so the prompt runs without any configuration at all.

use config::{Config, Environment, File, FileFormat, Map, Source};
use serde::Deserialize;

use crate::auth::{DEFAULT_MAX_IDENTITY_LENGTH, DEFAULT_MAX_SECRET_LENGTH, LengthPolicy};
use crate::store::{UserSeed, default_seeds};

const CONFIG_PATH: &str = "config";
const ENV_PREFIX: &str = "RAX_LOGIN";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub login: LoginConfig,

    /// Records the in-memory store is seeded with
    pub users: Vec<UserSeed>,
}

/// Input validation settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    /// Reject identities and secrets longer than the limits below
    /// Environment: RAX_LOGIN_AUTH__ENFORCE_LENGTH
    pub enforce_length: bool,

    /// Maximum identity length in bytes
    pub max_identity_length: usize,

    /// Maximum secret length in bytes
    pub max_secret_length: usize,
}

/// Interactive prompt settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoginConfig {
    /// Attempts allowed before giving up; unset means no limit
    /// Environment: RAX_LOGIN_LOGIN__MAX_ATTEMPTS
    pub max_attempts: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            login: LoginConfig::default(),
            users: default_seeds(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enforce_length: true,
            max_identity_length: DEFAULT_MAX_IDENTITY_LENGTH,
            max_secret_length: DEFAULT_MAX_SECRET_LENGTH,
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            max_attempts: Some(6),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_sources(
            File::with_name(CONFIG_PATH).required(false),
            environment(None),
        )
    }

    /// Load configuration from TOML text, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::from_settings(settings)
    }

    /// Load configuration from a file source layered under an environment source
    pub fn from_sources<S>(file: S, env: Environment) -> Result<Self, config::ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = Config::builder().add_source(file).add_source(env).build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, config::ConfigError> {
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.auth.enforce_length {
            if self.auth.max_identity_length == 0 {
                return Err(config::ConfigError::Message(
                    "max_identity_length must be greater than 0".into(),
                ));
            }

            if self.auth.max_secret_length == 0 {
                return Err(config::ConfigError::Message(
                    "max_secret_length must be greater than 0".into(),
                ));
            }
        }

        if self.login.max_attempts == Some(0) {
            return Err(config::ConfigError::Message(
                "max_attempts must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Environment source for `RAX_LOGIN_` variables, `__` separating nested keys.
///
/// `vars` replaces the process environment when given.
pub fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

impl AuthConfig {
    /// Get the length policy these settings describe
    pub fn length_policy(&self) -> LengthPolicy {
        if self.enforce_length {
            LengthPolicy::enforced(self.max_identity_length, self.max_secret_length)
        } else {
            LengthPolicy::Disabled
        }
    }
}
