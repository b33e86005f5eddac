//! Process-wide seeder configuration.
//!
//! Values are read from the environment (after `.env` is loaded) the first
//! time [`Config::init`] succeeds and are cached for the lifetime of the
//! process.

use once_cell::sync::OnceCell;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be an unsigned integer, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub project_name: String,
    pub database_path: String,
    pub log_level: String,
    pub log_file: String,
    /// Fixed RNG seed. `None` means the seeder draws one from the OS.
    pub rng_seed: Option<u64>,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Builds a configuration from the current environment without caching it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_name =
            env::var("PROJECT_NAME").unwrap_or_else(|_| "quizmaster-seeder".into());
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "data/quizmaster.db".into());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/seeder.log".into());

        let rng_seed = match env::var("SEED_RNG") {
            Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse().map_err(|_| {
                ConfigError::InvalidNumber {
                    name: "SEED_RNG",
                    value: raw.clone(),
                }
            })?),
            _ => None,
        };

        Ok(Config {
            project_name,
            database_path,
            log_level,
            log_file,
            rng_seed,
        })
    }

    /// Loads `.env`, reads the environment and caches the result.
    ///
    /// Later calls return the cached configuration.
    pub fn init() -> Result<&'static Self, ConfigError> {
        dotenvy::dotenv().ok();
        CONFIG.get_or_try_init(Self::from_env)
    }
}
