use common::ConfigError;
use sea_orm::DbErr;
use thiserror::Error;

/// Reasons a seeding run stops.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
