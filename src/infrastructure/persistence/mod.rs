//! PostgreSQL persistence.
//!
//! - [`PgAliasRepository`] - Alias table creation, writes and reads
//! - [`connect`] - Connection pool built from [`Config`]

pub mod pg_alias_repository;

pub use pg_alias_repository::PgAliasRepository;

use crate::config::Config;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Opens a connection pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns the database error if the first connection cannot be established.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
}
