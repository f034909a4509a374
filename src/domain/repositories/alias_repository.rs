//! Repository trait for alias rows.

use crate::domain::entities::{AliasFields, AliasRecord, OriginalAlias};
use crate::domain::schema::TableSchema;
use async_trait::async_trait;

/// Storage connection for the `domain_path` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_alias.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Creates the table and its indexes unless they already exist.
    ///
    /// Must succeed when another caller created the table concurrently.
    ///
    /// # Errors
    ///
    /// Returns any database error other than "already exists".
    async fn ensure_table(&self, schema: &'static TableSchema) -> Result<(), sqlx::Error>;

    /// Inserts a new row and returns it with the assigned `pid`.
    ///
    /// # Errors
    ///
    /// Returns the database error unchanged, including NOT NULL violations
    /// when `fields.domain_id` is `None`.
    async fn insert(&self, fields: &AliasFields) -> Result<AliasRecord, sqlx::Error>;

    /// Overwrites the row identified by `pid`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` with the updated row
    /// - `Ok(None)` if no row has this `pid`
    ///
    /// # Errors
    ///
    /// Returns the database error unchanged.
    async fn update(&self, pid: i32, fields: &AliasFields)
    -> Result<Option<AliasRecord>, sqlx::Error>;

    /// Reads the source, alias and langcode currently stored under `pid`.
    ///
    /// # Errors
    ///
    /// Returns the database error unchanged.
    async fn find_original(&self, pid: i32) -> Result<Option<OriginalAlias>, sqlx::Error>;

    /// Loads a full row by primary key.
    ///
    /// # Errors
    ///
    /// Returns the database error unchanged.
    async fn find_by_pid(&self, pid: i32) -> Result<Option<AliasRecord>, sqlx::Error>;
}
