//! Error types for alias persistence.

use std::fmt;
use thiserror::Error;

/// SQLSTATE reported by PostgreSQL for a relation that does not exist.
const UNDEFINED_TABLE: &str = "42P01";

/// Which of the two paths of an alias failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Source,
    Alias,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Source => write!(f, "Source"),
            Self::Alias => write!(f, "Alias"),
        }
    }
}

/// Errors returned by [`crate::application::services::AliasStorage`].
///
/// A failed best-effort read of the prior values during an update is never
/// surfaced here: it is logged and recorded as
/// [`crate::domain::entities::PriorValues::Unavailable`].
#[derive(Debug, Error)]
pub enum PathError {
    /// The source or alias path does not start with `/`. Raised before any I/O.
    #[error("{kind} path {path} has to start with a slash.")]
    InvalidInput { kind: PathKind, path: String },

    /// Any failure of the backing store, including a failed table creation.
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl PathError {
    pub fn invalid_source(path: impl Into<String>) -> Self {
        Self::InvalidInput {
            kind: PathKind::Source,
            path: path.into(),
        }
    }

    pub fn invalid_alias(path: impl Into<String>) -> Self {
        Self::InvalidInput {
            kind: PathKind::Alias,
            path: path.into(),
        }
    }

    /// Returns true when the store reported that the alias table does not exist.
    ///
    /// The table is ensured before the first write, so after that this means
    /// it was dropped while the process was running.
    pub fn is_missing_table(&self) -> bool {
        match self {
            Self::Storage(e) => e
                .as_database_error()
                .and_then(|db| db.code())
                .is_some_and(|code| code == UNDEFINED_TABLE),
            Self::InvalidInput { .. } => false,
        }
    }
}
