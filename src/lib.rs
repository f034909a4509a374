//! # Domain Path
//!
//! Per-domain URL alias storage for multi-site content systems, backed by PostgreSQL.
//!
//! Each alias maps a source path (e.g. `/node/1`) to an alias path (e.g. `/about-us`)
//! for one domain and language, optionally owned by a content entity.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Alias entities, save context, table schema and collaborator traits
//! - **Application Layer** ([`application`]) - The [`AliasStorage`] write path
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL, Redis tag invalidation, event broadcast
//!
//! ## Quick Start
//!
//! ```ignore
//! let runtime = domain_path::bootstrap::from_env().await?;
//! let mut listener = runtime.events.subscribe();
//!
//! let mut ctx = SaveContext::new().with_domain_id(3);
//! let outcome = runtime
//!     .storage
//!     .save(AliasInput::new("/node/1", "/about-us").with_langcode("en"), &mut ctx)
//!     .await?;
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use application::services::AliasStorage;
pub use error::PathError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::AliasStorage;
    pub use crate::domain::context::SaveContext;
    pub use crate::domain::entities::{
        AliasInput, AliasRecord, ContentEntity, EntityRef, LANGCODE_NOT_SPECIFIED, PathOperation,
        PriorValues, SaveOutcome,
    };
    pub use crate::domain::path_event::PathEvent;
    pub use crate::error::PathError;
}
