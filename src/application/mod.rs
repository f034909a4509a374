//! Application layer services implementing the alias write path.
//!
//! Services consume the collaborator traits from [`crate::domain::repositories`]
//! and the infrastructure interfaces for events and cache invalidation.
//!
//! # Available Services
//!
//! - [`services::alias_storage::AliasStorage`] - Insert/update of per-domain aliases

pub mod services;
