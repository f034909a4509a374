//! Infrastructure layer for external integrations.
//!
//! This layer implements the collaborator interfaces consumed by the alias
//! storage service.
//!
//! # Modules
//!
//! - [`cache`] - Cache tag invalidation (Redis and no-op implementations)
//! - [`events`] - Path event broadcast
//! - [`negotiation`] - Domain negotiators
//! - [`persistence`] - PostgreSQL repository implementation

pub mod cache;
pub mod events;
pub mod negotiation;
pub mod persistence;
