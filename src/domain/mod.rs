//! Domain layer containing alias entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Alias data structures
//! - [`context`] - Domain and entity context of a save
//! - [`schema`] - Static layout of the `domain_path` table
//! - [`repositories`] - Storage and negotiation trait definitions
//! - [`path_event`] - Notification sent after each write
//!
//! The domain layer has no dependencies on infrastructure. Persistence logic
//! lives in [`crate::application::services`].

pub mod context;
pub mod entities;
pub mod path_event;
pub mod repositories;
pub mod schema;
