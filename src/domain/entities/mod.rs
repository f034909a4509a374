//! Core domain entities representing the alias data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`AliasRecord`] - A persisted row of the `domain_path` table
//! - [`AliasInput`] - Source, alias, langcode and optional pid of one save call
//! - [`AliasFields`] - Column values assembled for a write
//! - [`PriorValues`] - Snapshot of an alias before it was updated
//! - [`SaveOutcome`] - A written record, or the "no row affected" result
//! - [`EntityRef`] - The content entity an alias belongs to

pub mod alias;
pub mod entity_ref;

pub use alias::{
    AliasFields, AliasInput, AliasRecord, LANGCODE_NOT_SPECIFIED, OriginalAlias, PathOperation,
    PriorValues, SaveOutcome,
};
pub use entity_ref::{ContentEntity, EntityRef};
