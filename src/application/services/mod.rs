//! Business logic services for the application layer.

pub mod alias_storage;

pub use alias_storage::AliasStorage;
