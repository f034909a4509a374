//! Collaborator trait definitions for the domain layer.
//!
//! These traits abstract the storage connection and the domain negotiation
//! consumed by the alias storage service. Concrete implementations live in
//! `crate::infrastructure`.
//!
//! # Available Traits
//!
//! - [`AliasRepository`] - Table creation and row reads/writes for aliases
//! - [`DomainNegotiator`] - The currently active domain
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod alias_repository;
pub mod domain_negotiator;

pub use alias_repository::AliasRepository;
pub use domain_negotiator::DomainNegotiator;

#[cfg(test)]
pub use alias_repository::MockAliasRepository;
#[cfg(test)]
pub use domain_negotiator::MockDomainNegotiator;
