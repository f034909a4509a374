//! Source of the currently active domain.

use async_trait::async_trait;

/// Determines the domain that is active for the current operation.
///
/// How the domain is negotiated (request host, session, configuration) is up
/// to the implementation.
///
/// # Implementations
///
/// - [`crate::infrastructure::negotiation::FixedDomainNegotiator`] - A configured domain id
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainNegotiator: Send + Sync {
    /// Returns the active domain id, or `None` when none can be determined.
    async fn active_id(&self) -> Option<i32>;
}
