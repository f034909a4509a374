//! Domain negotiators.

use crate::domain::repositories::DomainNegotiator;
use async_trait::async_trait;

/// Reports a fixed, configured domain as active.
///
/// Built from `DEFAULT_DOMAIN_ID`. With no configured id every negotiation
/// comes back empty, and writes without an explicit domain are rejected by
/// the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDomainNegotiator {
    domain_id: Option<i32>,
}

impl FixedDomainNegotiator {
    pub fn new(domain_id: Option<i32>) -> Self {
        Self { domain_id }
    }
}

#[async_trait]
impl DomainNegotiator for FixedDomainNegotiator {
    async fn active_id(&self) -> Option<i32> {
        self.domain_id
    }
}
