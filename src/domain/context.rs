//! Per-operation domain and entity context for alias writes.

use crate::domain::entities::{ContentEntity, EntityRef};
use crate::domain::repositories::DomainNegotiator;

/// Domain and owning entity to tag the next write with.
///
/// Built fresh for each logical operation and passed into
/// [`crate::application::services::AliasStorage::save`], so no context leaks
/// between unrelated callers. A context is not meant to be shared across
/// concurrent saves.
///
/// # Examples
///
/// ```ignore
/// let mut ctx = SaveContext::new().with_domain_id(7).with_entity(&node);
/// storage.save(AliasInput::new("/node/5", "/team"), &mut ctx).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveContext {
    domain_id: Option<i32>,
    entity: Option<EntityRef>,
}

impl SaveContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the domain for every save made with this context.
    pub fn set_domain_id(&mut self, domain_id: i32) -> &mut Self {
        self.domain_id = Some(domain_id);
        self
    }

    pub fn with_domain_id(mut self, domain_id: i32) -> Self {
        self.set_domain_id(domain_id);
        self
    }

    /// Returns the explicit or previously negotiated domain id, if any.
    pub fn domain_id(&self) -> Option<i32> {
        self.domain_id
    }

    /// Forgets the current domain so the next save asks the negotiator again.
    pub fn reset_domain_id(&mut self) -> &mut Self {
        self.domain_id = None;
        self
    }

    /// Returns the domain to write, asking the negotiator when none is set.
    ///
    /// Domain 0 is the column default and counts as unset. A negotiated id is
    /// cached on the context. When the negotiator cannot produce one the
    /// result is `None` and nothing is cached.
    pub async fn resolve_domain_id<N>(&mut self, negotiator: &N) -> Option<i32>
    where
        N: DomainNegotiator + ?Sized,
    {
        if self.domain_id.is_none_or(|id| id == 0) {
            self.domain_id = negotiator.active_id().await;
        }
        self.domain_id
    }

    pub fn set_entity<E: ContentEntity + ?Sized>(&mut self, entity: &E) -> &mut Self {
        self.entity = Some(EntityRef::from_entity(entity));
        self
    }

    pub fn with_entity<E: ContentEntity + ?Sized>(mut self, entity: &E) -> Self {
        self.set_entity(entity);
        self
    }

    pub fn entity(&self) -> Option<&EntityRef> {
        self.entity.as_ref()
    }

    pub fn entity_type(&self) -> Option<&str> {
        self.entity.as_ref().map(|e| e.entity_type.as_str())
    }

    pub fn entity_id(&self) -> Option<i32> {
        self.entity.as_ref().map(|e| e.id)
    }
}
