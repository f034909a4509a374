//! Per-domain alias persistence service.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::domain::context::SaveContext;
use crate::domain::entities::{
    AliasFields, AliasInput, AliasRecord, PathOperation, PriorValues, SaveOutcome,
};
use crate::domain::path_event::PathEvent;
use crate::domain::repositories::{AliasRepository, DomainNegotiator};
use crate::domain::schema::{DOMAIN_PATH, TableSchema};
use crate::error::PathError;
use crate::infrastructure::cache::{ROUTE_MATCH_TAG, TagInvalidator};
use crate::infrastructure::events::PathEventSink;

/// Inserts and updates path aliases scoped by domain and language.
///
/// Each write is tagged with the domain and owning entity from the caller's
/// [`SaveContext`]. The alias table is created on first use. After a row has
/// been written, listeners get a `path_insert` / `path_update` event and the
/// `route_match` cache tag is invalidated.
///
/// Uniqueness of `(source, alias, langcode, domain_id)` is not enforced here.
pub struct AliasStorage<R: AliasRepository, N: DomainNegotiator> {
    repository: Arc<R>,
    negotiator: Arc<N>,
    events: Arc<dyn PathEventSink>,
    cache: Arc<dyn TagInvalidator>,
    schema: &'static TableSchema,
    schema_ready: OnceCell<()>,
}

impl<R: AliasRepository, N: DomainNegotiator> AliasStorage<R, N> {
    /// Creates a new alias storage service for the `domain_path` table.
    pub fn new(
        repository: Arc<R>,
        negotiator: Arc<N>,
        events: Arc<dyn PathEventSink>,
        cache: Arc<dyn TagInvalidator>,
    ) -> Self {
        Self {
            repository,
            negotiator,
            events,
            cache,
            schema: &DOMAIN_PATH,
            schema_ready: OnceCell::new(),
        }
    }

    /// Creates the alias table if needed. Runs at most once successfully per
    /// storage instance; a failed attempt is retried on the next call.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Storage`] if the table cannot be created.
    pub async fn ensure_schema(&self) -> Result<(), PathError> {
        self.schema_ready
            .get_or_try_init(|| async {
                self.repository.ensure_table(self.schema).await?;
                Ok::<(), PathError>(())
            })
            .await?;
        Ok(())
    }

    /// Inserts a new alias or updates the alias identified by `input.pid`.
    ///
    /// # Returns
    ///
    /// - `Ok(SaveOutcome::Written(record))` once a row was written; on updates
    ///   `record.original` holds the prior values
    /// - `Ok(SaveOutcome::NoRowAffected)` if `input.pid` matches no row
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidInput`] if the source or alias does not
    /// start with `/`; nothing is written in that case.
    ///
    /// Returns [`PathError::Storage`] if the table cannot be created or the
    /// write fails, including when no domain could be resolved.
    pub async fn save(
        &self,
        input: AliasInput,
        ctx: &mut SaveContext,
    ) -> Result<SaveOutcome, PathError> {
        if !input.source.starts_with('/') {
            return Err(PathError::invalid_source(input.source));
        }
        if !input.alias.starts_with('/') {
            return Err(PathError::invalid_alias(input.alias));
        }

        self.ensure_schema().await?;

        let fields = AliasFields {
            domain_id: ctx.resolve_domain_id(self.negotiator.as_ref()).await,
            entity_type: ctx.entity_type().map(str::to_string),
            entity_id: ctx.entity_id(),
            source: input.source,
            alias: input.alias,
            langcode: input.langcode,
        };

        let (operation, written) = match input.pid {
            None => {
                let record = self
                    .repository
                    .insert(&fields)
                    .await
                    .map_err(|e| self.write_failed(PathOperation::Insert, e))?;
                (PathOperation::Insert, Some(record))
            }
            Some(pid) => {
                let original = self.read_original(pid).await;
                let record = self
                    .repository
                    .update(pid, &fields)
                    .await
                    .map_err(|e| self.write_failed(PathOperation::Update, e))?;
                let record = record.map(|r| AliasRecord {
                    original: Some(original),
                    ..r
                });
                (PathOperation::Update, record)
            }
        };

        let Some(record) = written else {
            debug!(pid = ?input.pid, "Alias update affected no row");
            return Ok(SaveOutcome::NoRowAffected);
        };

        debug!(
            operation = operation.event_name(),
            pid = record.pid,
            domain_id = record.domain_id,
            source = %record.source,
            alias = %record.alias,
            "Alias saved"
        );

        self.events.notify(PathEvent::new(operation, record.clone()));

        if let Err(e) = self.cache.invalidate_tag(ROUTE_MATCH_TAG).await {
            warn!("Failed to invalidate {} cache tag: {}", ROUTE_MATCH_TAG, e);
        }

        Ok(SaveOutcome::Written(record))
    }

    /// Loads a stored alias by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Storage`] on database errors.
    pub async fn load(&self, pid: i32) -> Result<Option<AliasRecord>, PathError> {
        self.ensure_schema().await?;
        Ok(self.repository.find_by_pid(pid).await?)
    }

    fn write_failed(&self, operation: PathOperation, e: sqlx::Error) -> PathError {
        let err = PathError::from(e);
        if err.is_missing_table() {
            warn!(
                table = self.schema.name,
                operation = operation.event_name(),
                "Alias table disappeared after it was ensured"
            );
        }
        err
    }

    /// Best-effort read of the values an update is about to overwrite.
    async fn read_original(&self, pid: i32) -> PriorValues {
        match self.repository.find_original(pid).await {
            Ok(Some(original)) => PriorValues::Captured(original),
            Ok(None) => PriorValues::Unavailable,
            Err(e) => {
                warn!(pid, "Failed to read alias before update: {}", e);
                PriorValues::Unavailable
            }
        }
    }
}
