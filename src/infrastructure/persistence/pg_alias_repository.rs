//! PostgreSQL implementation of the alias repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::{AliasFields, AliasRecord, OriginalAlias};
use crate::domain::repositories::AliasRepository;
use crate::domain::schema::TableSchema;

/// SQLSTATE for `CREATE TABLE` on an existing relation.
const DUPLICATE_TABLE: &str = "42P07";
/// SQLSTATE for a unique violation; concurrent `CREATE ... IF NOT EXISTS`
/// statements can hit it on the system catalogs.
const UNIQUE_VIOLATION: &str = "23505";

/// Row shape shared by every query returning a full alias.
#[derive(Debug, FromRow)]
struct AliasRow {
    pid: i32,
    domain_id: i32,
    source: String,
    alias: String,
    langcode: String,
    entity_type: Option<String>,
    entity_id: Option<i32>,
}

impl From<AliasRow> for AliasRecord {
    fn from(row: AliasRow) -> Self {
        Self {
            pid: row.pid,
            domain_id: row.domain_id,
            source: row.source,
            alias: row.alias,
            langcode: row.langcode,
            entity_type: row.entity_type,
            entity_id: row.entity_id,
            original: None,
        }
    }
}

#[derive(Debug, FromRow)]
struct OriginalRow {
    source: String,
    alias: String,
    langcode: String,
}

/// PostgreSQL repository for the `domain_path` table.
///
/// Queries are checked at runtime rather than with `query!`, since the table
/// may not exist until [`AliasRepository::ensure_table`] has run.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn is_already_exists(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == DUPLICATE_TABLE || code == UNIQUE_VIOLATION)
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn ensure_table(&self, schema: &'static TableSchema) -> Result<(), sqlx::Error> {
        let mut statements = vec![schema.create_table_sql()];
        statements.extend(schema.create_index_sql());

        for statement in &statements {
            match sqlx::query(statement).execute(self.pool.as_ref()).await {
                Ok(_) => {}
                Err(e) if is_already_exists(&e) => {
                    debug!(table = schema.name, "Created concurrently: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            table = schema.name,
            version = schema.version,
            "Alias table ready"
        );
        Ok(())
    }

    async fn insert(&self, fields: &AliasFields) -> Result<AliasRecord, sqlx::Error> {
        let row = sqlx::query_as::<_, AliasRow>(
            r#"
            INSERT INTO domain_path (source, alias, langcode, domain_id, entity_type, entity_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING pid, domain_id, source, alias, langcode, entity_type, entity_id
            "#,
        )
        .bind(&fields.source)
        .bind(&fields.alias)
        .bind(&fields.langcode)
        .bind(fields.domain_id)
        .bind(&fields.entity_type)
        .bind(fields.entity_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        pid: i32,
        fields: &AliasFields,
    ) -> Result<Option<AliasRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, AliasRow>(
            r#"
            UPDATE domain_path SET
                source      = $2,
                alias       = $3,
                langcode    = $4,
                domain_id   = $5,
                entity_type = $6,
                entity_id   = $7
            WHERE pid = $1
            RETURNING pid, domain_id, source, alias, langcode, entity_type, entity_id
            "#,
        )
        .bind(pid)
        .bind(&fields.source)
        .bind(&fields.alias)
        .bind(&fields.langcode)
        .bind(fields.domain_id)
        .bind(&fields.entity_type)
        .bind(fields.entity_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_original(&self, pid: i32) -> Result<Option<OriginalAlias>, sqlx::Error> {
        let row = sqlx::query_as::<_, OriginalRow>(
            "SELECT source, alias, langcode FROM domain_path WHERE pid = $1",
        )
        .bind(pid)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| OriginalAlias {
            source: r.source,
            alias: r.alias,
            langcode: r.langcode,
        }))
    }

    async fn find_by_pid(&self, pid: i32) -> Result<Option<AliasRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, AliasRow>(
            r#"
            SELECT pid, domain_id, source, alias, langcode, entity_type, entity_id
            FROM domain_path
            WHERE pid = $1
            "#,
        )
        .bind(pid)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
