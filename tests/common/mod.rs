#![allow(dead_code)]

use domain_path::application::services::AliasStorage;
use domain_path::infrastructure::cache::NullCache;
use domain_path::infrastructure::events::BroadcastEventSink;
use domain_path::infrastructure::negotiation::FixedDomainNegotiator;
use domain_path::infrastructure::persistence::PgAliasRepository;
use sqlx::PgPool;
use std::sync::Arc;

pub type TestStorage = AliasStorage<PgAliasRepository, FixedDomainNegotiator>;

pub async fn table_exists(pool: &PgPool, table: &str) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT to_regclass($1) IS NOT NULL")
        .bind(table)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn stored_domain_id(pool: &PgPool, pid: i32) -> i32 {
    sqlx::query_scalar::<_, i32>("SELECT domain_id FROM domain_path WHERE pid = $1")
        .bind(pid)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_aliases(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM domain_path")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_storage(
    pool: PgPool,
    active_domain: Option<i32>,
) -> (TestStorage, BroadcastEventSink) {
    let events = BroadcastEventSink::new(64);

    let storage = AliasStorage::new(
        Arc::new(PgAliasRepository::new(Arc::new(pool))),
        Arc::new(FixedDomainNegotiator::new(active_domain)),
        Arc::new(events.clone()),
        Arc::new(NullCache::new()),
    );

    (storage, events)
}
