mod common;

use domain_path::prelude::*;
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_insert_creates_missing_table(pool: PgPool) {
    assert!(!common::table_exists(&pool, "domain_path").await);
    let (storage, _events) = common::create_test_storage(pool.clone(), Some(3));

    let outcome = storage
        .save(
            AliasInput::new("/node/1", "/about-us").with_langcode("en"),
            &mut SaveContext::new(),
        )
        .await
        .unwrap();

    let record = outcome.into_record().unwrap();
    assert!(record.pid > 0);
    assert_eq!(record.domain_id, 3);
    assert!(common::table_exists(&pool, "domain_path").await);
    assert_eq!(common::stored_domain_id(&pool, record.pid).await, 3);
}

#[sqlx::test(migrations = false)]
async fn test_invalid_input_writes_nothing(pool: PgPool) {
    let (storage, _events) = common::create_test_storage(pool.clone(), Some(1));

    let result = storage
        .save(AliasInput::new("node/1", "/about-us"), &mut SaveContext::new())
        .await;
    assert!(matches!(result, Err(PathError::InvalidInput { .. })));

    let result = storage
        .save(AliasInput::new("/node/1", "about-us"), &mut SaveContext::new())
        .await;
    assert!(matches!(result, Err(PathError::InvalidInput { .. })));

    assert!(!common::table_exists(&pool, "domain_path").await);
}

#[sqlx::test(migrations = false)]
async fn test_explicit_domain_overrides_active_domain(pool: PgPool) {
    let (storage, _events) = common::create_test_storage(pool.clone(), Some(3));
    let mut ctx = SaveContext::new().with_domain_id(7);

    let record = storage
        .save(AliasInput::new("/node/1", "/about-us"), &mut ctx)
        .await
        .unwrap()
        .into_record()
        .unwrap();

    assert_eq!(record.domain_id, 7);
    assert_eq!(common::stored_domain_id(&pool, record.pid).await, 7);
}

#[sqlx::test(migrations = false)]
async fn test_unresolved_domain_fails_in_storage(pool: PgPool) {
    let (storage, _events) = common::create_test_storage(pool.clone(), None);

    let result = storage
        .save(AliasInput::new("/node/1", "/about-us"), &mut SaveContext::new())
        .await;

    assert!(matches!(result, Err(PathError::Storage(_))));
    assert_eq!(common::count_aliases(&pool).await, 0);
}

#[sqlx::test(migrations = false)]
async fn test_update_reports_original_values(pool: PgPool) {
    let (storage, _events) = common::create_test_storage(pool, Some(1));

    let created = storage
        .save(AliasInput::new("/node/1", "/about-us"), &mut SaveContext::new())
        .await
        .unwrap()
        .into_record()
        .unwrap();

    let updated = storage
        .save(
            AliasInput::new("/node/1", "/about").with_pid(created.pid),
            &mut SaveContext::new(),
        )
        .await
        .unwrap()
        .into_record()
        .unwrap();

    assert_eq!(updated.pid, created.pid);
    assert_eq!(updated.alias, "/about");
    let original = updated.original.as_ref().and_then(PriorValues::captured).unwrap();
    assert_eq!(original.alias, "/about-us");

    let stored = storage.load(created.pid).await.unwrap().unwrap();
    assert_eq!(stored.alias, "/about");
}

#[sqlx::test(migrations = false)]
async fn test_update_of_unknown_pid_is_not_written(pool: PgPool) {
    let (storage, events) = common::create_test_storage(pool, Some(1));
    let mut listener = events.subscribe();

    let outcome = storage
        .save(
            AliasInput::new("/node/1", "/about").with_pid(4242),
            &mut SaveContext::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome, SaveOutcome::NoRowAffected);
    assert!(listener.try_recv().is_err());
}

#[sqlx::test(migrations = false)]
async fn test_entity_association(pool: PgPool) {
    let (storage, _events) = common::create_test_storage(pool, Some(1));

    let without_entity = storage
        .save(AliasInput::new("/node/4", "/news"), &mut SaveContext::new())
        .await
        .unwrap()
        .into_record()
        .unwrap();
    assert!(without_entity.entity_type.is_none());
    assert!(without_entity.entity_id.is_none());

    let mut ctx = SaveContext::new().with_entity(&EntityRef::new("node", 5));
    let with_entity = storage
        .save(AliasInput::new("/node/5", "/team"), &mut ctx)
        .await
        .unwrap()
        .into_record()
        .unwrap();

    let stored = storage.load(with_entity.pid).await.unwrap().unwrap();
    assert_eq!(stored.entity_type.as_deref(), Some("node"));
    assert_eq!(stored.entity_id, Some(5));
}

#[sqlx::test(migrations = false)]
async fn test_events_match_returned_records(pool: PgPool) {
    let (storage, events) = common::create_test_storage(pool, Some(1));
    let mut listener = events.subscribe();

    let inserted = storage
        .save(AliasInput::new("/node/1", "/about-us"), &mut SaveContext::new())
        .await
        .unwrap()
        .into_record()
        .unwrap();

    let event = listener.recv().await.unwrap();
    assert_eq!(event.name(), "path_insert");
    assert_eq!(event.alias, inserted);

    let updated = storage
        .save(
            AliasInput::new("/node/1", "/about").with_pid(inserted.pid),
            &mut SaveContext::new(),
        )
        .await
        .unwrap()
        .into_record()
        .unwrap();

    let event = listener.recv().await.unwrap();
    assert_eq!(event.name(), "path_update");
    assert_eq!(event.alias, updated);
    assert!(listener.try_recv().is_err());
}

#[sqlx::test(migrations = false)]
async fn test_duplicate_aliases_are_permitted(pool: PgPool) {
    let (storage, _events) = common::create_test_storage(pool.clone(), Some(1));

    for domain_id in [1, 1, 2] {
        let mut ctx = SaveContext::new().with_domain_id(domain_id);
        storage
            .save(AliasInput::new("/node/1", "/about-us"), &mut ctx)
            .await
            .unwrap();
    }

    assert_eq!(common::count_aliases(&pool).await, 3);
}
