//! End-to-end publishing scenarios, ticked by hand.

use kindle_publishing::{
    CatalogStore, ProcessOneResult, PublishingStatus, StatusQueryService, StatusStore,
};
use std::sync::Arc;

use crate::support::{assert_dense, assert_single_active, new_book, update, Pipeline};

// ============================================================================
// New book: one tick creates version 1
// ============================================================================

#[test]
fn new_book_is_published_after_one_tick() {
    let pipeline = Pipeline::new();
    let worker = pipeline.worker();
    let id = pipeline.submit(new_book("A"));

    worker.process_one().unwrap();

    let records = pipeline.status_store.query_by_record_id(&id).unwrap();
    assert_eq!(
        records.iter().map(|r| r.status).collect::<Vec<_>>(),
        vec![PublishingStatus::InProgress, PublishingStatus::Successful]
    );
    let book_id = records[1].book_id.clone().unwrap();

    let versions = pipeline.versions(&book_id);
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].version, 1);
    assert!(!versions[0].inactive);
    assert_eq!(versions[0].title, "A");
    assert_eq!(versions[0].author, "X");
}

// ============================================================================
// Two updates queued before the first tick
// ============================================================================

#[test]
fn back_to_back_updates_never_share_a_version() {
    let pipeline = Pipeline::new();
    let worker = pipeline.worker();

    pipeline.submit(new_book("A"));
    let book_id = match worker.process_one().unwrap() {
        ProcessOneResult::Succeeded { entry, .. } => entry.book_id,
        other => panic!("expected success, got {other:?}"),
    };

    let first = pipeline.submit(update(&book_id, "A2"));
    let second = pipeline.submit(update(&book_id, "A3"));

    worker.process_one().unwrap();
    let after_first_tick = pipeline.versions(&book_id);
    assert_dense(&after_first_tick);
    assert_single_active(&after_first_tick);

    worker.process_one().unwrap();
    let versions = pipeline.versions(&book_id);
    assert_eq!(versions.len(), 3);
    assert_dense(&versions);
    assert_single_active(&versions);
    assert_eq!(versions[2].title, "A3");

    assert_eq!(
        pipeline.statuses(&first),
        vec![PublishingStatus::InProgress, PublishingStatus::Successful]
    );
    assert_eq!(
        pipeline.statuses(&second),
        vec![PublishingStatus::InProgress, PublishingStatus::Successful]
    );
}

// ============================================================================
// Update of a book that does not exist
// ============================================================================

#[test]
fn update_of_unknown_book_fails() {
    let pipeline = Pipeline::new();
    let worker = pipeline.worker();
    let id = pipeline.submit(update("book.does-not-exist", "A"));

    let result = worker.process_one().unwrap();
    assert!(matches!(result, ProcessOneResult::Failed { .. }));

    let records = pipeline.status_store.query_by_record_id(&id).unwrap();
    assert_eq!(
        records.iter().map(|r| r.status).collect::<Vec<_>>(),
        vec![PublishingStatus::InProgress, PublishingStatus::Failed]
    );
    assert_eq!(records[1].book_id.as_deref(), Some("book.does-not-exist"));
    assert!(pipeline.catalog_store.is_empty().unwrap());
    assert!(pipeline
        .catalog_store
        .latest_version("book.does-not-exist")
        .unwrap()
        .is_none());
}

// ============================================================================
// Status queries observe mid-flight state
// ============================================================================

#[test]
fn status_history_reads_most_recent_first() {
    let pipeline = Pipeline::new();
    let worker = pipeline.worker();
    let queries = StatusQueryService::new(Arc::new(pipeline.status_store.clone()));
    let id = pipeline.submit(new_book("A"));

    // Queued but not yet picked up.
    assert!(queries.get_history(&id).unwrap().is_empty());

    worker.process_one().unwrap();
    let history = queries.get_history(&id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].status, PublishingStatus::Successful);
    assert!(history[0].book_id.is_some());
    assert_eq!(history[1].status, PublishingStatus::InProgress);
    assert_eq!(history[1].book_id, None);
}

// ============================================================================
// Removal bypasses the queue
// ============================================================================

#[test]
fn removed_book_can_be_republished() {
    let pipeline = Pipeline::new();
    let worker = pipeline.worker();

    pipeline.submit(new_book("A"));
    let book_id = match worker.process_one().unwrap() {
        ProcessOneResult::Succeeded { entry, .. } => entry.book_id,
        other => panic!("expected success, got {other:?}"),
    };

    pipeline.catalog.remove_book(&book_id).unwrap();
    assert!(pipeline.catalog.get_book(&book_id).is_err());
    assert!(pipeline.versions(&book_id).iter().all(|e| e.inactive));

    pipeline.submit(update(&book_id, "A2"));
    worker.process_one().unwrap();

    let book = pipeline.catalog.get_book(&book_id).unwrap();
    assert_eq!(book.version, 2);
    assert_single_active(&pipeline.versions(&book_id));
}
