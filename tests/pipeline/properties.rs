//! Pipeline-wide invariants.

use std::thread;
use std::time::Duration;

use kindle_publishing::{
    ProcessOneResult, PublishScheduler, PublishingStatus, SchedulerConfig, StatusStore,
};

use crate::support::{assert_dense, assert_single_active, new_book, update, Pipeline};

#[test]
fn dequeue_order_matches_submit_order() {
    let pipeline = Pipeline::new();
    let worker = pipeline.worker();
    let ids: Vec<String> = (0..5)
        .map(|i| pipeline.submit(new_book(&format!("book {i}"))))
        .collect();

    let mut processed = Vec::new();
    loop {
        match worker.process_one().unwrap() {
            ProcessOneResult::Idle => break,
            ProcessOneResult::Succeeded {
                publishing_record_id,
                ..
            } => processed.push(publishing_record_id),
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(processed, ids);
}

#[test]
fn k_publishes_leave_version_k_active() {
    let pipeline = Pipeline::new();
    let worker = pipeline.worker();

    pipeline.submit(new_book("v1"));
    let book_id = match worker.process_one().unwrap() {
        ProcessOneResult::Succeeded { entry, .. } => entry.book_id,
        other => panic!("expected success, got {other:?}"),
    };

    const K: u64 = 6;
    for v in 2..=K {
        pipeline.submit(update(&book_id, &format!("v{v}")));
        worker.process_one().unwrap();
    }

    let versions = pipeline.versions(&book_id);
    assert_eq!(versions.len() as u64, K);
    assert_dense(&versions);
    assert_single_active(&versions);
    let active = versions.iter().find(|e| e.is_active()).unwrap();
    assert_eq!(active.version, K);
    assert_eq!(active.title, format!("v{K}"));
}

#[test]
fn every_request_gets_one_in_progress_then_one_terminal() {
    let pipeline = Pipeline::new();
    let worker = pipeline.worker();

    let mut ids = vec![pipeline.submit(new_book("A"))];
    ids.push(pipeline.submit(update("book.missing", "B")));
    ids.push(pipeline.submit(new_book("C")));

    while worker.process_one().unwrap().did_work() {}

    for id in &ids {
        let statuses = pipeline.statuses(id);
        assert_eq!(statuses.len(), 2, "history of {id}: {statuses:?}");
        assert_eq!(statuses[0], PublishingStatus::InProgress);
        assert!(statuses[1].is_terminal());
    }
}

#[test]
fn idle_tick_writes_nothing() {
    let pipeline = Pipeline::new();
    let worker = pipeline.worker();

    for _ in 0..3 {
        assert_eq!(worker.process_one().unwrap(), ProcessOneResult::Idle);
    }
    assert!(pipeline.status_store.is_empty().unwrap());
    assert!(pipeline.catalog_store.is_empty().unwrap());
}

#[test]
fn scheduler_serializes_concurrent_updates_to_one_book() {
    let pipeline = Pipeline::new();

    pipeline.submit(new_book("v1"));
    let book_id = match pipeline.worker().process_one().unwrap() {
        ProcessOneResult::Succeeded { entry, .. } => entry.book_id,
        other => panic!("expected success, got {other:?}"),
    };

    let scheduler = PublishScheduler::spawn(
        pipeline.worker(),
        SchedulerConfig::default()
            .with_poll_interval(Duration::from_millis(1))
            .with_drain_when_busy(true),
    );

    // Several producers racing updates to the same book.
    let producers: Vec<_> = (0..4)
        .map(|p| {
            let queue = pipeline.queue.clone();
            let book_id = book_id.clone();
            thread::spawn(move || {
                (0..10)
                    .map(|i| {
                        let request = update(&book_id, &format!("p{p}-{i}"));
                        let id = request.publishing_record_id().to_string();
                        queue.enqueue(request);
                        id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let ids: Vec<String> = producers
        .into_iter()
        .flat_map(|p| p.join().unwrap())
        .collect();

    for id in &ids {
        assert!(pipeline.wait_for_terminal(id), "{id} never finished");
    }
    let stats = scheduler.stop();
    assert_eq!(stats.succeeded, ids.len());
    assert_eq!(stats.errors, 0);

    let versions = pipeline.versions(&book_id);
    assert_eq!(versions.len(), 1 + ids.len());
    assert_dense(&versions);
    assert_single_active(&versions);

    for id in &ids {
        let records = pipeline.status_store.query_by_record_id(id).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].book_id.as_deref(), Some(book_id.as_str()));
    }
}
