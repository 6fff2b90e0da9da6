use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use kindle_publishing::logging::init_logging;
use kindle_publishing::{
    BookGenre, Catalog, InMemoryCatalogStore, InMemoryStatusStore, PipelineConfig,
    PublishScheduler, PublishWorker, PublishingService, PublishingStatusEntry, RequestQueue,
    StatusQueryService, SubmitBook,
};

fn main() {
    if let Err(err) = run() {
        log::error!("{}", err);
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var("RUST_LOG").ok();
    let _logger = init_logging(level.as_deref())?;

    let config = match std::env::args().nth(1) {
        Some(path) => PipelineConfig::load(&path)?,
        None => PipelineConfig::default(),
    };
    log::info!("starting publishing pipeline with {:?}", config);

    let queue = RequestQueue::new();
    let catalog = Catalog::new(Arc::new(InMemoryCatalogStore::new()));
    let status_store = Arc::new(InMemoryStatusStore::new());

    let worker = PublishWorker::new(queue.clone(), catalog.clone(), status_store.clone())
        .with_config(&config.worker);
    let scheduler = PublishScheduler::spawn(worker, config.scheduler.clone());

    let service = PublishingService::new(queue, catalog, StatusQueryService::new(status_store));

    let created = service.submit_book_for_publishing(SubmitBook {
        book_id: None,
        title: "The Left Hand of Darkness".into(),
        author: "Ursula K. Le Guin".into(),
        text: "I'll make my report as if I told a story.\n\n\nThe story is not all mine.".into(),
        genre: Some(BookGenre::ScienceFiction),
    });
    let history = wait_for_terminal(&service, &created, Duration::from_secs(30))?;
    log_history(&created, &history);

    let book_id = history
        .first()
        .and_then(|entry| entry.book_id.clone())
        .ok_or("first publish produced no book id")?;

    let updated = service.submit_book_for_publishing(SubmitBook {
        book_id: Some(book_id.clone()),
        title: "The Left Hand of Darkness".into(),
        author: "Ursula K. Le Guin".into(),
        text: "I'll make my report as if I told a story.\n\nRevised edition.".into(),
        genre: Some(BookGenre::ScienceFiction),
    });
    let history = wait_for_terminal(&service, &updated, Duration::from_secs(30))?;
    log_history(&updated, &history);

    let book = service.get_book(&book_id)?;
    log::info!("active version of {} is {}", book.book_id, book.version);

    let stats = scheduler.stop();
    log::info!(
        "scheduler stopped: {} ticks, {} succeeded, {} failed, {} errors",
        stats.ticks,
        stats.succeeded,
        stats.failed,
        stats.errors
    );
    Ok(())
}

fn wait_for_terminal(
    service: &PublishingService,
    publishing_record_id: &str,
    timeout: Duration,
) -> Result<Vec<PublishingStatusEntry>, Box<dyn std::error::Error>> {
    let deadline = Instant::now() + timeout;
    loop {
        let history = service.get_publishing_status(publishing_record_id)?;
        if history.first().is_some_and(|entry| entry.status.is_terminal()) {
            return Ok(history);
        }
        if Instant::now() >= deadline {
            return Err(format!("{publishing_record_id} still processing after {timeout:?}").into());
        }
        thread::sleep(Duration::from_millis(50));
    }
}

fn log_history(publishing_record_id: &str, history: &[PublishingStatusEntry]) {
    for entry in history {
        log::info!(
            "{} {} {}",
            publishing_record_id,
            entry.status,
            entry.status_message.as_deref().unwrap_or_default()
        );
    }
}
