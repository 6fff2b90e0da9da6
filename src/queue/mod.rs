//! Request queue between the submit path and the publish worker.
//!
//! ```text
//! submit ──enqueue──▶ RequestQueue ──dequeue──▶ PublishWorker
//!  (N producers)        (FIFO)                 (one consumer)
//! ```

mod request_queue;

pub use request_queue::RequestQueue;
