/// Failure of a catalog or status store call.
///
/// Stores own their timeout and retry policy; the pipeline treats any of
/// these as fatal to the current worker invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
