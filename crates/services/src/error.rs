use thiserror::Error;

/// Errors emitted by the input queue.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputQueueError {
    #[error("input queue closed")]
    Closed,
}
