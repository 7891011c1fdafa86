use std::path::PathBuf;

/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that a generation run can produce.
///
/// Configuration problems ([`Error::NoRecords`], [`Error::InvalidRequest`])
/// and [`Error::SinkOpen`] are reported before any worker starts. Everything
/// else originates inside a worker and is surfaced once all workers have
/// joined.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request asked for zero records.
    #[error("no data to produce")]
    NoRecords,

    /// The request is structurally invalid (zero workers, a line too narrow
    /// to hold a digit, a batch smaller than a line, ...).
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// The destination file could not be opened or created.
    #[error("failed to open sink {}: {source}", path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A worker failed to write a batch into the shared sink.
    #[error("worker {worker} failed to write batch: {source}")]
    Write {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    /// Flushing the sink after all workers finished failed.
    #[error("failed to flush sink: {source}")]
    Flush {
        #[source]
        source: std::io::Error,
    },

    /// The sink lock was poisoned by a worker that panicked while writing.
    ///
    /// Not produced when the `parking-lot` feature is enabled, since
    /// `parking_lot` mutexes do not poison.
    #[error("sink lock poisoned")]
    LockPoisoned,

    /// The run was cancelled before every worker finished its share.
    #[error("generation cancelled")]
    Cancelled,

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked.
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }
}

#[cfg(not(feature = "parking-lot"))]
use crate::mutex::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
