use portable_atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheaply clonable flag used to stop a run early.
///
/// Workers poll it at every flush boundary. Once set, each worker drops its
/// pending batch and finishes with [`crate::Error::Cancelled`].
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Safe to call from any thread, any number of
    /// times.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
