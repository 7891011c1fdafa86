use crate::{Error, Result, mutex::Mutex};
use std::io::Write;

/// The single destination shared by every worker.
///
/// All access goes through one mutex that is held only for the duration of a
/// raw `write_all`. Generation and encoding happen outside the lock, in each
/// worker's private buffer.
#[derive(Debug)]
pub struct SharedSink<W> {
    inner: Mutex<W>,
}

impl<W: Write> SharedSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Writes one complete batch under the lock.
    ///
    /// # Errors
    ///
    /// - [`Error::Write`] if the underlying writer fails.
    /// - [`Error::LockPoisoned`] if another worker panicked while writing
    ///   (std mutex only).
    pub fn write_batch(&self, worker: usize, batch: &[u8]) -> Result<()> {
        #[cfg(feature = "parking-lot")]
        let mut sink = self.inner.lock();
        #[cfg(not(feature = "parking-lot"))]
        let mut sink = self.inner.lock()?;

        sink.write_all(batch)
            .map_err(|source| Error::Write { worker, source })
    }

    /// Consumes the wrapper and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if the lock was poisoned (std mutex
    /// only).
    pub fn into_inner(self) -> Result<W> {
        #[cfg(feature = "parking-lot")]
        return Ok(self.inner.into_inner());
        #[cfg(not(feature = "parking-lot"))]
        return self.inner.into_inner().map_err(|_| Error::LockPoisoned);
    }
}
