use crate::{
    Cancellation, Error, GenerationRequest, RandSource, Result, SharedSink, hex::append_hex,
};
use std::io::Write;

/// Largest value a record may hold so that it never needs more than
/// `digits` hex digits. Random values are 63-bit, so widths of 16 digits or
/// more keep the whole value.
pub(crate) const fn record_mask(digits: usize) -> u64 {
    if digits >= 16 {
        u64::MAX >> 1
    } else {
        (1_u64 << (4 * digits)) - 1
    }
}

/// What a worker produced before it finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct WorkerReport {
    pub records: u64,
    pub bytes: u64,
    pub flushes: u64,
}

/// One unit of the fixed pool.
///
/// Owns its random source and batch buffer outright. The only thing it
/// shares is the sink, and only for the length of a write.
pub(crate) struct Worker<'s, W, R> {
    id: usize,
    sink: &'s SharedSink<W>,
    rng: R,
    buf: Vec<u8>,
    digits: usize,
    line_width: usize,
    batch_bytes: usize,
    mask: u64,
    report: WorkerReport,
}

impl<'s, W, R> Worker<'s, W, R>
where
    W: Write,
    R: RandSource<u64>,
{
    pub(crate) fn new(
        id: usize,
        sink: &'s SharedSink<W>,
        rng: R,
        request: &GenerationRequest,
    ) -> Self {
        Self {
            id,
            sink,
            rng,
            buf: Vec::with_capacity(request.buffer_bytes()),
            digits: request.digits(),
            line_width: request.line_width(),
            batch_bytes: request.buffer_bytes(),
            mask: record_mask(request.digits()),
            report: WorkerReport::default(),
        }
    }

    /// Generates `records` lines, flushing whenever the batch cannot take
    /// another full line, then flushes the final partial batch.
    ///
    /// Stops at the first failed flush; nothing more is generated after it.
    pub(crate) fn run(mut self, records: u64, cancel: &Cancellation) -> Result<WorkerReport> {
        #[cfg(feature = "tracing")]
        tracing::trace!("Worker {} started ({records} records)", self.id);

        for _ in 0..records {
            let value = self.rng.rand() & self.mask;
            append_hex(value, self.digits, &mut self.buf);
            self.buf.push(b'\n');
            self.report.records += 1;

            if self.buf.len() + self.line_width > self.batch_bytes {
                self.flush(cancel)?;
            }
        }

        if !self.buf.is_empty() {
            self.flush(cancel)?;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            "Worker {} stopped after {} flushes",
            self.id,
            self.report.flushes
        );

        Ok(self.report)
    }

    fn flush(&mut self, cancel: &Cancellation) -> Result<()> {
        if cancel.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Worker {} observed cancellation", self.id);
            return Err(Error::Cancelled);
        }

        let written = self.buf.len() as u64;
        let result = self.sink.write_batch(self.id, &self.buf);
        // Keep the allocation for the next batch.
        self.buf.clear();

        if let Err(_e) = &result {
            #[cfg(feature = "tracing")]
            tracing::debug!("Worker {} failed to flush batch: {_e}", self.id);
        }
        result?;

        self.report.bytes += written;
        self.report.flushes += 1;
        Ok(())
    }
}
