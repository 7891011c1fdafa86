use crate::{Error, Result};

/// Default line width: 16 hex digits plus a newline.
pub const DEFAULT_LINE_WIDTH: usize = 17;

/// Default per-worker batch size (1 MiB).
pub const DEFAULT_BUFFER_BYTES: usize = 1024 * 1024;

/// An immutable description of one generation run.
///
/// The total record count is split evenly across workers. Any remainder is
/// dropped rather than distributed, so [`GenerationRequest::total_records`]
/// is always an exact multiple of [`GenerationRequest::workers`].
///
/// # Example
///
/// ```
/// use hexgen::GenerationRequest;
///
/// let request = GenerationRequest::new(10, 3).unwrap();
/// assert_eq!(request.per_worker(), 3);
/// assert_eq!(request.total_records(), 9);
/// assert_eq!(request.total_bytes(), 9 * 17);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    workers: usize,
    per_worker: u64,
    line_width: usize,
    buffer_bytes: usize,
}

impl GenerationRequest {
    /// Creates a request for `records` lines spread over `workers` workers,
    /// using [`DEFAULT_LINE_WIDTH`] and [`DEFAULT_BUFFER_BYTES`].
    ///
    /// # Errors
    ///
    /// - [`Error::NoRecords`] if `records` is zero.
    /// - [`Error::InvalidRequest`] if `workers` is zero or exceeds `records`.
    pub fn new(records: u64, workers: usize) -> Result<Self> {
        if records == 0 {
            return Err(Error::NoRecords);
        }
        if workers == 0 {
            return Err(Error::invalid("worker count must be greater than 0"));
        }
        if workers as u64 > records {
            return Err(Error::invalid(format!(
                "worker count ({workers}) exceeds record count ({records})"
            )));
        }

        Ok(Self {
            workers,
            per_worker: records / workers as u64,
            line_width: DEFAULT_LINE_WIDTH,
            buffer_bytes: DEFAULT_BUFFER_BYTES,
        })
    }

    /// Sets the line width in bytes, newline included.
    #[must_use]
    pub const fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Sets the per-worker batch size in bytes.
    #[must_use]
    pub const fn with_buffer_bytes(mut self, buffer_bytes: usize) -> Self {
        self.buffer_bytes = buffer_bytes;
        self
    }

    pub const fn workers(&self) -> usize {
        self.workers
    }

    pub const fn per_worker(&self) -> u64 {
        self.per_worker
    }

    pub const fn line_width(&self) -> usize {
        self.line_width
    }

    pub const fn buffer_bytes(&self) -> usize {
        self.buffer_bytes
    }

    /// Number of hex digits per record (the line width minus the newline).
    pub const fn digits(&self) -> usize {
        self.line_width.saturating_sub(1)
    }

    /// Records actually produced: `per_worker * workers`.
    pub const fn total_records(&self) -> u64 {
        self.per_worker * self.workers as u64
    }

    /// Exact size of the output in bytes. Saturates for requests that
    /// [`GenerationRequest::validate`] rejects.
    pub const fn total_bytes(&self) -> u64 {
        self.total_records().saturating_mul(self.line_width as u64)
    }

    /// Checks the settings that the builder methods cannot reject up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if a line cannot hold at least one
    /// digit and its newline, if a batch cannot hold a single line, or if the
    /// total output size does not fit in a `u64`.
    pub fn validate(&self) -> Result<()> {
        if self.line_width < 2 {
            return Err(Error::invalid(format!(
                "line width ({}) must be at least 2",
                self.line_width
            )));
        }
        if self.buffer_bytes < self.line_width {
            return Err(Error::invalid(format!(
                "buffer size ({} bytes) is smaller than one line ({} bytes)",
                self.buffer_bytes, self.line_width
            )));
        }
        if self
            .total_records()
            .checked_mul(self.line_width as u64)
            .is_none()
        {
            return Err(Error::invalid("total output size overflows u64"));
        }
        Ok(())
    }
}
