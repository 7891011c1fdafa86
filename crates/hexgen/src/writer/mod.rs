//! Parallel, buffered record writer.
//!
//! A [`ParallelWriter`] drives a fixed pool of worker threads. Each worker
//! generates its share of records into a private batch buffer and hands full
//! batches to a [`SharedSink`], whose lock is held only for the raw write.
//!
//! ```text
//! request -> spawn K workers -> generate / encode / append
//!                                  -> batch full? flush under lock
//!                                  -> final partial flush
//!         -> join all -> first error by worker index, or RunReport
//! ```
//!
//! Batches from different workers interleave in the sink in no particular
//! order. Within one worker, records keep their generation order, and every
//! batch ends on a record boundary.

mod cancel;
mod request;
mod sink;
mod worker;

pub use cancel::*;
pub use request::*;
pub use sink::*;

use crate::{Error, RandSource, Result, WorkerRandom};
use std::io::Write;
use std::thread;
use worker::{Worker, WorkerReport};

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub workers: usize,
    pub records: u64,
    pub bytes: u64,
    pub flushes: u64,
}

impl RunReport {
    fn absorb(&mut self, worker: WorkerReport) {
        self.records += worker.records;
        self.bytes += worker.bytes;
        self.flushes += worker.flushes;
    }
}

/// Runs a validated [`GenerationRequest`] against any [`Write`] sink.
#[derive(Debug, Clone)]
pub struct ParallelWriter {
    request: GenerationRequest,
    cancellation: Cancellation,
}

impl ParallelWriter {
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the request fails
    /// [`GenerationRequest::validate`].
    pub fn new(request: GenerationRequest) -> Result<Self> {
        request.validate()?;
        Ok(Self {
            request,
            cancellation: Cancellation::new(),
        })
    }

    /// Uses `cancellation` instead of a private, never-triggered token.
    #[must_use]
    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub const fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn cancellation(&self) -> &Cancellation {
        &self.cancellation
    }

    /// Generates every record into `sink`, giving each worker its own
    /// independently seeded [`WorkerRandom`].
    ///
    /// Blocks until all workers have terminated.
    ///
    /// # Errors
    ///
    /// The first error by worker index, if any worker failed. Workers that
    /// did not fail still run to completion and their output is kept.
    pub fn run<W>(&self, sink: &mut W) -> Result<RunReport>
    where
        W: Write + Send,
    {
        self.run_with(sink, |_| WorkerRandom::new())
    }

    /// Like [`ParallelWriter::run`], but builds each worker's random source
    /// with `make_rand(worker_index)`. The source is created on the worker's
    /// own thread and never leaves it.
    ///
    /// # Errors
    ///
    /// See [`ParallelWriter::run`].
    pub fn run_with<W, R, F>(&self, sink: &mut W, make_rand: F) -> Result<RunReport>
    where
        W: Write + Send,
        R: RandSource<u64>,
        F: Fn(usize) -> R + Sync,
    {
        let workers = self.request.workers();
        let per_worker = self.request.per_worker();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Starting {workers} workers, {per_worker} records each ({} bytes per batch)",
            self.request.buffer_bytes()
        );

        let shared = SharedSink::new(sink);
        let results: Vec<Result<WorkerReport>> = thread::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|id| {
                    let shared = &shared;
                    let make_rand = &make_rand;
                    let request = &self.request;
                    let cancel = &self.cancellation;
                    thread::Builder::new()
                        .name(format!("hexgen-worker-{id}"))
                        .spawn_scoped(s, move || {
                            Worker::new(id, shared, make_rand(id), request).run(per_worker, cancel)
                        })
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(id, handle)| match handle {
                    Ok(handle) => handle
                        .join()
                        .unwrap_or_else(|_| Err(Error::WorkerPanicked { worker: id })),
                    Err(source) => Err(Error::Spawn { worker: id, source }),
                })
                .collect()
        });

        let mut report = RunReport {
            workers,
            ..RunReport::default()
        };
        let mut first_error = None;
        for (_id, result) in results.into_iter().enumerate() {
            match result {
                Ok(worker) => report.absorb(worker),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Worker {_id} failed: {e}");
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "All workers finished: {} records, {} bytes, {} flushes",
            report.records,
            report.bytes,
            report.flushes
        );

        Ok(report)
    }
}

/// Generates every record of `request` into `sink`.
///
/// The single blocking entry point: validates the request, runs the worker
/// pool and reports success or the first error by worker index. The output
/// size on success is always [`GenerationRequest::total_bytes`].
///
/// # Errors
///
/// See [`ParallelWriter::new`] and [`ParallelWriter::run`].
///
/// # Example
///
/// ```
/// let request = hexgen::GenerationRequest::new(1_000, 4).unwrap();
/// hexgen::generate(&request, &mut std::io::sink()).unwrap();
/// ```
pub fn generate<W>(request: &GenerationRequest, sink: &mut W) -> Result<()>
where
    W: Write + Send,
{
    ParallelWriter::new(*request)?.run(sink).map(|_| ())
}
