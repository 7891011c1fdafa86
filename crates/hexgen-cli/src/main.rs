#![doc = include_str!("../README.md")]

mod cli;

use clap::Parser;
use cli::config::{CliArgs, GeneratorConfig};
use cli::telemetry::init_telemetry;
use cli::units::human_readable_size;
use hexgen::{Cancellation, ParallelWriter, generate_to_file};
use std::time::Instant;

// Using mimalloc for better performance with many worker threads allocating
// batch buffers, especially in musl environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    let start = Instant::now();

    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry(args.log_format)?;

    let config = GeneratorConfig::try_from(args).inspect_err(|e| tracing::error!("{e}"))?;
    let request = config.request;

    let cancellation = Cancellation::new();
    {
        let cancellation = cancellation.clone();
        ctrlc::set_handler(move || {
            tracing::warn!("Interrupted, stopping workers at their next flush");
            cancellation.cancel();
        })?;
    }

    tracing::info!(
        "total count: {}, workers: {}, per worker: {}",
        request.total_records(),
        request.workers(),
        request.per_worker()
    );
    if cfg!(debug_assertions) {
        tracing::debug!("Full config: {config:#?}");
    }

    let writer = ParallelWriter::new(request)?.with_cancellation(cancellation);
    let result = generate_to_file(&writer, &config.file);
    tracing::info!("generation took {:?}", start.elapsed());

    match result {
        Ok(report) => {
            tracing::info!(
                "total gen: {}, filename: {}",
                human_readable_size(report.bytes),
                config.file.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("{e}");
            Err(e.into())
        }
    }
}
