//! Console logging for the generator.
//!
//! Verbosity is controlled by `RUST_LOG` and defaults to `info`. Worker-level
//! events from the `hexgen` library (per-flush traces, worker failures) show
//! up at `debug` and `trace`.
//!
//! ```bash
//! RUST_LOG=hexgen=debug hexgen --count 1000000
//! ```

use tracing_subscriber::{
    EnvFilter, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Shape of the log lines written to stdout.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

pub fn init_telemetry(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_target(false)
                    .with_timer(ChronoLocal::rfc_3339())
                    .with_file(true)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_thread_names(true)
                    .with_timer(ChronoLocal::rfc_3339())
                    .json()
                    .flatten_event(true),
            )
            .try_init()?,
    }

    Ok(())
}
