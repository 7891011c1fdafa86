use crate::cli::telemetry::LogFormat;
use anyhow::{anyhow, bail};
use clap::Parser;
use hexgen::{DEFAULT_LINE_WIDTH, GenerationRequest};
use std::path::{Path, PathBuf};

const MIB: usize = 1024 * 1024;

/// Runtime configuration for the `hexgen` binary.
///
/// All values are parsed from CLI arguments or environment variables. The
/// defaults produce 16-digit records batched in 1 MiB chunks, one worker per
/// logical CPU.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hexgen",
    version,
    about = "Write fixed-width random hex records to a file as fast as possible"
)]
pub struct CliArgs {
    /// Number of records to generate.
    ///
    /// Truncated down to a multiple of the worker count.
    ///
    /// Environment variable: `RECORD_COUNT`
    #[arg(long, env = "RECORD_COUNT", default_value_t = 0)]
    pub count: u64,

    /// Number of worker threads generating records concurrently.
    ///
    /// `0` uses one worker per logical CPU. Values above `count` are lowered
    /// to `count`.
    ///
    /// Environment variable: `NUM_WORKERS`
    #[arg(long, env = "NUM_WORKERS", default_value_t = 0)]
    pub workers: usize,

    /// Output file. Created if missing, appended to otherwise.
    ///
    /// Environment variable: `OUTPUT_FILE`
    #[arg(long, env = "OUTPUT_FILE", default_value = "input.txt")]
    pub file: PathBuf,

    /// Per-worker batch size in MiB.
    ///
    /// Larger batches mean fewer, longer lock acquisitions at the cost of
    /// `workers * buffer` MiB of memory.
    ///
    /// Environment variable: `BUFFER_MIB`
    #[arg(long, env = "BUFFER_MIB", default_value_t = 1)]
    pub buffer: usize,

    /// Length of each line in bytes: the hex digits plus one newline.
    ///
    /// Environment variable: `LINE_LENGTH`
    #[arg(long, env = "LINE_LENGTH", default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_length: usize,

    /// Index appended to the output file name, e.g. `data.txt` with index 7
    /// becomes `data_0007.txt`. Lets several generator instances share a
    /// template.
    ///
    /// Environment variable: `FILE_INDEX`
    #[arg(long, env = "FILE_INDEX")]
    pub file_index: Option<u32>,

    /// Log output format.
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub request: GenerationRequest,
    pub file: PathBuf,
    pub log_format: LogFormat,
}

impl TryFrom<CliArgs> for GeneratorConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("no data to produce");
        }

        if args.line_length < 2 {
            bail!(
                "LINE_LENGTH ({}) must be at least 2 (one digit and a newline)",
                args.line_length
            );
        }

        if args.buffer == 0 {
            bail!("BUFFER_MIB must be greater than 0");
        }

        let buffer_bytes = args
            .buffer
            .checked_mul(MIB)
            .ok_or_else(|| anyhow!("Overflow in buffer size computation"))?;

        let workers = match args.workers {
            0 => num_cpus::get(),
            n => n,
        };
        let workers = usize::try_from(args.count).map_or(workers, |count| workers.min(count));

        let file = match args.file_index {
            Some(index) => indexed_file_name(&args.file, index),
            None => args.file,
        };

        let request = GenerationRequest::new(args.count, workers)?
            .with_line_width(args.line_length)
            .with_buffer_bytes(buffer_bytes);
        request.validate()?;

        Ok(Self {
            request,
            file,
            log_format: args.log_format,
        })
    }
}

/// Inserts a zero-padded `index` between the file stem and its extension,
/// keeping the parent directory.
pub fn indexed_file_name(path: &Path, index: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{index:04}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{index:04}"),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["hexgen"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let args = args(&["--count", "10"]);
        assert_eq!(args.workers, 0);
        assert_eq!(args.file, PathBuf::from("input.txt"));
        assert_eq!(args.buffer, 1);
        assert_eq!(args.line_length, 17);
        assert_eq!(args.file_index, None);
        assert_eq!(args.log_format, LogFormat::Pretty);
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = GeneratorConfig::try_from(args(&["--count", "0"])).unwrap_err();
        assert_eq!(err.to_string(), "no data to produce");
    }

    #[test]
    fn workers_are_clamped_to_count() {
        let config = GeneratorConfig::try_from(args(&["--count", "3", "--workers", "8"])).unwrap();
        assert_eq!(config.request.workers(), 3);
        assert_eq!(config.request.per_worker(), 1);
    }

    #[test]
    fn zero_workers_uses_available_cpus() {
        let config = GeneratorConfig::try_from(args(&["--count", "1000000"])).unwrap();
        assert_eq!(config.request.workers(), num_cpus::get());
    }

    #[test]
    fn remainder_is_dropped_from_the_request() {
        let config = GeneratorConfig::try_from(args(&["--count", "10", "--workers", "3"])).unwrap();
        assert_eq!(config.request.total_records(), 9);
    }

    #[test]
    fn buffer_is_converted_to_bytes() {
        let config = GeneratorConfig::try_from(args(&["--count", "10", "--buffer", "4"])).unwrap();
        assert_eq!(config.request.buffer_bytes(), 4 * MIB);
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        assert!(GeneratorConfig::try_from(args(&["--count", "10", "--buffer", "0"])).is_err());
        assert!(
            GeneratorConfig::try_from(args(&["--count", "10", "--line-length", "1"])).is_err()
        );
        let huge = usize::MAX.to_string();
        assert!(GeneratorConfig::try_from(args(&["--count", "10", "--buffer", &huge])).is_err());
    }

    #[test]
    fn file_index_renames_the_output() {
        let config = GeneratorConfig::try_from(args(&[
            "--count",
            "10",
            "--file",
            "out/data.txt",
            "--file-index",
            "7",
        ]))
        .unwrap();
        assert_eq!(config.file, PathBuf::from("out/data_0007.txt"));
    }

    #[test]
    fn indexed_file_name_handles_bare_names() {
        assert_eq!(
            indexed_file_name(Path::new("input.txt"), 12),
            PathBuf::from("input_0012.txt")
        );
        assert_eq!(
            indexed_file_name(Path::new("/tmp/records"), 3),
            PathBuf::from("/tmp/records_0003")
        );
        assert_eq!(
            indexed_file_name(Path::new("a/b.tar.gz"), 12345),
            PathBuf::from("a/b.tar_12345.gz")
        );
    }

    #[test]
    fn json_log_format_parses() {
        let args = args(&["--count", "1", "--log-format", "json"]);
        assert_eq!(args.log_format, LogFormat::Json);
    }
}
