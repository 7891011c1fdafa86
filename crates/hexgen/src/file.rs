use crate::{Error, ParallelWriter, Result, RunReport};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Opens `path` as an output sink: write-only, appending, created if missing
/// (mode `0644` on Unix).
///
/// # Errors
///
/// Returns [`Error::SinkOpen`] if the file cannot be opened or created.
pub fn open_sink(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path).map_err(|source| Error::SinkOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs `writer` into the file at `path`.
///
/// The file is opened before any worker starts and is wrapped in a
/// [`BufWriter`] sized to the batch size; it is flushed and closed after all
/// workers have finished.
///
/// # Errors
///
/// - [`Error::SinkOpen`] if the file cannot be opened.
/// - Any error from [`ParallelWriter::run`].
/// - [`Error::Flush`] if the final flush fails.
pub fn generate_to_file(writer: &ParallelWriter, path: impl AsRef<Path>) -> Result<RunReport> {
    let file = open_sink(path)?;
    let mut out = BufWriter::with_capacity(writer.request().buffer_bytes(), file);
    let report = writer.run(&mut out)?;
    out.flush().map_err(|source| Error::Flush { source })?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerationRequest;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "hexgen-{}-{name}.txt",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn writes_exact_output_size() {
        let path = scratch_path("exact");
        let request = GenerationRequest::new(10_000, 4)
            .unwrap()
            .with_buffer_bytes(4096);
        let writer = ParallelWriter::new(request).unwrap();

        let report = generate_to_file(&writer, &path).unwrap();

        let len = std::fs::metadata(&path).unwrap().len();
        assert_eq!(len, 10_000 * 17);
        assert_eq!(report.bytes, len);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn appends_to_existing_file() {
        let path = scratch_path("append");
        let request = GenerationRequest::new(100, 2).unwrap();
        let writer = ParallelWriter::new(request).unwrap();

        generate_to_file(&writer, &path).unwrap();
        generate_to_file(&writer, &path).unwrap();

        let len = std::fs::metadata(&path).unwrap().len();
        assert_eq!(len, 2 * request.total_bytes());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_directory_is_a_sink_open_error() {
        let path = std::env::temp_dir()
            .join(format!("hexgen-missing-{}", std::process::id()))
            .join("out.txt");
        let err = open_sink(&path).unwrap_err();
        assert!(matches!(err, Error::SinkOpen { .. }));
    }
}
