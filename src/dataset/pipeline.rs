use std::path::Path;

use rand::Rng;
use tempfile::NamedTempFile;

use crate::config::GeneratorConfig;
use crate::errors::GenError;
use crate::record::PlayerRecord;
use crate::sampler::RecordSampler;

use super::options::{DatasetOptions, DatasetReport};
use super::sink::RosterSink;

/// Draw exactly `n` independent records. `n = 0` is valid and yields an
/// empty sequence.
pub fn generate_records<R: Rng + ?Sized>(
    sampler: &RecordSampler,
    n: usize,
    rng: &mut R,
) -> Vec<PlayerRecord> {
    (0..n).map(|_| sampler.sample(rng)).collect()
}

/// Write one dataset atomically via a temp file in the destination directory
/// plus persist. A write failure never leaves a truncated file at `path`;
/// the temp file is removed on drop. The destination directory must already
/// exist — it is configuration, not something the writer creates.
///
/// # Errors
/// Returns an error if the directory is missing or the write/persist fails.
pub fn write_dataset(
    records: &[PlayerRecord],
    path: impl AsRef<Path>,
    opts: &DatasetOptions,
) -> Result<DatasetReport, GenError> {
    let dest = path.as_ref();
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(GenError::OutputDirMissing(parent.display().to_string()));
    }
    let mut tmp = NamedTempFile::new_in(parent)?;
    let mut written = 0u64;
    {
        let mut sink = RosterSink::new(&mut tmp, opts.delimiter, opts.write_headers);
        sink.write_header()?;
        for record in records {
            sink.write_row(record)?;
            written += 1;
        }
        sink.finish()?;
    }
    persist_with_retry(tmp, dest)?;
    log::info!("dataset: wrote {} rows to {}", written, dest.display());
    Ok(DatasetReport { size: records.len(), rows_written: written, path: dest.to_path_buf() })
}

/// Generate and persist one size-`n` dataset under the configured directory.
///
/// # Errors
/// Returns an error if the write fails.
pub fn generate_file<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    sampler: &RecordSampler,
    n: usize,
    opts: &DatasetOptions,
    rng: &mut R,
) -> Result<DatasetReport, GenError> {
    let records = generate_records(sampler, n, rng);
    let dest = config.output_directory.join(opts.file_name(n));
    write_dataset(&records, dest, opts)
}

// Persist atomically with Windows-friendly retries.
fn persist_with_retry(mut tmp: NamedTempFile, dest: &Path) -> Result<(), GenError> {
    let mut last_err: Option<std::io::Error> = None;
    for attempt in 0..5 {
        if dest.exists()
            && let Err(e) = std::fs::remove_file(dest)
        {
            last_err = Some(e);
            std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
            continue;
        }
        match tmp.persist(dest) {
            Ok(_f) => return Ok(()),
            Err(pe) => {
                last_err = Some(pe.error);
                tmp = pe.file; // recover temp file and retry
                std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
            }
        }
    }
    Err(GenError::Io(
        last_err.unwrap_or_else(|| std::io::Error::other("failed to persist dataset file")),
    ))
}
