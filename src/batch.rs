use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::dataset::{self, DatasetOptions, DatasetReport};
use crate::errors::GenError;
use crate::sampler::RecordSampler;

/// Outcome of one batch run over the configured sample sizes.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub datasets: Vec<DatasetReport>,
    pub failures: Vec<BatchFailure>,
}

#[derive(Debug, Serialize)]
pub struct BatchFailure {
    pub size: usize,
    pub error: String,
}

impl BatchReport {
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the full batch with default dataset options.
///
/// # Errors
/// Returns an error if the configuration is invalid; per-size write failures
/// are recorded in the report instead.
pub fn run(config: &GeneratorConfig) -> Result<BatchReport, GenError> {
    run_with_options(config, &DatasetOptions::default())
}

/// Generate one fresh, independent dataset per configured sample size,
/// sequentially. Each file is flushed and closed before the next size
/// begins. Sizes are independent: a failing size is logged and recorded,
/// and the batch moves on to the remaining sizes.
///
/// # Errors
/// Returns an error only for invalid configuration, before any file is
/// attempted.
pub fn run_with_options(
    config: &GeneratorConfig,
    opts: &DatasetOptions,
) -> Result<BatchReport, GenError> {
    let sampler = RecordSampler::from_config(config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut report =
        BatchReport { started_at: Utc::now(), datasets: Vec::new(), failures: Vec::new() };
    log::info!(
        "batch: {} sizes into {}",
        config.sample_sizes.len(),
        config.output_directory.display()
    );
    for &n in &config.sample_sizes {
        match dataset::generate_file(config, &sampler, n, opts, &mut rng) {
            Ok(rep) => report.datasets.push(rep),
            Err(e) => {
                log::error!("batch: size {n} failed: {e}");
                report.failures.push(BatchFailure { size: n, error: e.to_string() });
            }
        }
    }
    Ok(report)
}
