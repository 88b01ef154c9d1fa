pub mod batch;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod fsutil;
pub mod logger;
pub mod record;
pub mod sampler;

use crate::batch::BatchReport;
use crate::config::GeneratorConfig;
use crate::errors::GenError;

/// Generate one dataset file per configured sample size into the configured
/// output directory.
///
/// # Errors
/// Returns an error if the configuration is invalid; per-size write failures
/// are recorded in the returned report.
pub fn generate_all(config: &GeneratorConfig) -> Result<BatchReport, GenError> {
    batch::run(config)
}
