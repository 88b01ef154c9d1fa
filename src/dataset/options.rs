use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone)]
pub struct DatasetOptions {
    pub delimiter: u8,
    pub write_headers: bool,
    pub file_stem: String,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self { delimiter: b',', write_headers: true, file_stem: "dataset".to_string() }
    }
}

impl DatasetOptions {
    /// Output file name for sample size `n`, e.g. `dataset_500.csv`.
    #[must_use]
    pub fn file_name(&self, n: usize) -> String {
        format!("{}_{}.csv", self.file_stem, n)
    }
}

/// Accounting for one written dataset file.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub size: usize,
    pub rows_written: u64,
    pub path: PathBuf,
}
