use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Output directory does not exist: {0}")]
    OutputDirMissing(String),

    #[error("Output directory is not writable: {path}: {reason}")]
    OutputDirUnwritable { path: String, reason: String },

    #[error("No countries configured")]
    NoCountries,

    #[error("Country has an empty club list: {0}")]
    EmptyClubList(String),

    #[error("Position weights sum to {0}, expected 1.0")]
    BadWeightSum(f64),

    #[error("Negative weight for position: {0}")]
    NegativeWeight(&'static str),

    #[error("Invalid weight: {0}")]
    InvalidWeight(f64),

    #[error("Zero total weight mass")]
    ZeroWeightMass,

    #[error("Invalid {field} range: min {min} > max {max}")]
    InvalidRange { field: &'static str, min: i32, max: i32 },
}
