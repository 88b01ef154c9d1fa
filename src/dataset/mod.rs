mod options;
mod pipeline;
mod sink;

pub use options::{DatasetOptions, DatasetReport};
pub use pipeline::{generate_file, generate_records, write_dataset};
pub use sink::RosterSink;
