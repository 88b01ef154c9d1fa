use std::io::{BufWriter, Write};

use crate::errors::GenError;
use crate::record::PlayerRecord;

/// CSV sink for roster rows. The header record is written explicitly rather
/// than derived from the first row, so an empty dataset still yields a valid
/// header-only file.
pub struct RosterSink<W: Write> {
    w: csv::Writer<BufWriter<W>>,
    write_headers: bool,
    wrote_header: bool,
}

impl<W: Write> RosterSink<W> {
    pub fn new(inner: W, delimiter: u8, write_headers: bool) -> Self {
        let w = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(BufWriter::new(inner));
        Self { w, write_headers, wrote_header: false }
    }

    /// # Errors
    /// Returns an error if the header record cannot be written.
    pub fn write_header(&mut self) -> Result<(), GenError> {
        if self.write_headers && !self.wrote_header {
            self.w.write_record(PlayerRecord::FIELDS)?;
            self.wrote_header = true;
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if the row cannot be serialized or written.
    pub fn write_row(&mut self, record: &PlayerRecord) -> Result<(), GenError> {
        self.write_header()?;
        self.w.serialize(record)?;
        Ok(())
    }

    /// # Errors
    /// Returns an error if the underlying writer cannot be flushed.
    pub fn finish(mut self) -> Result<(), GenError> {
        self.write_header()?;
        self.w.flush()?;
        Ok(())
    }
}
