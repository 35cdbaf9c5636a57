use crate::domain::record::ExecutionRecord;
use crate::error::{MortgageError, Result};
use std::io::Read;

/// Reads execution records from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<ExecutionRecord>`.
/// The source must start with the header produced by `RecordWriter`.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new `RecordReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn records(self) -> impl Iterator<Item = Result<ExecutionRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MortgageError::from))
    }
}
