use crate::domain::record::ExecutionRecord;
use crate::error::Result;
use std::io::Write;

/// Column names, in `ExecutionRecord` field order.
pub const HEADER: [&str; 8] = [
    "id",
    "timestamp",
    "loan",
    "annual_interest_rate",
    "number_of_payments",
    "monthly_rate",
    "succeeded",
    "error_code",
];

/// Writes execution records as CSV.
pub struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
    header_pending: bool,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a writer that emits the header row, even when no records follow.
    pub fn new(sink: W) -> Self {
        Self::with_header(sink, true)
    }

    /// Creates a writer for a destination that already holds a header row.
    pub fn appending(sink: W) -> Self {
        Self::with_header(sink, false)
    }

    fn with_header(sink: W, header_pending: bool) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self {
            writer,
            header_pending,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if self.header_pending {
            self.writer.write_record(HEADER)?;
            self.header_pending = false;
        }
        Ok(())
    }

    pub fn write_record(&mut self, record: &ExecutionRecord) -> Result<()> {
        self.write_header()?;
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn write_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = ExecutionRecord>,
    {
        self.write_header()?;
        for record in records {
            self.writer.serialize(&record)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
