use crate::domain::ports::AuditSink;
use crate::domain::record::ExecutionRecord;
use crate::error::Result;
use crate::interfaces::csv::record_reader::RecordReader;
use crate::interfaces::csv::record_writer::RecordWriter;
use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task;

/// An append-only audit log backed by a CSV file.
///
/// The header row is written when the file is created. Appends from clones
/// of the same sink are serialized through a shared lock.
#[derive(Clone)]
pub struct CsvAuditSink {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl CsvAuditSink {
    /// Uses the file at `path`, creating it on first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn append_record(path: &Path, record: &ExecutionRecord) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let is_new = file.metadata()?.len() == 0;

    let mut writer = if is_new {
        RecordWriter::new(file)
    } else {
        RecordWriter::appending(file)
    };
    writer.write_record(record)?;
    writer.flush()
}

fn read_records(path: &Path) -> Result<Vec<ExecutionRecord>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    RecordReader::new(file).records().collect()
}

// File I/O runs on the blocking pool; the guard is held until it finishes.
#[async_trait]
impl AuditSink for CsvAuditSink {
    async fn append(&self, record: ExecutionRecord) -> Result<()> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        task::spawn_blocking(move || append_record(&path, &record)).await?
    }

    async fn records(&self) -> Result<Vec<ExecutionRecord>> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        task::spawn_blocking(move || read_records(&path)).await?
    }
}
