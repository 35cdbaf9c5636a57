use crate::domain::ports::AuditSink;
use crate::domain::record::ExecutionRecord;
use crate::error::{MortgageError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing execution records.
pub const CF_EXECUTIONS: &str = "executions";

/// A persistent audit log using RocksDB.
///
/// Keys are the big-endian timestamp in nanoseconds followed by the record id,
/// so iterating the column family yields records in chronological order.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBAuditSink {
    db: Arc<DB>,
}

impl RocksDBAuditSink {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "executions" column family exists.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_executions = ColumnFamilyDescriptor::new(CF_EXECUTIONS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_executions])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn record_key(record: &ExecutionRecord) -> Vec<u8> {
        // Timestamps before 1677 or after 2262 saturate; ordering stays stable.
        let nanos = record
            .timestamp
            .timestamp_nanos_opt()
            .unwrap_or(i64::MAX)
            .max(0) as u64;

        let mut key = Vec::with_capacity(24);
        key.extend_from_slice(&nanos.to_be_bytes());
        key.extend_from_slice(record.id.as_bytes());
        key
    }
}

#[async_trait]
impl AuditSink for RocksDBAuditSink {
    async fn append(&self, record: ExecutionRecord) -> Result<()> {
        let cf = self.db.cf_handle(CF_EXECUTIONS).ok_or_else(|| {
            MortgageError::AuditError("Executions column family not found".to_string())
        })?;

        let key = Self::record_key(&record);
        let value = serde_json::to_vec(&record)?;

        self.db.put_cf(&cf, key, value)?;

        Ok(())
    }

    async fn records(&self) -> Result<Vec<ExecutionRecord>> {
        let cf = self.db.cf_handle(CF_EXECUTIONS).ok_or_else(|| {
            MortgageError::AuditError("Executions column family not found".to_string())
        })?;

        let mut records = Vec::new();
        let iter = self.db.iterator_cf(&cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item?;
            let record: ExecutionRecord = serde_json::from_slice(&value)?;
            records.push(record);
        }

        Ok(records)
    }
}
