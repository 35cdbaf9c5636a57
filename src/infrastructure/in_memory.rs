use crate::domain::ports::AuditSink;
use crate::domain::record::ExecutionRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory audit log.
///
/// Uses `Arc<RwLock<Vec<ExecutionRecord>>>` so clones share the same log.
/// Records are lost when the process exits.
#[derive(Default, Clone)]
pub struct InMemoryAuditSink {
    records: Arc<RwLock<Vec<ExecutionRecord>>>,
}

impl InMemoryAuditSink {
    /// Creates a new, empty in-memory audit sink.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn append(&self, record: ExecutionRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(())
    }

    async fn records(&self) -> Result<Vec<ExecutionRecord>> {
        let records = self.records.read().await;
        Ok(records.clone())
    }
}
