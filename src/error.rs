use thiserror::Error;

#[derive(Error, Debug)]
pub enum MortgageError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    RocksDBError(#[from] rocksdb::Error),
    #[error("Blocking task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
    #[error("Audit store error: {0}")]
    AuditError(String),
}

pub type Result<T> = std::result::Result<T, MortgageError>;
