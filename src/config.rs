use crate::domain::ports::AuditSinkBox;
use crate::error::Result;
use crate::infrastructure::csv_file::CsvAuditSink;
use crate::infrastructure::in_memory::InMemoryAuditSink;
use crate::logging::LogFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const DEFAULT_ADDR: &str = "0.0.0.0:7071";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Append execution records to this CSV file.
    #[arg(long, global = true, conflicts_with = "audit_db")]
    pub audit_csv: Option<PathBuf>,

    /// Path to persistent audit database (optional). If provided, uses RocksDB.
    #[arg(long, global = true)]
    pub audit_db: Option<PathBuf>,

    /// Log output format.
    #[arg(long, global = true, env = "MORTGAGE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP endpoint.
    Serve {
        #[arg(long, env = "MORTGAGE_ADDR", default_value = DEFAULT_ADDR)]
        addr: String,
    },
    /// Calculate one monthly payment and print it.
    Calc {
        /// Loan amount.
        #[arg(long, allow_hyphen_values = true)]
        loan: String,
        /// Annual interest rate as a percentage.
        #[arg(long, allow_hyphen_values = true)]
        interest: String,
        /// Number of monthly payments.
        #[arg(long, allow_hyphen_values = true)]
        payments: String,
    },
    /// Write every stored execution record to stdout as CSV.
    Export,
}

impl Cli {
    /// Builds the audit sink selected on the command line.
    ///
    /// Falls back to in-memory storage when RocksDB is requested but the
    /// `storage-rocksdb` feature is not compiled in.
    pub fn audit_sink(&self) -> Result<AuditSinkBox> {
        if let Some(path) = &self.audit_csv {
            return Ok(Box::new(CsvAuditSink::new(path)));
        }

        match &self.audit_db {
            Some(db_path) => open_database(db_path),
            None => Ok(Box::new(InMemoryAuditSink::new())),
        }
    }
}

#[cfg(feature = "storage-rocksdb")]
fn open_database(db_path: &Path) -> Result<AuditSinkBox> {
    let sink = crate::infrastructure::rocksdb::RocksDBAuditSink::open(db_path)?;
    Ok(Box::new(sink))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_database(db_path: &Path) -> Result<AuditSinkBox> {
    eprintln!(
        "WARNING: Persistent storage requested via --audit-db ({}), but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage.",
        db_path.display()
    );
    Ok(Box::new(InMemoryAuditSink::new()))
}
