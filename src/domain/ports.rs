use super::calculation::CalculationResult;
use super::loan::CalculationRequest;
use super::record::ExecutionRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Computes the monthly payment for a request.
///
/// Implementations must be pure: no I/O, and identical requests produce
/// identical results.
pub trait MortgageCalculator: Send + Sync {
    fn calculate(&self, request: &CalculationRequest) -> CalculationResult;
}

/// Append-only destination for execution records.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn append(&self, record: ExecutionRecord) -> Result<()>;
    /// Returns every stored record in insertion order.
    async fn records(&self) -> Result<Vec<ExecutionRecord>>;
}

pub type CalculatorRef = Arc<dyn MortgageCalculator>;
pub type AuditSinkBox = Box<dyn AuditSink>;
