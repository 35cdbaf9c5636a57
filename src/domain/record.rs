use super::calculation::{CalculationResult, ErrorCode};
use super::loan::CalculationRequest;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit entry for one calculator invocation.
///
/// Records are append-only: they are written once and never updated.
/// Decimals are stored as strings so their scale survives a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::str")]
    pub loan: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub annual_interest_rate: Decimal,
    pub number_of_payments: u32,
    /// Computed monthly payment, present only when `succeeded` is true.
    #[serde(with = "rust_decimal::serde::str_option")]
    pub monthly_rate: Option<Decimal>,
    pub succeeded: bool,
    pub error_code: Option<ErrorCode>,
}

impl ExecutionRecord {
    pub fn new(request: &CalculationRequest, result: &CalculationResult) -> Self {
        Self::at(Utc::now(), request, result)
    }

    pub fn at(
        timestamp: DateTime<Utc>,
        request: &CalculationRequest,
        result: &CalculationResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            loan: request.loan,
            annual_interest_rate: request.annual_interest_rate,
            number_of_payments: request.number_of_payments,
            monthly_rate: result.value(),
            succeeded: result.succeeded(),
            error_code: result.error_code(),
        }
    }
}
