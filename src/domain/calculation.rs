use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable identifiers for the reasons a calculation can be rejected.
///
/// The variant names are part of the audit format and must not be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    InvalidPaymentCount,
    InvalidLoanAmount,
    InvalidInterestRate,
    CalculationOverflow,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPaymentCount => "InvalidPaymentCount",
            ErrorCode::InvalidLoanAmount => "InvalidLoanAmount",
            ErrorCode::InvalidInterestRate => "InvalidInterestRate",
            ErrorCode::CalculationOverflow => "CalculationOverflow",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reportable reason why a monthly payment could not be computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CalculationError {
    pub code: ErrorCode,
    pub message: String,
}

impl CalculationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_payment_count() -> Self {
        Self::new(
            ErrorCode::InvalidPaymentCount,
            "Number of payments must be at least 1",
        )
    }

    pub fn invalid_loan_amount() -> Self {
        Self::new(
            ErrorCode::InvalidLoanAmount,
            "Loan amount must be greater than 0",
        )
    }

    pub fn payment_below_minimum() -> Self {
        Self::new(
            ErrorCode::InvalidLoanAmount,
            "Loan amount is too small to yield a payment of at least 0.01",
        )
    }

    pub fn invalid_interest_rate() -> Self {
        Self::new(
            ErrorCode::InvalidInterestRate,
            "Annual interest rate cannot be negative",
        )
    }

    pub fn calculation_overflow() -> Self {
        Self::new(
            ErrorCode::CalculationOverflow,
            "Monthly payment exceeds the supported numeric range",
        )
    }
}

/// Outcome of a single mortgage calculation.
///
/// Either a payment value or an error, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationResult {
    Succeeded { value: Decimal },
    Failed(CalculationError),
}

impl CalculationResult {
    pub fn success(value: Decimal) -> Self {
        Self::Succeeded { value }
    }

    pub fn failure(error: CalculationError) -> Self {
        Self::Failed(error)
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Succeeded { value } => Some(*value),
            Self::Failed(_) => None,
        }
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Failed(error) => Some(error.code),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Failed(error) => Some(&error.message),
        }
    }
}

impl From<Result<Decimal, CalculationError>> for CalculationResult {
    fn from(result: Result<Decimal, CalculationError>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_success_exposes_only_value() {
        let result = CalculationResult::success(dec!(599.55));
        assert!(result.succeeded());
        assert_eq!(result.value(), Some(dec!(599.55)));
        assert_eq!(result.error_code(), None);
        assert_eq!(result.error_message(), None);
    }

    #[test]
    fn test_failure_exposes_only_error() {
        let result = CalculationResult::failure(CalculationError::invalid_payment_count());
        assert!(!result.succeeded());
        assert_eq!(result.value(), None);
        assert_eq!(result.error_code(), Some(ErrorCode::InvalidPaymentCount));
        assert!(result.error_message().is_some());
    }

    #[test]
    fn test_error_code_serializes_as_name() {
        let json = serde_json::to_string(&ErrorCode::InvalidLoanAmount).unwrap();
        assert_eq!(json, "\"InvalidLoanAmount\"");
        assert_eq!(ErrorCode::InvalidLoanAmount.to_string(), "InvalidLoanAmount");
    }
}
