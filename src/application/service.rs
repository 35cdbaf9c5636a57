use crate::domain::calculation::CalculationResult;
use crate::domain::loan::CalculationRequest;
use crate::domain::ports::{AuditSinkBox, CalculatorRef};
use crate::domain::record::ExecutionRecord;
use crate::error::Result;

/// Entry point for mortgage calculations.
///
/// `MortgageService` runs the calculator and appends one audit record per
/// calculation. Both collaborators are required at construction time.
pub struct MortgageService {
    calculator: CalculatorRef,
    audit_sink: AuditSinkBox,
}

impl MortgageService {
    /// Creates a new `MortgageService`.
    ///
    /// # Arguments
    ///
    /// * `calculator` - The payment calculator.
    /// * `audit_sink` - Where execution records are appended.
    pub fn new(calculator: CalculatorRef, audit_sink: AuditSinkBox) -> Self {
        Self {
            calculator,
            audit_sink,
        }
    }

    /// Calculates the monthly payment and records the invocation.
    ///
    /// The audit write happens after the calculation and is best-effort: a
    /// failing sink is logged and never changes the returned result.
    pub async fn calculate(&self, request: CalculationRequest) -> CalculationResult {
        let result = self.calculator.calculate(&request);

        match &result {
            CalculationResult::Succeeded { value } => tracing::info!(
                loan = %request.loan,
                interest = %request.annual_interest_rate,
                payments = request.number_of_payments,
                monthly_rate = %value,
                "mortgage calculated"
            ),
            CalculationResult::Failed(error) => tracing::warn!(
                loan = %request.loan,
                interest = %request.annual_interest_rate,
                payments = request.number_of_payments,
                code = %error.code,
                "mortgage calculation rejected: {}",
                error.message
            ),
        }

        let record = ExecutionRecord::new(&request, &result);
        if let Err(e) = self.audit_sink.append(record).await {
            tracing::warn!("Failed to append execution record: {}", e);
        }

        result
    }

    /// Returns every execution record held by the audit sink.
    pub async fn history(&self) -> Result<Vec<ExecutionRecord>> {
        self.audit_sink.records().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::calculator::AmortizationCalculator;
    use crate::domain::calculation::ErrorCode;
    use crate::domain::ports::AuditSink;
    use crate::error::MortgageError;
    use crate::infrastructure::in_memory::InMemoryAuditSink;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    struct BrokenSink;

    #[async_trait]
    impl AuditSink for BrokenSink {
        async fn append(&self, _record: ExecutionRecord) -> Result<()> {
            Err(MortgageError::AuditError("table unavailable".to_string()))
        }

        async fn records(&self) -> Result<Vec<ExecutionRecord>> {
            Ok(Vec::new())
        }
    }

    fn service_with(sink: AuditSinkBox) -> MortgageService {
        MortgageService::new(Arc::new(AmortizationCalculator::new()), sink)
    }

    #[tokio::test]
    async fn test_success_is_audited() {
        let sink = InMemoryAuditSink::new();
        let service = service_with(Box::new(sink.clone()));

        let result = service
            .calculate(CalculationRequest::new(dec!(100000), dec!(6.0), 360))
            .await;
        assert_eq!(result.value(), Some(dec!(599.55)));

        let records = sink.records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].succeeded);
        assert_eq!(records[0].monthly_rate, Some(dec!(599.55)));
        assert_eq!(records[0].error_code, None);
    }

    #[tokio::test]
    async fn test_domain_failure_is_audited() {
        let sink = InMemoryAuditSink::new();
        let service = service_with(Box::new(sink.clone()));

        let result = service
            .calculate(CalculationRequest::new(dec!(0), dec!(5.0), 12))
            .await;
        assert_eq!(result.error_code(), Some(ErrorCode::InvalidLoanAmount));

        let records = service.history().await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].succeeded);
        assert_eq!(records[0].monthly_rate, None);
        assert_eq!(records[0].error_code, Some(ErrorCode::InvalidLoanAmount));
    }

    #[tokio::test]
    async fn test_broken_sink_does_not_change_result() {
        let service = service_with(Box::new(BrokenSink));

        let result = service
            .calculate(CalculationRequest::new(dec!(50000), dec!(0), 100))
            .await;
        assert_eq!(result.value(), Some(dec!(500.00)));
    }

    #[tokio::test]
    async fn test_records_follow_call_order() {
        let sink = InMemoryAuditSink::new();
        let service = service_with(Box::new(sink.clone()));

        for payments in [12, 0, 24] {
            service
                .calculate(CalculationRequest::new(dec!(1200), dec!(0), payments))
                .await;
        }

        let counts: Vec<u32> = sink
            .records()
            .await
            .unwrap()
            .iter()
            .map(|r| r.number_of_payments)
            .collect();
        assert_eq!(counts, vec![12, 0, 24]);
    }
}
