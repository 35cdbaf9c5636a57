use super::calculation::CalculationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

const PERCENT: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Raw inputs of one calculation, as parsed from the request.
///
/// Values are shape-checked only. Range checks happen when the request is
/// turned into [`LoanTerms`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub loan: Decimal,
    /// Annual percentage, e.g. `6.5` for 6.5%.
    pub annual_interest_rate: Decimal,
    pub number_of_payments: u32,
}

impl CalculationRequest {
    pub fn new(loan: Decimal, annual_interest_rate: Decimal, number_of_payments: u32) -> Self {
        Self {
            loan,
            annual_interest_rate,
            number_of_payments,
        }
    }
}

/// Borrowed amount. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Principal(Decimal);

impl Principal {
    pub fn new(value: Decimal) -> Result<Self, CalculationError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CalculationError::invalid_loan_amount())
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Principal {
    type Error = CalculationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Annual interest rate expressed as a percentage. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AnnualRate(Decimal);

impl AnnualRate {
    pub fn new(percent: Decimal) -> Result<Self, CalculationError> {
        if percent >= Decimal::ZERO {
            Ok(Self(percent))
        } else {
            Err(CalculationError::invalid_interest_rate())
        }
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// Per-period fraction: `percent / 100 / 12`.
    pub fn monthly(&self) -> Decimal {
        self.0 / PERCENT / MONTHS_PER_YEAR
    }
}

/// Number of monthly payments. At least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PaymentCount(NonZeroU32);

impl PaymentCount {
    pub fn new(count: u32) -> Result<Self, CalculationError> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or_else(CalculationError::invalid_payment_count)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

/// A request whose values have all passed domain validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub principal: Principal,
    pub rate: AnnualRate,
    pub payments: PaymentCount,
}

impl TryFrom<&CalculationRequest> for LoanTerms {
    type Error = CalculationError;

    /// Checks the payment count first so a zero count is reported no matter
    /// what the other fields hold.
    fn try_from(request: &CalculationRequest) -> Result<Self, Self::Error> {
        let payments = PaymentCount::new(request.number_of_payments)?;
        let principal = Principal::new(request.loan)?;
        let rate = AnnualRate::new(request.annual_interest_rate)?;
        Ok(Self {
            principal,
            rate,
            payments,
        })
    }
}
