use crate::domain::calculation::{CalculationError, CalculationResult};
use crate::domain::loan::{CalculationRequest, LoanTerms};
use crate::domain::ports::MortgageCalculator;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

/// Payments are stored and returned in currency minor units.
pub const PAYMENT_DECIMAL_PLACES: u32 = 2;

/// Banker's rounding keeps stored audit values reproducible.
///
/// A payment that rounds to zero is rejected, so loans must be large enough
/// to yield at least one minor unit per period.
pub const PAYMENT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Fixed-rate amortization calculator.
///
/// Uses the closed-form annuity formula
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r` the monthly rate.
/// All arithmetic is `Decimal`, so results are exact up to 28 significant
/// digits before the final rounding.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmortizationCalculator;

impl AmortizationCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Computes the rounded monthly payment for validated terms.
    pub fn monthly_payment(terms: &LoanTerms) -> Result<Decimal, CalculationError> {
        let principal = terms.principal.value();
        let payments = terms.payments.get();
        let rate = terms.rate.monthly();

        let payment = match payment_factor(rate, payments) {
            Some(factor) => principal
                .checked_mul(factor)
                .ok_or_else(CalculationError::calculation_overflow)?,
            // Interest-free, or a rate too small to register at decimal precision.
            None => principal / Decimal::from(payments),
        };

        let mut rounded = payment.round_dp_with_strategy(PAYMENT_DECIMAL_PLACES, PAYMENT_ROUNDING);
        // Always carry exactly two places so `500` is reported as `500.00`.
        // `rescale` leaves the scale short when the mantissa has no room left.
        rounded.rescale(PAYMENT_DECIMAL_PLACES);
        if rounded.scale() != PAYMENT_DECIMAL_PLACES {
            return Err(CalculationError::calculation_overflow());
        }
        if rounded.is_zero() {
            return Err(CalculationError::payment_below_minimum());
        }
        Ok(rounded)
    }
}

impl MortgageCalculator for AmortizationCalculator {
    fn calculate(&self, request: &CalculationRequest) -> CalculationResult {
        LoanTerms::try_from(request)
            .and_then(|terms| Self::monthly_payment(&terms))
            .into()
    }
}

/// Payment per unit of principal: `r * g / (g - 1)` where `g = (1 + r)^n`.
///
/// Returns `None` when the loan behaves as interest-free. When `g` is beyond
/// the decimal range, `g / (g - 1)` is 1 at full precision and the factor is `r`.
fn payment_factor(rate: Decimal, payments: u32) -> Option<Decimal> {
    if rate.is_zero() {
        return None;
    }

    let base = Decimal::ONE.checked_add(rate)?;
    let Some(growth) = base.checked_powu(u64::from(payments)) else {
        return Some(rate);
    };
    if growth <= Decimal::ONE {
        return None;
    }

    growth
        .checked_div(growth - Decimal::ONE)
        .and_then(|ratio| rate.checked_mul(ratio))
        .or(Some(rate))
}
