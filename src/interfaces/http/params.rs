use crate::domain::loan::CalculationRequest;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

pub const LOAN_QUERY_KEY: &str = "loan";
pub const INTEREST_QUERY_KEY: &str = "interest";
pub const NUMBER_OF_PAYMENTS_QUERY_KEY: &str = "nPayments";

/// A query parameter that is missing or cannot be parsed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Loan not valid")]
    Loan,
    #[error("Annual Interest not valid")]
    Interest,
    #[error("Number of payments not valid")]
    NumberOfPayments,
}

impl ParameterError {
    /// Name of the offending query parameter.
    pub fn field(&self) -> &'static str {
        match self {
            ParameterError::Loan => LOAN_QUERY_KEY,
            ParameterError::Interest => INTEREST_QUERY_KEY,
            ParameterError::NumberOfPayments => NUMBER_OF_PAYMENTS_QUERY_KEY,
        }
    }
}

/// Raw query string of a mortgage request.
#[derive(Debug, Default, Clone)]
pub struct MortgageParams {
    pub loan: Option<String>,
    pub interest: Option<String>,
    pub n_payments: Option<String>,
}

/// Collects decoded query pairs. Unknown keys are ignored; a repeated key
/// keeps every value joined by `,`, which no parser accepts.
impl FromIterator<(String, String)> for MortgageParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                LOAN_QUERY_KEY => &mut params.loan,
                INTEREST_QUERY_KEY => &mut params.interest,
                NUMBER_OF_PAYMENTS_QUERY_KEY => &mut params.n_payments,
                _ => continue,
            };
            match slot {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                empty => *empty = Some(value),
            }
        }
        params
    }
}

impl MortgageParams {
    /// Parses all three parameters, reporting the first invalid one in the
    /// order loan, interest, number of payments.
    pub fn into_request(self) -> Result<CalculationRequest, ParameterError> {
        let loan = parse_loan(self.loan.as_deref())?;
        let interest = parse_interest(self.interest.as_deref())?;
        let payments = parse_number_of_payments(self.n_payments.as_deref())?;
        Ok(CalculationRequest::new(loan, interest, payments))
    }
}

pub fn parse_loan(raw: Option<&str>) -> Result<Decimal, ParameterError> {
    raw.and_then(parse_decimal).ok_or(ParameterError::Loan)
}

pub fn parse_interest(raw: Option<&str>) -> Result<Decimal, ParameterError> {
    raw.and_then(parse_decimal).ok_or(ParameterError::Interest)
}

pub fn parse_number_of_payments(raw: Option<&str>) -> Result<u32, ParameterError> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .ok_or(ParameterError::NumberOfPayments)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
