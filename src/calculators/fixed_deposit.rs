//! Fixed deposit calculator with quarterly compounding

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::rounding::round2;
use crate::validate::{require_at_least, require_positive_up_to, require_range};

/// Compounding periods per year; FDs compound quarterly, non-configurable
const COMPOUNDING_PER_YEAR: f64 = 4.0;

/// Inputs for a fixed deposit calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedDepositRequest {
    /// Deposit amount, minimum 1000
    pub principal: f64,

    /// Annual interest rate in percent, 1-15
    pub annual_rate: f64,

    /// Deposit term in years, up to 10 (may be fractional)
    pub tenure_years: f64,

    /// Deposit opening date; when present the result carries the maturity date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// Fixed deposit output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedDepositResult {
    pub principal: f64,
    pub annual_rate: f64,
    pub tenure_years: f64,

    /// P * (1 + R/400)^(4T)
    pub maturity_amount: f64,

    /// maturity_amount - principal
    pub total_interest: f64,

    /// Effective annual rate in percent; always >= the nominal rate because
    /// compounding frequency is above one per year
    pub effective_annual_rate: f64,

    /// start_date + tenure, ISO-8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<NaiveDate>,
}

fn validate(req: &FixedDepositRequest) -> Result<(), CalcError> {
    require_at_least(req.principal, 1000.0, "Deposit amount must be at least 1000")?;
    require_range(
        req.annual_rate,
        1.0,
        15.0,
        "Interest rate must be between 1% and 15%",
    )?;
    require_positive_up_to(
        req.tenure_years,
        10.0,
        "Tenure must be greater than 0 and at most 10 years",
    )?;
    Ok(())
}

/// Calculate fixed deposit maturity with quarterly compounding.
pub fn calculate_fixed_deposit(req: &FixedDepositRequest) -> Result<FixedDepositResult, CalcError> {
    validate(req)?;

    let quarterly_rate = req.annual_rate / 100.0 / COMPOUNDING_PER_YEAR;
    let maturity = req.principal
        * (1.0 + quarterly_rate).powf(COMPOUNDING_PER_YEAR * req.tenure_years);
    let ear_pct = ((1.0 + quarterly_rate).powf(COMPOUNDING_PER_YEAR) - 1.0) * 100.0;

    let tenure_months = (req.tenure_years * 12.0).round() as u32;
    let maturity_date = match req.start_date {
        Some(start) => Some(start.checked_add_months(Months::new(tenure_months)).ok_or_else(
            || CalcError::Computation(format!("maturity date overflow from {}", start)),
        )?),
        None => None,
    };

    Ok(FixedDepositResult {
        principal: req.principal,
        annual_rate: req.annual_rate,
        tenure_years: req.tenure_years,
        maturity_amount: round2(maturity),
        total_interest: round2(maturity - req.principal),
        effective_annual_rate: round2(ear_pct),
        maturity_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn request(principal: f64, rate: f64, years: f64) -> FixedDepositRequest {
        FixedDepositRequest {
            principal,
            annual_rate: rate,
            tenure_years: years,
            start_date: None,
        }
    }

    #[test]
    fn test_reference_deposit() {
        // 10000 at 6% for 1 year, quarterly compounding
        let result = calculate_fixed_deposit(&request(10000.0, 6.0, 1.0)).unwrap();
        assert_abs_diff_eq!(result.maturity_amount, 10613.64, epsilon = 0.01);
        assert_abs_diff_eq!(result.total_interest, 613.64, epsilon = 0.01);
        assert_abs_diff_eq!(result.effective_annual_rate, 6.14, epsilon = 0.01);
    }

    #[test]
    fn test_ear_exceeds_nominal() {
        for rate in [1.0, 4.5, 8.0, 15.0] {
            let result = calculate_fixed_deposit(&request(10000.0, rate, 5.0)).unwrap();
            assert!(
                result.effective_annual_rate >= rate,
                "EAR {} below nominal {}",
                result.effective_annual_rate,
                rate
            );
        }
    }

    #[test]
    fn test_fractional_tenure() {
        // 18 months = 6 quarters
        let result = calculate_fixed_deposit(&request(10000.0, 8.0, 1.5)).unwrap();
        let expected = 10000.0 * 1.02f64.powi(6);
        assert_abs_diff_eq!(result.maturity_amount, (expected * 100.0).round() / 100.0, epsilon = 0.01);
    }

    #[test]
    fn test_maturity_date() {
        let mut req = request(50000.0, 7.0, 2.0);
        req.start_date = NaiveDate::from_ymd_opt(2024, 1, 15);
        let result = calculate_fixed_deposit(&req).unwrap();
        assert_eq!(result.maturity_date, NaiveDate::from_ymd_opt(2026, 1, 15));
    }

    #[test]
    fn test_validation_bounds() {
        let err = calculate_fixed_deposit(&request(999.99, 6.0, 1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Deposit amount must be at least 1000");

        let err = calculate_fixed_deposit(&request(10000.0, 15.5, 1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Interest rate must be between 1% and 15%");

        assert!(calculate_fixed_deposit(&request(10000.0, 6.0, 10.5)).is_err());
        assert!(calculate_fixed_deposit(&request(10000.0, 6.0, 0.0)).is_err());
    }
}
