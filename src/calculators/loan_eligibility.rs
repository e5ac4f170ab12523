//! Loan eligibility calculator (reverse EMI)

use serde::{Deserialize, Serialize};

use super::annuity;
use crate::error::CalcError;
use crate::rounding::round2;
use crate::validate::{require_positive, require_positive_up_to, require_range};

/// Maximum share of monthly income a borrower may commit to an EMI
const DEBT_TO_INCOME_CAP: f64 = 0.80;

/// Inputs for a loan eligibility check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanEligibilityRequest {
    /// Gross monthly income, must be > 0
    pub monthly_income: f64,

    /// The EMI the applicant wants to commit to, must be > 0, strictly
    /// below monthly income and at most 80% of it
    pub emi_capacity: f64,

    /// Annual interest rate in percent, 1-30
    pub annual_rate: f64,

    /// Loan term in years, up to 30 (may be fractional)
    pub tenure_years: f64,
}

/// Loan eligibility output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanEligibilityResult {
    pub monthly_income: f64,
    pub emi_capacity: f64,
    pub annual_rate: f64,
    pub tenure_years: f64,

    /// Largest principal the EMI capacity fully amortizes
    pub eligible_loan_amount: f64,

    /// emi_capacity * number of installments
    pub total_payable: f64,

    /// total_payable - eligible_loan_amount
    pub total_interest: f64,
}

fn validate(req: &LoanEligibilityRequest) -> Result<(), CalcError> {
    require_positive(req.monthly_income, "Monthly income must be greater than 0")?;
    require_positive(req.emi_capacity, "EMI capacity must be greater than 0")?;
    require_range(
        req.annual_rate,
        1.0,
        30.0,
        "Interest rate must be between 1% and 30%",
    )?;
    require_positive_up_to(
        req.tenure_years,
        30.0,
        "Tenure must be greater than 0 and at most 30 years",
    )?;

    // Debt-to-income policy: a violation is a validation failure, not a
    // computation failure
    if req.emi_capacity >= req.monthly_income {
        return Err(CalcError::out_of_range(
            "EMI capacity must be less than monthly income",
        ));
    }
    if req.emi_capacity > req.monthly_income * DEBT_TO_INCOME_CAP {
        return Err(CalcError::out_of_range(
            "EMI capacity must not exceed 80% of monthly income",
        ));
    }
    Ok(())
}

/// Invert the EMI formula: given a fixed monthly payment capacity, solve for
/// the principal that capacity fully amortizes over the tenure.
pub fn calculate_loan_eligibility(
    req: &LoanEligibilityRequest,
) -> Result<LoanEligibilityResult, CalcError> {
    validate(req)?;

    let r = annuity::monthly_rate(req.annual_rate);
    let months = (req.tenure_years * 12.0).round() as u32;

    let principal = annuity::principal_from_payment(req.emi_capacity, r, months);
    let total_payable = req.emi_capacity * months as f64;

    Ok(LoanEligibilityResult {
        monthly_income: req.monthly_income,
        emi_capacity: req.emi_capacity,
        annual_rate: req.annual_rate,
        tenure_years: req.tenure_years,
        eligible_loan_amount: round2(principal),
        total_payable: round2(total_payable),
        total_interest: round2(total_payable - principal),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{calculate_emi, EmiRequest};
    use approx::assert_relative_eq;

    fn request(income: f64, emi: f64, rate: f64, years: f64) -> LoanEligibilityRequest {
        LoanEligibilityRequest {
            monthly_income: income,
            emi_capacity: emi,
            annual_rate: rate,
            tenure_years: years,
        }
    }

    #[test]
    fn test_round_trip_recovers_principal() {
        // EMI on a known principal, fed back through eligibility, recovers
        // the original principal
        let emi = calculate_emi(&EmiRequest {
            loan_amount: 500000.0,
            annual_rate: 9.0,
            tenure_months: 240,
            include_schedule: false,
        })
        .unwrap()
        .monthly_emi;

        let result = calculate_loan_eligibility(&request(50000.0, emi, 9.0, 20.0)).unwrap();
        assert_relative_eq!(result.eligible_loan_amount, 500000.0, max_relative = 1e-5);
    }

    #[test]
    fn test_dti_cap_enforced() {
        // 80% of 50000 is 40000
        assert!(calculate_loan_eligibility(&request(50000.0, 40000.0, 10.0, 10.0)).is_ok());

        let err = calculate_loan_eligibility(&request(50000.0, 40000.01, 10.0, 10.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "EMI capacity must not exceed 80% of monthly income"
        );
    }

    #[test]
    fn test_capacity_below_income() {
        let err = calculate_loan_eligibility(&request(50000.0, 50000.0, 10.0, 10.0)).unwrap_err();
        assert_eq!(err.to_string(), "EMI capacity must be less than monthly income");
    }

    #[test]
    fn test_totals_consistent() {
        let result = calculate_loan_eligibility(&request(60000.0, 20000.0, 12.0, 15.0)).unwrap();
        assert_eq!(result.total_payable, 20000.0 * 180.0);
        assert!(result.eligible_loan_amount < result.total_payable);
        assert_relative_eq!(
            result.total_interest,
            result.total_payable - result.eligible_loan_amount,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_rate_and_tenure_bounds() {
        assert!(calculate_loan_eligibility(&request(50000.0, 20000.0, 0.5, 10.0)).is_err());
        assert!(calculate_loan_eligibility(&request(50000.0, 20000.0, 31.0, 10.0)).is_err());
        assert!(calculate_loan_eligibility(&request(50000.0, 20000.0, 10.0, 30.5)).is_err());
    }
}
