//! EMI calculator with optional amortization schedule

use serde::{Deserialize, Serialize};

use super::annuity;
use crate::error::CalcError;
use crate::rounding::round2;
use crate::schedule::AmortizationRow;
use crate::validate::{require_positive, require_positive_months, require_range};

/// Longest supported loan term, 100 years of months
const MAX_TENURE_MONTHS: u32 = 1200;

/// Inputs for an EMI calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiRequest {
    /// Loan principal, must be > 0
    pub loan_amount: f64,

    /// Annual interest rate in percent, 0-100
    pub annual_rate: f64,

    /// Loan term in months, positive integer
    pub tenure_months: u32,

    /// Whether to include the month-by-month amortization schedule
    #[serde(default)]
    pub include_schedule: bool,
}

/// EMI calculation output, all monetary values rounded to 2 decimals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiResult {
    pub loan_amount: f64,
    pub annual_rate: f64,
    pub tenure_months: u32,

    /// Fixed monthly installment
    pub monthly_emi: f64,

    /// monthly_emi * tenure_months
    pub total_payable: f64,

    /// total_payable - loan_amount
    pub total_interest: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationRow>>,
}

fn validate(req: &EmiRequest) -> Result<(), CalcError> {
    require_positive(req.loan_amount, "Loan amount must be greater than 0")?;
    require_range(
        req.annual_rate,
        0.0,
        100.0,
        "Interest rate must be between 0% and 100%",
    )?;
    require_positive_months(
        req.tenure_months,
        MAX_TENURE_MONTHS,
        "Tenure must be a positive integer number of months, at most 1200",
    )?;
    Ok(())
}

/// Calculate the equated monthly installment for a loan.
///
/// Monthly rate r = annual_rate / 1200. When r = 0 the installment is the
/// straight-line P / N; otherwise the standard amortizing-loan annuity
/// formula applies. Rounding to 2 decimals happens only on the outputs;
/// the schedule runs on the unrounded installment and balance.
pub fn calculate_emi(req: &EmiRequest) -> Result<EmiResult, CalcError> {
    validate(req)?;

    let r = annuity::monthly_rate(req.annual_rate);
    let emi = annuity::emi_payment(req.loan_amount, r, req.tenure_months);

    // Totals derive from the installment the borrower actually pays, i.e.
    // the 2-decimal rounded EMI
    let monthly_emi = round2(emi);
    let total_payable = round2(monthly_emi * req.tenure_months as f64);
    let total_interest = round2(total_payable - req.loan_amount);

    let schedule = if req.include_schedule {
        Some(build_schedule(req.loan_amount, r, emi, req.tenure_months))
    } else {
        None
    };

    Ok(EmiResult {
        loan_amount: req.loan_amount,
        annual_rate: req.annual_rate,
        tenure_months: req.tenure_months,
        monthly_emi,
        total_payable,
        total_interest,
        schedule,
    })
}

/// Build the month-by-month amortization schedule.
///
/// Interest accrues on the unrounded remaining balance; the balance is
/// clamped to >= 0 so the final month cannot drift negative from rounding.
fn build_schedule(principal: f64, r: f64, emi: f64, months: u32) -> Vec<AmortizationRow> {
    let mut balance = principal;
    let mut rows = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let interest = balance * r;
        let principal_component = emi - interest;
        balance = (balance - principal_component).max(0.0);

        rows.push(AmortizationRow {
            month,
            payment: round2(emi),
            principal_component: round2(principal_component),
            interest_component: round2(interest),
            balance: round2(balance),
        });
    }

    rows
}
