//! SIP calculator (systematic investment plan, annuity-due)

use serde::{Deserialize, Serialize};

use super::annuity;
use crate::error::CalcError;
use crate::rounding::round2;
use crate::schedule::GrowthEntry;
use crate::validate::{require_at_least, require_positive_up_to, require_range};

/// Inputs for a SIP projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipRequest {
    /// Monthly installment, minimum 500
    pub monthly_investment: f64,

    /// Expected annual rate of return in percent, 1-20
    pub expected_roi: f64,

    /// Investment period in years, up to 50 (may be fractional)
    pub investment_period: f64,
}

/// SIP projection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipResult {
    pub monthly_investment: f64,
    pub expected_roi: f64,
    pub investment_period: f64,

    /// monthly_investment * number of installments
    pub total_investment: f64,

    /// Future value of the installment series (annuity-due)
    pub total_value: f64,

    /// total_value - total_investment
    pub estimated_returns: f64,

    /// Year-by-year invested/value pairs, one entry per whole year
    pub projection: Vec<GrowthEntry>,
}

fn validate(req: &SipRequest) -> Result<(), CalcError> {
    require_at_least(
        req.monthly_investment,
        500.0,
        "Monthly investment must be at least 500",
    )?;
    require_range(
        req.expected_roi,
        1.0,
        20.0,
        "Expected rate of return must be between 1% and 20%",
    )?;
    require_positive_up_to(
        req.investment_period,
        50.0,
        "Investment period must be greater than 0 and at most 50 years",
    )?;
    Ok(())
}

/// Project a SIP: installments are deposited at the start of each month, so
/// the future value uses the annuity-due form.
pub fn calculate_sip(req: &SipRequest) -> Result<SipResult, CalcError> {
    validate(req)?;

    let r = annuity::monthly_rate(req.expected_roi);
    let months = (req.investment_period * 12.0).round() as u32;

    let total_investment = req.monthly_investment * months as f64;
    let total_value = annuity::fv_due(req.monthly_investment, r, months);

    Ok(SipResult {
        monthly_investment: req.monthly_investment,
        expected_roi: req.expected_roi,
        investment_period: req.investment_period,
        total_investment: round2(total_investment),
        total_value: round2(total_value),
        estimated_returns: round2(total_value - total_investment),
        projection: growth_projection(req.monthly_investment, r, req.investment_period),
    })
}

/// Recompute the future value at each whole-year mark. Both columns are
/// monotonically non-decreasing because every year adds installments and
/// growth on top of the prior year's value.
fn growth_projection(payment: f64, r: f64, years: f64) -> Vec<GrowthEntry> {
    let whole_years = years.floor() as u32;
    (1..=whole_years)
        .map(|year| {
            let months = year * 12;
            GrowthEntry {
                year,
                invested: round2(payment * months as f64),
                value: round2(annuity::fv_due(payment, r, months)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn request(monthly: f64, roi: f64, years: f64) -> SipRequest {
        SipRequest {
            monthly_investment: monthly,
            expected_roi: roi,
            investment_period: years,
        }
    }

    #[test]
    fn test_reference_sip() {
        // 5000/month for 10 years at 12%
        let result = calculate_sip(&request(5000.0, 12.0, 10.0)).unwrap();
        assert_eq!(result.total_investment, 600000.0);
        assert_abs_diff_eq!(result.total_value, 1161695.38, epsilon = 0.5);
        assert_abs_diff_eq!(
            result.estimated_returns,
            result.total_value - result.total_investment,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_projection_monotonic() {
        let result = calculate_sip(&request(5000.0, 12.0, 10.0)).unwrap();
        assert_eq!(result.projection.len(), 10);
        assert_eq!(result.projection[0].year, 1);

        for pair in result.projection.windows(2) {
            assert!(pair[1].invested >= pair[0].invested);
            assert!(pair[1].value >= pair[0].value);
        }

        // Final projection entry matches the headline totals
        let last = result.projection.last().unwrap();
        assert_eq!(last.invested, result.total_investment);
        assert_abs_diff_eq!(last.value, result.total_value, epsilon = 0.01);
    }

    #[test]
    fn test_minimum_installment_enforced() {
        let err = calculate_sip(&request(499.99, 12.0, 10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Monthly investment must be at least 500");
    }

    #[test]
    fn test_roi_bounds() {
        assert!(calculate_sip(&request(500.0, 0.5, 10.0)).is_err());
        assert!(calculate_sip(&request(500.0, 20.5, 10.0)).is_err());
        assert!(calculate_sip(&request(500.0, 1.0, 10.0)).is_ok());
        assert!(calculate_sip(&request(500.0, 20.0, 10.0)).is_ok());
    }

    #[test]
    fn test_period_bounds() {
        assert!(calculate_sip(&request(500.0, 12.0, 0.0)).is_err());
        assert!(calculate_sip(&request(500.0, 12.0, 50.5)).is_err());
        assert!(calculate_sip(&request(500.0, 12.0, 50.0)).is_ok());
    }

    #[test]
    fn test_fractional_period_projects_whole_years_only() {
        let result = calculate_sip(&request(1000.0, 10.0, 2.5)).unwrap();
        // 30 installments in the totals, 2 whole-year projection entries
        assert_eq!(result.total_investment, 30000.0);
        assert_eq!(result.projection.len(), 2);
    }
}
