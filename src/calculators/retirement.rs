//! Retirement corpus calculator (ordinary annuity)

use serde::{Deserialize, Serialize};

use super::annuity;
use crate::error::CalcError;
use crate::rounding::round2;
use crate::schedule::GrowthEntry;
use crate::validate::{require_positive, require_positive_up_to, require_range};

/// Inputs for a retirement corpus projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementRequest {
    /// Monthly saving, must be > 0
    pub monthly_saving: f64,

    /// Expected annual return in percent, 1-20
    pub annual_return: f64,

    /// Years until retirement, up to 50 (may be fractional)
    pub years_to_retirement: f64,
}

/// Retirement corpus output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementResult {
    pub monthly_saving: f64,
    pub annual_return: f64,
    pub years_to_retirement: f64,

    /// monthly_saving * number of contributions
    pub total_invested: f64,

    /// Projected corpus at retirement (ordinary annuity)
    pub corpus: f64,

    /// corpus - total_invested
    pub wealth_gained: f64,

    /// Year-by-year invested/value pairs, one entry per whole year
    pub projection: Vec<GrowthEntry>,
}

fn validate(req: &RetirementRequest) -> Result<(), CalcError> {
    require_positive(req.monthly_saving, "Monthly saving must be greater than 0")?;
    require_range(
        req.annual_return,
        1.0,
        20.0,
        "Expected annual return must be between 1% and 20%",
    )?;
    require_positive_up_to(
        req.years_to_retirement,
        50.0,
        "Years to retirement must be greater than 0 and at most 50",
    )?;
    Ok(())
}

/// Project a retirement corpus: savings land at the end of each month, so
/// the future value uses the ordinary annuity form.
pub fn calculate_retirement_corpus(req: &RetirementRequest) -> Result<RetirementResult, CalcError> {
    validate(req)?;

    let r = annuity::monthly_rate(req.annual_return);
    let months = (req.years_to_retirement * 12.0).round() as u32;

    let total_invested = req.monthly_saving * months as f64;
    let corpus = annuity::fv_ordinary(req.monthly_saving, r, months);

    let whole_years = req.years_to_retirement.floor() as u32;
    let projection = (1..=whole_years)
        .map(|year| {
            let m = year * 12;
            GrowthEntry {
                year,
                invested: round2(req.monthly_saving * m as f64),
                value: round2(annuity::fv_ordinary(req.monthly_saving, r, m)),
            }
        })
        .collect();

    Ok(RetirementResult {
        monthly_saving: req.monthly_saving,
        annual_return: req.annual_return,
        years_to_retirement: req.years_to_retirement,
        total_invested: round2(total_invested),
        corpus: round2(corpus),
        wealth_gained: round2(corpus - total_invested),
        projection,
    })
}
