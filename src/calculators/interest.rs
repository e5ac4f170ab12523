//! Simple/compound interest calculator with year-wise breakdown

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::rounding::round2;
use crate::schedule::YearEntry;
use crate::validate::{require_positive, require_positive_up_to, require_range};

/// How interest accrues on the principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    /// Flat interest on the original principal: P * R * T / 100
    Simple,
    /// Annual compounding with fractional-year exponentiation:
    /// P * (1 + R/100)^T
    Compound,
}

impl InterestType {
    /// Parse a user-supplied string, rejecting anything but the two
    /// recognized lowercase names
    pub fn parse(value: &str) -> Result<Self, CalcError> {
        match value {
            "simple" => Ok(Self::Simple),
            "compound" => Ok(Self::Compound),
            _ => Err(CalcError::InvalidEnum {
                field: "interest_type",
                expected: "simple, compound",
            }),
        }
    }
}

impl FromStr for InterestType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for InterestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Compound => write!(f, "compound"),
        }
    }
}

/// Inputs for an interest calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestRequest {
    /// Principal, must be > 0
    pub principal: f64,

    /// Annual interest rate in percent, 0-100
    pub annual_rate: f64,

    /// Time in years, up to 100 (may be fractional)
    pub time_years: f64,

    pub interest_type: InterestType,
}

/// Interest calculation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestResult {
    pub principal: f64,
    pub annual_rate: f64,
    pub time_years: f64,
    pub interest_type: InterestType,

    /// Interest accrued over the full term
    pub interest_amount: f64,

    /// principal + interest_amount
    pub total_amount: f64,

    /// Year-by-year breakdown, contiguous from year 1; a fractional term
    /// appends one prorated partial entry after the last whole year
    pub breakdown: Vec<YearEntry>,
}

fn validate(req: &InterestRequest) -> Result<(), CalcError> {
    require_positive(req.principal, "Principal must be greater than 0")?;
    require_range(
        req.annual_rate,
        0.0,
        100.0,
        "Interest rate must be between 0% and 100%",
    )?;
    require_positive_up_to(
        req.time_years,
        100.0,
        "Time must be greater than 0 and at most 100 years",
    )?;
    Ok(())
}

/// Calculate simple or compound interest with a year-wise breakdown.
pub fn calculate_interest(req: &InterestRequest) -> Result<InterestResult, CalcError> {
    validate(req)?;

    let p = req.principal;
    let rate = req.annual_rate / 100.0;
    let t = req.time_years;

    let total = match req.interest_type {
        InterestType::Simple => p + p * rate * t,
        InterestType::Compound => p * (1.0 + rate).powf(t),
    };

    Ok(InterestResult {
        principal: p,
        annual_rate: req.annual_rate,
        time_years: t,
        interest_type: req.interest_type,
        interest_amount: round2(total - p),
        total_amount: round2(total),
        breakdown: build_breakdown(p, rate, t, req.interest_type),
    })
}

/// Year-wise breakdown over years 1..ceil(T).
///
/// Years up to floor(T) are full years; when T is non-integer the loop runs
/// one extra entry prorated to the fractional remainder: the simple case
/// scales the flat yearly interest by T - floor(T), the compound case
/// raises the running balance to that fractional power. This termination
/// behavior is contractual, including the extra partial entry.
fn build_breakdown(p: f64, rate: f64, t: f64, interest_type: InterestType) -> Vec<YearEntry> {
    let whole_years = t.floor() as u32;
    let fraction = t - t.floor();
    let entries = t.ceil() as u32;

    let yearly_simple = p * rate;
    let mut balance = p;
    let mut breakdown = Vec::with_capacity(entries as usize);

    for year in 1..=entries {
        let opening = balance;
        let interest = if year <= whole_years {
            match interest_type {
                InterestType::Simple => yearly_simple,
                InterestType::Compound => opening * rate,
            }
        } else {
            // Partial final year
            match interest_type {
                InterestType::Simple => yearly_simple * fraction,
                InterestType::Compound => opening * ((1.0 + rate).powf(fraction) - 1.0),
            }
        };
        balance = opening + interest;

        breakdown.push(YearEntry {
            year,
            opening_balance: round2(opening),
            interest: round2(interest),
            closing_balance: round2(balance),
        });
    }

    breakdown
}
