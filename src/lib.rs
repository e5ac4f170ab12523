//! Financial calculation engine
//!
//! This library provides:
//! - EMI calculation with optional amortization schedules
//! - Annuity-based projections (SIP, retirement corpus, loan eligibility)
//! - Fixed deposit maturity with quarterly compounding
//! - Simple/compound interest with year-wise breakdowns
//! - Eager per-calculator input validation with a typed error taxonomy
//!
//! Every calculator is a stateless pure function: Validate -> Compute ->
//! Round -> Return. Callers (CLI, batch runner, Lambda handler) dispatch
//! through [`request::evaluate`].

pub mod calculators;
pub mod error;
pub mod request;
pub mod rounding;
pub mod schedule;
pub mod validate;

// Re-export commonly used types
pub use calculators::{
    calculate_emi, calculate_fixed_deposit, calculate_interest, calculate_loan_eligibility,
    calculate_retirement_corpus, calculate_sip, InterestType,
};
pub use error::CalcError;
pub use request::{evaluate, CalculationRequest, CalculationResult};
pub use schedule::{AmortizationRow, GrowthEntry, YearEntry};
