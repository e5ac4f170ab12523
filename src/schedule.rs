//! Time-series output records shared by the calculators
//!
//! Every entry carries values already rounded to 2 decimals; chaining
//! invariants (closing balance of year N equals opening balance of year N+1)
//! therefore hold within rounding tolerance only.

use serde::{Deserialize, Serialize};

/// One month of an EMI amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month index, contiguous from 1
    pub month: u32,

    /// The fixed monthly payment
    pub payment: f64,

    /// Portion of the payment that repays principal
    pub principal_component: f64,

    /// Portion of the payment that covers interest on the remaining balance
    pub interest_component: f64,

    /// Remaining balance after this payment, clamped to >= 0
    pub balance: f64,
}

/// One year of an interest breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearEntry {
    /// Year index, contiguous from 1 to ceil(tenure)
    pub year: u32,

    /// Balance at the start of the year
    pub opening_balance: f64,

    /// Interest accrued during the year (prorated for a partial final year)
    pub interest: f64,

    /// Balance at the end of the year
    pub closing_balance: f64,
}

/// One year of an investment growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthEntry {
    /// Year index, contiguous from 1
    pub year: u32,

    /// Cumulative amount invested through the end of this year
    pub invested: f64,

    /// Projected value at the end of this year
    pub value: f64,
}
