//! The calculators: each one a single-pass pure function over validated
//! inputs (Validate -> Compute -> Round -> Return)

pub mod annuity;
mod emi;
mod fixed_deposit;
mod interest;
mod loan_eligibility;
mod retirement;
mod sip;

pub use emi::{calculate_emi, EmiRequest, EmiResult};
pub use fixed_deposit::{calculate_fixed_deposit, FixedDepositRequest, FixedDepositResult};
pub use interest::{calculate_interest, InterestRequest, InterestResult, InterestType};
pub use loan_eligibility::{
    calculate_loan_eligibility, LoanEligibilityRequest, LoanEligibilityResult,
};
pub use retirement::{calculate_retirement_corpus, RetirementRequest, RetirementResult};
pub use sip::{calculate_sip, SipRequest, SipResult};
