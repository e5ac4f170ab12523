//! Request dispatch: one tagged enum over every calculator
//!
//! The CLI, batch runner, and Lambda handler all funnel through
//! [`evaluate`], which keeps the calculators themselves free of any
//! transport concerns.

use serde::{Deserialize, Serialize};

use crate::calculators::{
    calculate_emi, calculate_fixed_deposit, calculate_interest, calculate_loan_eligibility,
    calculate_retirement_corpus, calculate_sip, EmiRequest, EmiResult, FixedDepositRequest,
    FixedDepositResult, InterestRequest, InterestResult, LoanEligibilityRequest,
    LoanEligibilityResult, RetirementRequest, RetirementResult, SipRequest, SipResult,
};
use crate::error::CalcError;

/// A request for any of the calculators, tagged by `"calculator"` in JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationRequest {
    Emi(EmiRequest),
    Sip(SipRequest),
    RetirementCorpus(RetirementRequest),
    LoanEligibility(LoanEligibilityRequest),
    FixedDeposit(FixedDepositRequest),
    Interest(InterestRequest),
}

/// The matching result for each calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationResult {
    Emi(EmiResult),
    Sip(SipResult),
    RetirementCorpus(RetirementResult),
    LoanEligibility(LoanEligibilityResult),
    FixedDeposit(FixedDepositResult),
    Interest(InterestResult),
}

/// Run the calculator a request names.
///
/// Stateless and side-effect free; concurrent invocations are safe under
/// any execution model because nothing is shared across calls.
pub fn evaluate(request: &CalculationRequest) -> Result<CalculationResult, CalcError> {
    match request {
        CalculationRequest::Emi(req) => calculate_emi(req).map(CalculationResult::Emi),
        CalculationRequest::Sip(req) => calculate_sip(req).map(CalculationResult::Sip),
        CalculationRequest::RetirementCorpus(req) => {
            calculate_retirement_corpus(req).map(CalculationResult::RetirementCorpus)
        }
        CalculationRequest::LoanEligibility(req) => {
            calculate_loan_eligibility(req).map(CalculationResult::LoanEligibility)
        }
        CalculationRequest::FixedDeposit(req) => {
            calculate_fixed_deposit(req).map(CalculationResult::FixedDeposit)
        }
        CalculationRequest::Interest(req) => {
            calculate_interest(req).map(CalculationResult::Interest)
        }
    }
}
