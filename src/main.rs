//! Financial calculator CLI
//!
//! One subcommand per calculator; results print as pretty JSON so the
//! output can be piped straight into other tooling.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fincalc_system::calculators::{
    EmiRequest, FixedDepositRequest, InterestRequest, LoanEligibilityRequest, RetirementRequest,
    SipRequest,
};
use fincalc_system::{evaluate, CalculationRequest, InterestType};

#[derive(Parser)]
#[command(name = "fincalc", version, about = "Financial calculators")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Equated monthly installment for a loan
    Emi {
        #[arg(long)]
        loan_amount: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        tenure_months: u32,
        /// Include the month-by-month amortization schedule
        #[arg(long)]
        schedule: bool,
    },
    /// Systematic investment plan projection
    Sip {
        #[arg(long)]
        monthly_investment: f64,
        /// Expected annual return in percent
        #[arg(long)]
        roi: f64,
        #[arg(long)]
        years: f64,
    },
    /// Retirement corpus projection
    Retirement {
        #[arg(long)]
        monthly_saving: f64,
        /// Expected annual return in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Loan amount a monthly EMI capacity qualifies for
    LoanEligibility {
        #[arg(long)]
        monthly_income: f64,
        #[arg(long)]
        emi_capacity: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Fixed deposit maturity, quarterly compounding
    FixedDeposit {
        #[arg(long)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
        /// Deposit opening date (YYYY-MM-DD), enables maturity date output
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
    /// Simple or compound interest with year-wise breakdown
    Interest {
        #[arg(long)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
        /// "simple" or "compound"
        #[arg(long, value_parser = InterestType::parse)]
        interest_type: InterestType,
    },
}

impl Command {
    fn into_request(self) -> CalculationRequest {
        match self {
            Command::Emi {
                loan_amount,
                rate,
                tenure_months,
                schedule,
            } => CalculationRequest::Emi(EmiRequest {
                loan_amount,
                annual_rate: rate,
                tenure_months,
                include_schedule: schedule,
            }),
            Command::Sip {
                monthly_investment,
                roi,
                years,
            } => CalculationRequest::Sip(SipRequest {
                monthly_investment,
                expected_roi: roi,
                investment_period: years,
            }),
            Command::Retirement {
                monthly_saving,
                rate,
                years,
            } => CalculationRequest::RetirementCorpus(RetirementRequest {
                monthly_saving,
                annual_return: rate,
                years_to_retirement: years,
            }),
            Command::LoanEligibility {
                monthly_income,
                emi_capacity,
                rate,
                years,
            } => CalculationRequest::LoanEligibility(LoanEligibilityRequest {
                monthly_income,
                emi_capacity,
                annual_rate: rate,
                tenure_years: years,
            }),
            Command::FixedDeposit {
                principal,
                rate,
                years,
                start_date,
            } => CalculationRequest::FixedDeposit(FixedDepositRequest {
                principal,
                annual_rate: rate,
                tenure_years: years,
                start_date,
            }),
            Command::Interest {
                principal,
                rate,
                years,
                interest_type,
            } => CalculationRequest::Interest(InterestRequest {
                principal,
                annual_rate: rate,
                time_years: years,
                interest_type,
            }),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let request = cli.command.into_request();

    let result = evaluate(&request)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
