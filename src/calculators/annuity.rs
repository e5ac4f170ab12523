//! Shared annuity and amortization math
//!
//! Every time-value-of-money calculator in this crate reduces to one of
//! these closed forms at monthly rate r over N months. Each formula has a
//! zero-rate branch whose value equals the r -> 0 limit of the general form,
//! so a 0% input degenerates to the straight multiplicative case.

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_pct: f64) -> f64 {
    annual_pct / 1200.0
}

/// Future value of an ordinary annuity: N end-of-month payments of `payment`
/// at monthly rate `r`.
///
/// FV = M * ((1+r)^N - 1) / r, with FV = M * N when r = 0.
pub fn fv_ordinary(payment: f64, r: f64, months: u32) -> f64 {
    let n = months as f64;
    if r == 0.0 {
        payment * n
    } else {
        payment * ((1.0 + r).powf(n) - 1.0) / r
    }
}

/// Future value of an annuity-due: payments at the start of each month, so
/// every installment earns one extra month of growth.
///
/// FV = M * ((1+r)^N - 1) / r * (1+r), with FV = M * N when r = 0.
pub fn fv_due(payment: f64, r: f64, months: u32) -> f64 {
    if r == 0.0 {
        payment * months as f64
    } else {
        fv_ordinary(payment, r, months) * (1.0 + r)
    }
}

/// Equated monthly installment fully amortizing `principal` over N months.
///
/// EMI = P * r * (1+r)^N / ((1+r)^N - 1), with EMI = P / N when r = 0.
pub fn emi_payment(principal: f64, r: f64, months: u32) -> f64 {
    let n = months as f64;
    if r == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    }
}

/// Reverse EMI: the principal a fixed monthly payment capacity can amortize.
///
/// P = M * ((1+r)^N - 1) / (r * (1+r)^N), with P = M * N when r = 0.
pub fn principal_from_payment(payment: f64, r: f64, months: u32) -> f64 {
    let n = months as f64;
    if r == 0.0 {
        payment * n
    } else {
        let growth = (1.0 + r).powf(n);
        payment * (growth - 1.0) / (r * growth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_degeneracy() {
        // At r = 0 every formula collapses to payment * months
        assert_eq!(fv_ordinary(500.0, 0.0, 24), 12000.0);
        assert_eq!(fv_due(500.0, 0.0, 24), 12000.0);
        assert_eq!(principal_from_payment(500.0, 0.0, 24), 12000.0);
        assert_eq!(emi_payment(12000.0, 0.0, 24), 500.0);
    }

    #[test]
    fn test_zero_rate_matches_limit() {
        // The r -> 0 limit of the general form approaches the zero branch
        let tiny = 1e-9;
        assert_relative_eq!(
            fv_ordinary(500.0, tiny, 120),
            fv_ordinary(500.0, 0.0, 120),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            principal_from_payment(500.0, tiny, 120),
            principal_from_payment(500.0, 0.0, 120),
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_due_exceeds_ordinary() {
        let r = monthly_rate(12.0);
        let ordinary = fv_ordinary(5000.0, r, 120);
        let due = fv_due(5000.0, r, 120);
        assert_relative_eq!(due, ordinary * (1.0 + r), max_relative = 1e-12);
        assert!(due > ordinary);
    }

    #[test]
    fn test_emi_reverse_round_trip() {
        // The eligibility formula is the exact inverse of the EMI formula
        let principal = 250000.0;
        let r = monthly_rate(9.5);
        let emi = emi_payment(principal, r, 180);
        let recovered = principal_from_payment(emi, r, 180);
        assert_relative_eq!(recovered, principal, max_relative = 1e-10);
    }
}
