//! Monetary and rate rounding
//!
//! All intermediate math runs at full f64 precision; rounding to 2 decimal
//! places happens once, at the final step, using round-half-away-from-zero
//! (which is what `f64::round` does for the halfway case).

/// Round to 2 decimal places, half away from zero.
///
/// Used for every monetary output and every sub-1 rate/percentage output.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_basic() {
        assert_eq!(round2(10613.6351), 10613.64);
        assert_eq!(round2(1000.0), 1000.0);
        assert_eq!(round2(0.123), 0.12);
    }

    #[test]
    fn test_half_away_from_zero() {
        // 1.125 and 1.375 are exactly representable in binary, so the
        // halfway case actually reaches round()
        assert_eq!(round2(1.125), 1.13);
        assert_eq!(round2(1.375), 1.38);
        assert_eq!(round2(-1.125), -1.13);
    }
}
