// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Bounded-denominator rational approximation
//!
//! Continued-fraction search for the best rational approximation of a
//! non-negative float, including the semiconvergent refinement step used
//! when the denominator bound cuts the expansion short.

use num_rational::Ratio;

/// Fractional remainders below this are treated as an exact expansion.
const REMAINDER_EPS: f64 = 1e-12;

/// Best rational approximation of `value` with denominator at most
/// `max_denominator`.
///
/// `value` must be finite and non-negative, `max_denominator` at least 1.
pub fn best_rational(value: f64, max_denominator: u64) -> Ratio<u64> {
    debug_assert!(value.is_finite() && value >= 0.0);
    debug_assert!(max_denominator >= 1);

    // Walk the continued-fraction expansion, keeping the last two
    // convergents p0/q0 and p1/q1.
    let (mut p0, mut q0, mut p1, mut q1) = (0u64, 1u64, 1u64, 0u64);
    let mut x = value;

    loop {
        let floor = x.floor();
        if floor > u64::MAX as f64 {
            break;
        }
        let a = floor as u64;

        let q2 = match a.checked_mul(q1).and_then(|v| v.checked_add(q0)) {
            Some(q2) if q2 <= max_denominator => q2,
            _ => break,
        };
        let p2 = match a.checked_mul(p1).and_then(|v| v.checked_add(p0)) {
            Some(p2) => p2,
            None => break,
        };

        p0 = p1;
        q0 = q1;
        p1 = p2;
        q1 = q2;

        let remainder = x - floor;
        if remainder < REMAINDER_EPS {
            return Ratio::new(p1, q1);
        }
        x = 1.0 / remainder;
    }

    if q1 == 0 {
        // The very first term already overflowed; saturate.
        return Ratio::new(u64::MAX, 1);
    }

    // The bound cut the expansion between two convergents: the best
    // approximation is either the last convergent or the largest
    // semiconvergent that still fits under the bound. Pick whichever lands
    // closer, preferring the convergent on a tie.
    let k = (max_denominator - q0) / q1;
    let convergent = Ratio::new(p1, q1);

    let semiconvergent = k
        .checked_mul(p1)
        .and_then(|kp| kp.checked_add(p0))
        .map(|numer| Ratio::new(numer, q0 + k * q1));

    match semiconvergent {
        Some(semi) => {
            let conv_err = (to_f64(convergent) - value).abs();
            let semi_err = (to_f64(semi) - value).abs();
            if conv_err <= semi_err {
                convergent
            } else {
                semi
            }
        }
        None => convergent,
    }
}

fn to_f64(ratio: Ratio<u64>) -> f64 {
    *ratio.numer() as f64 / *ratio.denom() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fractions() {
        assert_eq!(best_rational(0.5, 100), Ratio::new(1, 2));
        assert_eq!(best_rational(0.25, 100), Ratio::new(1, 4));
        assert_eq!(best_rational(1.0, 100), Ratio::new(1, 1));
        assert_eq!(best_rational(0.0, 100), Ratio::new(0, 1));
        assert_eq!(best_rational(2.0 / 3.0, 100), Ratio::new(2, 3));
        assert_eq!(best_rational(17.0 / 29.0, 100), Ratio::new(17, 29));
    }

    #[test]
    fn test_bound_forces_simplification() {
        // 0.50006 is 25003/50000; under a denominator of 100 the best
        // approximation collapses to 1/2.
        assert_eq!(best_rational(0.50006, 100), Ratio::new(1, 2));
    }

    #[test]
    fn test_bound_respected_and_accurate() {
        for &(value, limit) in &[
            (0.50006, 10_000u64),
            (200.0 / 201.0, 10_000),
            (std::f64::consts::FRAC_1_SQRT_2, 1_000_000),
        ] {
            let ratio = best_rational(value, limit);
            assert!(*ratio.denom() <= limit);
            let reconstructed = *ratio.numer() as f64 / *ratio.denom() as f64;
            assert!((reconstructed - value).abs() < 1e-6);
        }
    }

    #[test]
    fn test_tiny_value_rounds_to_zero() {
        let ratio = best_rational(1e-10, 100);
        assert_eq!(ratio, Ratio::new(0, 1));
    }

    #[test]
    fn test_denominator_one() {
        assert_eq!(best_rational(0.7, 1), Ratio::new(1, 1));
        assert_eq!(best_rational(0.3, 1), Ratio::new(0, 1));
    }
}
