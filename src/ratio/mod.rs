// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Integer stoichiometric-ratio search
//!
//! Converts a vector of non-negative magnitudes (molar fractions) into the
//! smallest integer vector that reproduces them within tolerance. The search
//! is tiered: simple denominators are tried first so float noise collapses
//! to clean ratios, and the limit is raised only when the simple answer is
//! not numerically faithful.

mod rational;

pub use rational::best_rational;

use num_integer::Integer;
use num_rational::Ratio;
use tracing::warn;

use crate::geometry::precision::EPSILON_ZERO;
use crate::utils::compensated_sum;

/// Denominator limits tried in order: classical chemistry, complex alloys,
/// high-precision stoichiometry.
const DENOMINATOR_TIERS: [u64; 3] = [100, 10_000, 1_000_000];

/// Absolute per-component accuracy a tier must reach to be accepted.
pub const RATIO_TOLERANCE: f64 = 5e-5;

/// Scale used by the rounding fallback when no tier validates.
const FALLBACK_SCALE: u64 = 100_000;

/// Smallest integer vector whose normalized ratio reproduces `values`.
///
/// A tight denominator limit alone would misread legitimate large ratios
/// (200:1) as unrepresentable, while a loose one would turn float noise
/// (0.50001) into absurd fractions; each tier's result is therefore
/// validated against the input and the first faithful tier wins. Inputs
/// that defeat every tier fall back to deterministic scaling.
///
/// Edge behavior: empty input gives an empty vector, an all-zero input a
/// zero vector of the same length, and zero entries keep their positions.
pub fn find_integer_ratio(values: &[f64]) -> Vec<u64> {
    if values.is_empty() {
        return Vec::new();
    }
    if values.iter().all(|v| v.abs() < EPSILON_ZERO) {
        return vec![0; values.len()];
    }

    let total = compensated_sum(values);
    if total.abs() < EPSILON_ZERO {
        return vec![0; values.len()];
    }

    let normalized: Vec<f64> = values.iter().map(|v| v / total).collect();

    for &limit in &DENOMINATOR_TIERS {
        if let Some(integers) = try_tier(&normalized, limit) {
            return integers;
        }
    }

    warn!("ratio search: no denominator tier validated, using scaling fallback");
    fallback_scaling(&normalized)
}

/// One denominator tier: approximate, combine over a common denominator,
/// reduce, then validate against the normalized input.
///
/// Returns `None` when the tier is unfaithful or its arithmetic overflows —
/// both mean "try the next tier", never a panic.
fn try_tier(normalized: &[f64], limit: u64) -> Option<Vec<u64>> {
    let fractions: Vec<Ratio<u64>> = normalized
        .iter()
        .map(|v| best_rational(v.abs(), limit))
        .collect();

    let mut common_denom = 1u64;
    for fraction in &fractions {
        common_denom = checked_lcm(common_denom, *fraction.denom())?;
    }

    let mut integers = Vec::with_capacity(fractions.len());
    for fraction in &fractions {
        integers.push(fraction.numer().checked_mul(common_denom / fraction.denom())?);
    }

    let divisor = gcd_of_nonzero(&integers);
    if divisor == 0 {
        // Every component approximated to zero at this limit.
        return None;
    }
    if divisor > 1 {
        for value in &mut integers {
            *value /= divisor;
        }
    }

    let sum: f64 = integers.iter().map(|&v| v as f64).sum();
    if sum < EPSILON_ZERO {
        return None;
    }

    let faithful = normalized
        .iter()
        .zip(&integers)
        .all(|(original, &value)| (original - value as f64 / sum).abs() <= RATIO_TOLERANCE);
    faithful.then_some(integers)
}

/// Deterministic last resort: scale, round, and absorb the rounding drift
/// into the dominant entry so the scaled sum stays exact.
fn fallback_scaling(normalized: &[f64]) -> Vec<u64> {
    let scale = FALLBACK_SCALE as f64;
    let mut integers: Vec<i64> = normalized
        .iter()
        .map(|v| (v * scale).round() as i64)
        .collect();

    let sum: i64 = integers.iter().sum();
    let drift = FALLBACK_SCALE as i64 - sum;
    if drift != 0 {
        let max_index = integers
            .iter()
            .enumerate()
            .max_by_key(|&(_, &value)| value)
            .map(|(index, _)| index);
        if let Some(index) = max_index {
            if integers[index] > 0 {
                integers[index] += drift;
            }
        }
    }

    let mut result: Vec<u64> = integers.into_iter().map(|v| v.max(0) as u64).collect();
    let divisor = gcd_of_nonzero(&result);
    if divisor > 1 {
        for value in &mut result {
            *value /= divisor;
        }
    }
    result
}

fn gcd_of_nonzero(values: &[u64]) -> u64 {
    values
        .iter()
        .copied()
        .filter(|&v| v != 0)
        .fold(0u64, |acc, v| acc.gcd(&v))
}

fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    (a / a.gcd(&b)).checked_mul(b)
}
