// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Composition value type
//!
//! A composition stores the three raw barycentric coordinates of a point in
//! the Gibbs triangle. Raw values may be negative or zero — intermediate and
//! extrapolated calculations need that freedom — and normalization is an
//! explicit, fallible operation, never an implicit one.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::precision::{is_degenerate_total, within_boundary, COMPOSITION_ATOL, EPSILON_ZERO};
use crate::utils::{approx_eq, check_finite, compensated_sum};

/// Range accepted from direct coordinate entry; values outside are clamped.
const COORD_INPUT_MIN: f64 = 0.0;
const COORD_INPUT_MAX: f64 = 10_000.0;

/// Barycentric coordinates of a point in the ternary diagram.
///
/// Immutable value type: every transform produces a new `Composition`.
/// Equality of two compositions is meaningful only on normalized
/// coordinates — use [`Composition::normalized_is_close`], not `==`,
/// unless bitwise-identical raw values are what you mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    a: f64,
    b: f64,
    c: f64,
}

impl Composition {
    /// Create a composition from three raw coordinates.
    ///
    /// Rejects NaN/Infinity per coordinate before anything is stored.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, GeometryError> {
        check_finite(a, "a")?;
        check_finite(b, "b")?;
        check_finite(c, "c")?;
        Ok(Self { a, b, c })
    }

    /// The A corner of the reference triangle, (1, 0, 0).
    pub const fn vertex_a() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0 }
    }

    /// The B corner of the reference triangle, (0, 1, 0).
    pub const fn vertex_b() -> Self {
        Self { a: 0.0, b: 1.0, c: 0.0 }
    }

    /// The C corner of the reference triangle, (0, 0, 1).
    pub const fn vertex_c() -> Self {
        Self { a: 0.0, b: 0.0, c: 1.0 }
    }

    /// Infallible constructor for raw user input: non-finite coordinates
    /// become 0.0 and everything is clamped to the supported entry range.
    pub fn from_user_input(a: f64, b: f64, c: f64) -> Self {
        let sanitize = |value: f64| {
            if value.is_finite() {
                value.clamp(COORD_INPUT_MIN, COORD_INPUT_MAX)
            } else {
                0.0
            }
        };
        Self {
            a: sanitize(a),
            b: sanitize(b),
            c: sanitize(c),
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// Sum of the raw coordinates, computed with compensated summation.
    pub fn total(&self) -> f64 {
        compensated_sum(&[self.a, self.b, self.c])
    }

    /// Can this composition be normalized with positive mass?
    pub fn is_valid(&self) -> bool {
        self.total() > EPSILON_ZERO
    }

    /// Normalized coordinates (components sum to 1).
    ///
    /// Fails with [`GeometryError::ZeroTotal`] when the total is numerically
    /// zero; callers must handle that instead of receiving NaN.
    pub fn normalized(&self) -> Result<Vector3<f64>, GeometryError> {
        let total = self.total();
        if is_degenerate_total(total) {
            return Err(GeometryError::ZeroTotal {
                a: self.a,
                b: self.b,
                c: self.c,
            });
        }
        Ok(Vector3::new(self.a / total, self.b / total, self.c / total))
    }

    /// Does this composition describe a physically meaningful mixture?
    ///
    /// True iff it normalizes with positive mass and every normalized
    /// coordinate sits inside the triangle, up to the boundary tolerance.
    pub fn is_physically_valid(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        match self.normalized() {
            Ok(n) => n.iter().all(|&v| within_boundary(v)),
            Err(_) => false,
        }
    }

    /// Compare normalized coordinates with the default absolute tolerance.
    pub fn normalized_is_close(&self, other: &Self) -> bool {
        self.normalized_is_close_within(other, COMPOSITION_ATOL)
    }

    /// Compare normalized coordinates with a caller-chosen absolute tolerance.
    ///
    /// Returns false (never errors) when either side cannot normalize.
    pub fn normalized_is_close_within(&self, other: &Self, atol: f64) -> bool {
        match (self.normalized(), other.normalized()) {
            (Ok(lhs), Ok(rhs)) => (0..3).all(|i| approx_eq(lhs[i], rhs[i], atol)),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite() {
        assert!(Composition::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(Composition::new(0.0, f64::INFINITY, 0.0).is_err());
        assert!(Composition::new(0.0, 0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_negative_raw_values_allowed() {
        // Extrapolated intermediate results live outside the triangle.
        let comp = Composition::new(-0.5, 1.0, 0.5).unwrap();
        assert!((comp.total() - 1.0).abs() < 1e-15);
        assert!(!comp.is_physically_valid());
    }

    #[test]
    fn test_normalized() {
        let comp = Composition::new(1.0, 1.0, 2.0).unwrap();
        let n = comp.normalized().unwrap();
        assert_eq!(n.x, 0.25);
        assert_eq!(n.y, 0.25);
        assert_eq!(n.z, 0.5);
    }

    #[test]
    fn test_zero_total_is_named_failure() {
        let comp = Composition::new(0.0, 0.0, 0.0).unwrap();
        assert!(!comp.is_valid());
        assert!(matches!(
            comp.normalized(),
            Err(GeometryError::ZeroTotal { .. })
        ));
    }

    #[test]
    fn test_close_compositions_absolute() {
        let c1 = Composition::new(0.5, 0.3, 0.2).unwrap();
        let c2 = Composition::new(0.50004, 0.29998, 0.19998).unwrap();
        assert!(c1.normalized_is_close(&c2));
    }

    #[test]
    fn test_small_values_comparison() {
        // A relative comparison would fail on the near-zero components.
        let c1 = Composition::new(0.00001, 0.99998, 0.00001).unwrap();
        let c2 = Composition::new(0.000015, 0.99997, 0.000015).unwrap();
        assert!(c1.normalized_is_close(&c2));
    }

    #[test]
    fn test_not_close_compositions() {
        let c1 = Composition::new(0.5, 0.3, 0.2).unwrap();
        let c2 = Composition::new(0.5001, 0.2999, 0.2).unwrap();
        assert!(!c1.normalized_is_close(&c2));
    }

    #[test]
    fn test_custom_tolerance() {
        let c1 = Composition::new(0.5, 0.3, 0.2).unwrap();
        let c2 = Composition::new(0.501, 0.299, 0.2).unwrap();
        assert!(!c1.normalized_is_close(&c2));
        assert!(c1.normalized_is_close_within(&c2, 0.01));
    }

    #[test]
    fn test_zero_sum_comparison_is_false() {
        let degenerate = Composition::new(0.0, 0.0, 0.0).unwrap();
        let valid = Composition::new(1.0, 1.0, 1.0).unwrap();
        assert!(!degenerate.normalized_is_close(&valid));
    }

    #[test]
    fn test_from_user_input_sanitizes() {
        let comp = Composition::from_user_input(f64::NAN, -3.0, 1e12);
        assert_eq!(comp.a(), 0.0);
        assert_eq!(comp.b(), 0.0);
        assert_eq!(comp.c(), COORD_INPUT_MAX);
    }

    #[test]
    fn test_serde_round_trip() {
        let comp = Composition::new(0.2, 0.3, 0.5).unwrap();
        let json = serde_json::to_string(&comp).unwrap();
        let back: Composition = serde_json::from_str(&json).unwrap();
        assert_eq!(comp, back);
    }
}
