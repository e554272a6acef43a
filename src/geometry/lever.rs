// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Lever-rule and projection utilities
//!
//! Interpolation parameters, nearest-point projection and collinearity
//! predicates over normalized barycentric space. All distance-style checks
//! use absolute tolerances, so short and long tie-lines are judged with
//! identical strictness.

use crate::error::GeometryError;
use crate::geometry::composition::Composition;
use crate::geometry::precision::is_degenerate_length_sq;
use crate::geometry::transform::{to_barycentric, to_cartesian};

/// Interpolation parameter `t` with `point = start + t * (end - start)`.
///
/// t = 0 is the start composition, t = 1 the end; values outside [0, 1]
/// signal extrapolation and are returned as-is — segment-membership policy
/// belongs to the caller. Coincident start/end is a named failure
/// ([`GeometryError::DegenerateBasis`]), distinct from a legitimate t = 0.
pub fn lever_fraction(
    start: &Composition,
    end: &Composition,
    point: &Composition,
) -> Result<f64, GeometryError> {
    let s = start.normalized()?;
    let e = end.normalized()?;
    let p = point.normalized()?;

    let line = e - s;
    let len_sq = line.norm_squared();
    if is_degenerate_length_sq(len_sq) {
        return Err(GeometryError::DegenerateBasis);
    }

    Ok((p - s).dot(&line) / len_sq)
}

/// Nearest point to `target` on the segment a-b, as a composition.
///
/// Projects in Cartesian space with the parameter clamped to [0, 1]; no
/// extrapolation past the endpoints. When a and b coincide the segment is a
/// single point and `a` itself is returned.
pub fn closest_point_on_segment(
    a: &Composition,
    b: &Composition,
    target: &Composition,
    is_inverted: bool,
) -> Result<Composition, GeometryError> {
    let pa = to_cartesian(a, is_inverted)?;
    let pb = to_cartesian(b, is_inverted)?;
    let pt = to_cartesian(target, is_inverted)?;

    let ab = pb - pa;
    let len_sq = ab.norm_squared();
    if is_degenerate_length_sq(len_sq) {
        return Ok(*a);
    }

    let t = ((pt - pa).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let projection = pa + ab * t;
    to_barycentric(projection.x, projection.y, is_inverted)
}

/// Does `point` lie on the infinite line through start-end?
///
/// Perpendicular distance in normalized space (cross-product magnitude over
/// line length) against an absolute tolerance. With a single-point basis the
/// check collapses to coincidence with `start`. Unnormalizable input is
/// never on a line.
pub fn is_point_on_line(
    start: &Composition,
    end: &Composition,
    point: &Composition,
    tol: f64,
) -> bool {
    let (s, e, p) = match (start.normalized(), end.normalized(), point.normalized()) {
        (Ok(s), Ok(e), Ok(p)) => (s, e, p),
        _ => return false,
    };

    let line = e - s;
    let len_sq = line.norm_squared();
    if is_degenerate_length_sq(len_sq) {
        return (p - s).norm() < tol;
    }

    let distance = line.cross(&(p - s)).norm() / len_sq.sqrt();
    distance < tol
}

/// Are three compositions collinear within `tol`?
///
/// Compares the cross-product magnitude of the two edge vectors against the
/// tolerance. A composition that cannot normalize counts as collinear —
/// "cannot span a triangle" is exactly the condition being asked about.
pub fn are_collinear(p1: &Composition, p2: &Composition, p3: &Composition, tol: f64) -> bool {
    let (a1, a2, a3) = match (p1.normalized(), p2.normalized(), p3.normalized()) {
        (Ok(a1), Ok(a2), Ok(a3)) => (a1, a2, a3),
        _ => return true,
    };

    let cross = (a2 - a1).cross(&(a3 - a1));
    cross.norm() < tol
}

/// Area of the triangle spanned by three compositions in normalized space.
///
/// Zero for any degenerate input, including compositions that cannot
/// normalize.
pub fn triangle_area(p1: &Composition, p2: &Composition, p3: &Composition) -> f64 {
    let (a1, a2, a3) = match (p1.normalized(), p2.normalized(), p3.normalized()) {
        (Ok(a1), Ok(a2), Ok(a3)) => (a1, a2, a3),
        _ => return 0.0,
    };

    (a2 - a1).cross(&(a3 - a1)).norm() / 2.0
}
