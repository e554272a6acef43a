// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Barycentric <-> Cartesian coordinate transforms
//!
//! The reference frame is a fixed equilateral triangle with unit edge and
//! height `sqrt(3)/2`, in two orientations (point-up and point-down). The
//! inverse transform is the closed-form analytic solution derived from the
//! vertex geometry, not a generic 2x2 solve — that keeps round-trips exact
//! to well below the boundary tolerance.

use nalgebra::Point2;

use crate::error::GeometryError;
use crate::geometry::composition::Composition;
use crate::geometry::precision::{is_degenerate_area, snap_zero, TRIANGLE_HEIGHT};
use crate::utils::check_finite;

/// Cartesian corners (A, B, C) of the reference triangle.
///
/// Upright: A and B on the baseline, C on top. Inverted mirrors the
/// triangle in y, so C sits on the baseline instead.
pub fn vertices(is_inverted: bool) -> [Point2<f64>; 3] {
    if is_inverted {
        [
            Point2::new(0.0, TRIANGLE_HEIGHT),
            Point2::new(1.0, TRIANGLE_HEIGHT),
            Point2::new(0.5, 0.0),
        ]
    } else {
        [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, TRIANGLE_HEIGHT),
        ]
    }
}

/// Map a composition to Cartesian coordinates of the reference triangle.
///
/// Uses the normalized coordinates as vertex weights, so the composition
/// must have a non-zero total.
pub fn to_cartesian(comp: &Composition, is_inverted: bool) -> Result<Point2<f64>, GeometryError> {
    let n = comp.normalized()?;
    let [va, vb, vc] = vertices(is_inverted);
    Ok(Point2::from(n.x * va.coords + n.y * vb.coords + n.z * vc.coords))
}

/// Map a Cartesian point back to barycentric coordinates.
///
/// Analytic inverse of the vertex geometry: for the upright triangle,
/// `y = c*H` and `x = b + c/2`; the inverted orientation is the same
/// triangle mirrored in y. Components within the zero epsilon of 0.0 are
/// snapped to exactly zero so boundary points compare and serialize cleanly.
pub fn to_barycentric(x: f64, y: f64, is_inverted: bool) -> Result<Composition, GeometryError> {
    check_finite(x, "x")?;
    check_finite(y, "y")?;

    let y_upright = if is_inverted { TRIANGLE_HEIGHT - y } else { y };
    let c = y_upright / TRIANGLE_HEIGHT;
    let b = x - 0.5 * c;
    let a = 1.0 - b - c;

    Composition::new(snap_zero(a), snap_zero(b), snap_zero(c))
}

/// Barycentric coordinates (u, v, w) of `point` against an arbitrary
/// Cartesian triangle (v0, v1, v2).
///
/// Fails with [`GeometryError::DegenerateTriangle`] when the triangle has
/// numerically zero area.
pub fn barycentric_in_triangle(
    v0: Point2<f64>,
    v1: Point2<f64>,
    v2: Point2<f64>,
    point: Point2<f64>,
) -> Result<(f64, f64, f64), GeometryError> {
    let det = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);
    if is_degenerate_area(det) {
        return Err(GeometryError::DegenerateTriangle);
    }

    let u = ((v1.y - v2.y) * (point.x - v2.x) + (v2.x - v1.x) * (point.y - v2.y)) / det;
    let v = ((v2.y - v0.y) * (point.x - v2.x) + (v0.x - v2.x) * (point.y - v2.y)) / det;
    Ok((u, v, 1.0 - u - v))
}
