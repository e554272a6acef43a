// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Tie-line intersection solvers
//!
//! Works in Cartesian space via the cross-product (determinant) form of
//! line-line intersection. All conversions use the upright orientation:
//! the intersection point is invariant under flipping the triangle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeometryError;
use crate::geometry::composition::Composition;
use crate::geometry::precision::EPSILON_ZERO;
use crate::geometry::transform::{to_barycentric, to_cartesian};

/// Outcome of a tie-line intersection query, classified for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IntersectionOutcome {
    /// Lines cross inside the reference triangle.
    Found(Composition),
    /// Lines cross, but outside the diagram.
    Outside(Composition),
    /// Direction vectors are proportional; no crossing exists.
    Parallel,
    /// At least one endpoint cannot be normalized.
    InvalidInput,
}

/// Intersection of the infinite lines through p1-p2 and p3-p4.
///
/// Returns `Ok(None)` when the lines are parallel — a valid no-result, not
/// an error. The returned composition is the full-line crossing; callers
/// decide in/out-of-triangle status themselves via
/// [`Composition::is_physically_valid`].
pub fn solve_intersection(
    p1: &Composition,
    p2: &Composition,
    p3: &Composition,
    p4: &Composition,
) -> Result<Option<Composition>, GeometryError> {
    let a = to_cartesian(p1, false)?;
    let b = to_cartesian(p2, false)?;
    let c = to_cartesian(p3, false)?;
    let d = to_cartesian(p4, false)?;

    // Line AB as A + t*R, line CD as C + u*S; the denominator R x S is the
    // 2x2 determinant of the direction vectors.
    let r = b - a;
    let s = d - c;

    let denom = r.perp(&s);
    if denom.abs() < EPSILON_ZERO {
        debug!("intersection solver: lines are parallel (denominator ~ 0)");
        return Ok(None);
    }

    let t = (c - a).perp(&s) / denom;
    let crossing = a + r * t;

    to_barycentric(crossing.x, crossing.y, false).map(Some)
}

/// Crossings of the infinite line through p1-p2 with the boundary of the
/// reference triangle.
///
/// Each of the three edge lines (vertex pairs AB, BC, CA) is intersected;
/// only hits lying on the triangle itself survive, and coincident hits are
/// merged so a line through a corner is reported once. Returns 0, 1 or 2
/// points.
pub fn line_triangle_intersections(
    p1: &Composition,
    p2: &Composition,
) -> Result<Vec<Composition>, GeometryError> {
    let edges = [
        (Composition::vertex_a(), Composition::vertex_b()), // c = 0
        (Composition::vertex_b(), Composition::vertex_c()), // a = 0
        (Composition::vertex_c(), Composition::vertex_a()), // b = 0
    ];

    let mut hits: Vec<Composition> = Vec::new();
    for (edge_start, edge_end) in &edges {
        if let Some(hit) = solve_intersection(p1, p2, edge_start, edge_end)? {
            // The solver intersects full lines; discard crossings on an edge
            // line extended past the corners.
            if !hit.is_physically_valid() {
                continue;
            }
            let is_duplicate = hits.iter().any(|existing| existing.normalized_is_close(&hit));
            if !is_duplicate {
                hits.push(hit);
            }
        }
    }
    Ok(hits)
}

/// Classified intersection of the lines through p1-p2 and p3-p4.
pub fn classify_intersection(
    p1: &Composition,
    p2: &Composition,
    p3: &Composition,
    p4: &Composition,
) -> IntersectionOutcome {
    match solve_intersection(p1, p2, p3, p4) {
        Err(_) => IntersectionOutcome::InvalidInput,
        Ok(None) => IntersectionOutcome::Parallel,
        Ok(Some(hit)) => {
            if hit.is_physically_valid() {
                IntersectionOutcome::Found(hit)
            } else {
                IntersectionOutcome::Outside(hit)
            }
        }
    }
}
