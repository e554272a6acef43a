// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Ternframe geometry kernel
//!
//! Barycentric geometry and stoichiometric-ratio engine for ternary
//! ("Gibbs triangle") composition diagrams: coordinate transforms between
//! barycentric and Cartesian space, tie-line intersection and lever-rule
//! solvers, collinearity and degeneracy detection, and tiered extraction of
//! small integer ratios from floating-point molar fractions.
//!
//! The kernel is pure, synchronous and stateless: every function maps
//! immutable value inputs to freshly constructed outputs, so everything here
//! is safe to call from any number of threads without coordination.

pub mod error;
pub mod geometry;
pub mod ratio;
pub mod utils;

pub use error::GeometryError;
pub use geometry::{
    are_collinear, barycentric_in_triangle, classify_intersection, closest_point_on_segment,
    is_point_on_line, lever_fraction, line_triangle_intersections, solve_intersection,
    to_barycentric, to_cartesian, triangle_area, vertices, Composition, IntersectionOutcome,
};
pub use ratio::{find_integer_ratio, RATIO_TOLERANCE};
