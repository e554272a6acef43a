// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Geometry module - composition values, transforms and solvers

mod composition;
mod intersection;
mod lever;
pub mod precision;
mod transform;

pub use composition::Composition;
pub use intersection::{
    classify_intersection, line_triangle_intersections, solve_intersection, IntersectionOutcome,
};
pub use lever::{
    are_collinear, closest_point_on_segment, is_point_on_line, lever_fraction, triangle_area,
};
pub use transform::{barycentric_in_triangle, to_barycentric, to_cartesian, vertices};
