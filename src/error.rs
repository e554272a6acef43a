// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Error taxonomy for the geometry kernel

use thiserror::Error;

/// Errors produced by the barycentric geometry kernel.
///
/// Every variant is recoverable: callers are expected to branch on the named
/// condition and retry with different inputs. "No intersection" is never an
/// error — parallel lines yield an explicit `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A raw input coordinate was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    InvalidCoordinate { name: &'static str, value: f64 },

    /// Composition total is numerically zero; normalized coordinates are undefined.
    #[error("cannot normalize composition with zero total: ({a}, {b}, {c})")]
    ZeroTotal { a: f64, b: f64, c: f64 },

    /// Two reference compositions coincide (zero-length tie-line).
    #[error("start and end compositions are identical (zero-length basis)")]
    DegenerateBasis,

    /// Three reference compositions are collinear (zero-area basis triangle).
    #[error("basis triangle has zero area (compositions are collinear)")]
    DegenerateTriangle,
}
