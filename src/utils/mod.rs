// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Ternframe Inc.

//! Shared numeric utilities

mod math;

pub use math::{approx_eq, compensated_sum};

pub(crate) use math::check_finite;
