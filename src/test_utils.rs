// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macro so tests compare floats
//! with a tolerance instead of bitwise `assert_eq!`.

pub use approx::assert_abs_diff_eq;
