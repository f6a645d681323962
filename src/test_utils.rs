// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Re-exports the `approx` assertion macros; playback positions and volumes
//! are floats and must not be compared with `assert_eq!`.

pub use approx::assert_abs_diff_eq;
