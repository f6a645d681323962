// SPDX-License-Identifier: MPL-2.0
//! Styles for the player widgets.

pub mod button;
pub mod container;
pub mod overlay;
