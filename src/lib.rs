// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a desktop video player built with the Iced GUI framework.
//!
//! The [`player`] module holds the toolkit-independent player component:
//! controls state machine, click gestures, seek indicator, keyboard table
//! and source selection. [`media`] defines the media element and host seams
//! it drives, with clock-based defaults. [`app`] and [`ui`] wire it into an
//! Iced application.

pub mod app;
pub mod error;
pub mod media;
pub mod player;
pub mod ui;

#[cfg(test)]
mod test_utils;
