// SPDX-License-Identifier: MPL-2.0
//! User interface for the player.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they read
//! [`crate::player::State`] and emit [`crate::player::Message`]s.
//!
//! - [`player_view`] - Drop target, video surface and overlays
//! - [`video_controls`] - Playback controls bar
//! - [`styles`] - Container, button and overlay styles
//! - [`design_tokens`] - Colors, spacing and sizing constants
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod player_view;
pub mod styles;
pub mod theming;
pub mod video_controls;
