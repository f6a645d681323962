// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Controls**: Auto-hide delay for the playback controls overlay
//! - **Gestures**: Single/double click disambiguation and skip zones
//! - **Seeking**: Seek step and seek indicator lifetime
//! - **Volume**: Audio playback volume settings

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Idle time before the controls overlay hides during playback (ms).
pub const DEFAULT_AUTO_HIDE_DELAY_MS: u64 = 3000;

/// Minimum auto-hide delay (ms).
pub const MIN_AUTO_HIDE_DELAY_MS: u64 = 500;

/// Maximum auto-hide delay (ms).
pub const MAX_AUTO_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Delay a single click waits for a possible second click (ms).
pub const DEFAULT_CLICK_DELAY_MS: u64 = 250;

/// Minimum click delay (ms).
pub const MIN_CLICK_DELAY_MS: u64 = 100;

/// Maximum click delay (ms).
pub const MAX_CLICK_DELAY_MS: u64 = 1000;

/// Fraction of the surface width, on each edge, where a double click seeks.
pub const DEFAULT_SKIP_ZONE_RATIO: f32 = 0.25;

/// Minimum skip zone ratio.
pub const MIN_SKIP_ZONE_RATIO: f32 = 0.0;

/// Maximum skip zone ratio (both zones together cover the whole surface).
pub const MAX_SKIP_ZONE_RATIO: f32 = 0.5;

// ==========================================================================
// Seeking Defaults
// ==========================================================================

/// Relative seek step for keyboard and double-click seeks (seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 10.0;

/// Minimum seek step (seconds).
pub const MIN_SEEK_STEP_SECS: f64 = 1.0;

/// Maximum seek step (seconds).
pub const MAX_SEEK_STEP_SECS: f64 = 60.0;

/// How long the seek direction indicator stays on screen (ms).
pub const DEFAULT_SEEK_OVERLAY_MS: u64 = 650;

/// Minimum seek indicator lifetime (ms).
pub const MIN_SEEK_OVERLAY_MS: u64 = 100;

/// Maximum seek indicator lifetime (ms).
pub const MAX_SEEK_OVERLAY_MS: u64 = 5000;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default video playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per key press (5%).
pub const VOLUME_STEP: f32 = 0.05;
