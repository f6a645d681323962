// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Volume and mute are written back to `settings.toml` whenever the player
//! reports a change. Other sections of the file are preserved.

use crate::app::config::{self, Config};
use std::path::PathBuf;

/// Applies the audio preferences to `cfg`.
pub fn apply_audio_preferences(cfg: &mut Config, volume: f32, muted: bool) {
    cfg.player.volume = Some(volume);
    cfg.player.muted = Some(muted);
}

/// Loads the config under `base_dir` (default location when `None`),
/// updates the audio preferences and saves it.
///
/// Failures are logged and otherwise ignored; preferences are best effort.
/// An unreadable settings file is left untouched.
pub fn persist_audio_preferences(volume: f32, muted: bool, base_dir: Option<PathBuf>) {
    let (mut cfg, warning) = config::load_with_override(base_dir.clone());
    if warning.is_some() {
        tracing::warn!("settings file could not be read, not saving preferences");
        return;
    }
    apply_audio_preferences(&mut cfg, volume, muted);

    if let Err(error) = config::save_with_override(&cfg, base_dir) {
        tracing::warn!(%error, "failed to save preferences");
    } else {
        tracing::debug!(volume, muted, "saved audio preferences");
    }
}
