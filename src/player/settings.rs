// SPDX-License-Identifier: MPL-2.0
//! Player timings and gesture geometry, clamped from the user config.

use crate::app::config::{self, PlayerConfig};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub autoplay: bool,
    pub auto_hide_delay: Duration,
    pub click_delay: Duration,
    pub seek_overlay_duration: Duration,
    /// Relative seek step in seconds.
    pub seek_step_secs: f64,
    /// Fraction of the surface width on each side that seeks on double click.
    pub skip_zone_ratio: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

impl Settings {
    /// Builds settings from the `[player]` section, pulling every value into
    /// its supported range.
    #[must_use]
    pub fn from_config(player: &PlayerConfig) -> Self {
        let millis = |value: Option<u64>, default: u64, min: u64, max: u64| {
            Duration::from_millis(value.unwrap_or(default).clamp(min, max))
        };

        let seek_step_secs = player
            .seek_step_secs
            .filter(|step| step.is_finite())
            .unwrap_or(config::DEFAULT_SEEK_STEP_SECS)
            .clamp(config::MIN_SEEK_STEP_SECS, config::MAX_SEEK_STEP_SECS);
        let skip_zone_ratio = player
            .skip_zone_ratio
            .filter(|ratio| ratio.is_finite())
            .unwrap_or(config::DEFAULT_SKIP_ZONE_RATIO)
            .clamp(config::MIN_SKIP_ZONE_RATIO, config::MAX_SKIP_ZONE_RATIO);

        Self {
            autoplay: player.autoplay.unwrap_or(false),
            auto_hide_delay: millis(
                player.auto_hide_delay_ms,
                config::DEFAULT_AUTO_HIDE_DELAY_MS,
                config::MIN_AUTO_HIDE_DELAY_MS,
                config::MAX_AUTO_HIDE_DELAY_MS,
            ),
            click_delay: millis(
                player.click_delay_ms,
                config::DEFAULT_CLICK_DELAY_MS,
                config::MIN_CLICK_DELAY_MS,
                config::MAX_CLICK_DELAY_MS,
            ),
            seek_overlay_duration: millis(
                player.seek_overlay_ms,
                config::DEFAULT_SEEK_OVERLAY_MS,
                config::MIN_SEEK_OVERLAY_MS,
                config::MAX_SEEK_OVERLAY_MS,
            ),
            seek_step_secs,
            skip_zone_ratio,
        }
    }
}
