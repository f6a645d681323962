// SPDX-License-Identifier: MPL-2.0
//! Volume domain type for audio playback.
//!
//! Wraps a volume level so it always stays within 0.0–1.0.

use crate::app::config::{DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME, VOLUME_STEP};

/// Volume level, guaranteed to be within the valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use iced_reel::player::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// Non-finite input falls back to the default level.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_finite() {
            Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true for a silent level.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= MIN_VOLUME
    }

    /// Increases volume by one step, clamping to maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0 + VOLUME_STEP)
    }

    /// Decreases volume by one step, clamping to minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0 - VOLUME_STEP)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), MIN_VOLUME);
        assert_abs_diff_eq!(Volume::new(1.5).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(0.5).value(), 0.5);
        assert_abs_diff_eq!(Volume::new(f32::NAN).value(), DEFAULT_VOLUME);
    }

    #[test]
    fn increase_adds_step_and_stops_at_max() {
        let louder = Volume::new(0.5).increase();
        assert_abs_diff_eq!(louder.value(), 0.5 + VOLUME_STEP, epsilon = 0.001);
        assert_abs_diff_eq!(Volume::new(MAX_VOLUME).increase().value(), MAX_VOLUME);
    }

    #[test]
    fn decrease_subtracts_step_and_stops_at_min() {
        let quieter = Volume::new(0.5).decrease();
        assert_abs_diff_eq!(quieter.value(), 0.5 - VOLUME_STEP, epsilon = 0.001);
        assert!(Volume::new(0.02).decrease().is_silent());
    }
}
