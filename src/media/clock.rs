// SPDX-License-Identifier: MPL-2.0
//! Clock-driven media element.
//!
//! Tracks transport state and a playback position advanced from monotonic
//! [`Instant`]s. Durations come from the container header of local sources;
//! everything else reports an unknown (`NaN`) duration and plays unbounded.

use super::{probe, MediaElement, MediaEvent, MediaSource};
use crate::app::config::{DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME};
use std::time::Instant;

#[derive(Debug)]
pub struct ClockMedia {
    source: Option<MediaSource>,
    duration: f64,
    /// Position at `anchor`, or the paused position.
    position: f64,
    /// Set while playing.
    anchor: Option<Instant>,
    volume: f32,
    muted: bool,
    events: Vec<MediaEvent>,
}

impl Default for ClockMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockMedia {
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            duration: f64::NAN,
            position: 0.0,
            anchor: None,
            volume: DEFAULT_VOLUME,
            muted: false,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    fn has_known_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    fn clamp_position(&self, secs: f64) -> f64 {
        let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
        if self.has_known_duration() {
            secs.min(self.duration)
        } else {
            secs
        }
    }

    /// Position at `now`, without side effects.
    #[must_use]
    pub fn current_time_at(&self, now: Instant) -> f64 {
        match self.anchor {
            Some(anchor) => {
                let elapsed = now.saturating_duration_since(anchor).as_secs_f64();
                self.clamp_position(self.position + elapsed)
            }
            None => self.position,
        }
    }

    pub fn play_at(&mut self, now: Instant) {
        if self.source.is_none() || self.anchor.is_some() {
            return;
        }
        if self.has_known_duration() && self.position >= self.duration {
            self.position = 0.0;
            self.events.push(MediaEvent::TimeUpdate(0.0));
        }
        self.anchor = Some(now);
        self.events.push(MediaEvent::Play);
    }

    pub fn pause_at(&mut self, now: Instant) {
        if self.anchor.is_none() {
            return;
        }
        self.position = self.current_time_at(now);
        self.anchor = None;
        self.events.push(MediaEvent::Pause);
    }

    pub fn seek_at(&mut self, secs: f64, now: Instant) {
        if self.source.is_none() {
            return;
        }
        self.position = self.clamp_position(secs);
        if self.anchor.is_some() {
            self.anchor = Some(now);
        }
        self.events.push(MediaEvent::TimeUpdate(self.position));
    }

    /// Advances the clock to `now`, queueing progress and end-of-media events.
    pub fn poll_at(&mut self, now: Instant) {
        if self.anchor.is_none() {
            return;
        }
        let position = self.current_time_at(now);
        if self.has_known_duration() && position >= self.duration {
            self.position = self.duration;
            self.anchor = None;
            self.events.push(MediaEvent::TimeUpdate(self.duration));
            self.events.push(MediaEvent::Pause);
            self.events.push(MediaEvent::Ended);
        } else {
            self.events.push(MediaEvent::TimeUpdate(position));
        }
    }
}

impl MediaElement for ClockMedia {
    fn play(&mut self) {
        self.play_at(Instant::now());
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn is_paused(&self) -> bool {
        self.anchor.is_none()
    }

    fn current_time(&self) -> f64 {
        self.current_time_at(Instant::now())
    }

    fn set_current_time(&mut self, secs: f64) {
        self.seek_at(secs, Instant::now());
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn load(&mut self, source: Option<&MediaSource>) {
        if self.anchor.take().is_some() {
            self.events.push(MediaEvent::Pause);
        }
        self.position = 0.0;
        self.source = source.cloned();

        self.duration = match self.source.as_ref().and_then(|s| s.path.as_deref()) {
            Some(path) => match probe::duration_secs(path) {
                Ok(duration) => duration,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "duration probe failed");
                    f64::NAN
                }
            },
            None => f64::NAN,
        };
        tracing::debug!(
            source = self.source.as_ref().map(|s| s.url.as_str()),
            duration = self.duration,
            "media loaded"
        );

        self.events.push(MediaEvent::TimeUpdate(0.0));
        self.events.push(MediaEvent::DurationChange(self.duration));
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        self.poll_at(Instant::now());
        std::mem::take(&mut self.events)
    }
}
