// SPDX-License-Identifier: MPL-2.0
//! Single/double click disambiguation on the video surface.
//!
//! A single click waits for the click delay before toggling playback, so a
//! double click can claim it first. Double clicks seek when they land in a
//! skip zone at either edge of the surface.
//!
//! A toggle can still race ahead of the double click when the host's double
//! click window is longer than the click delay: the first press has toggled
//! and the second press has armed a fresh click by the time the double click
//! arrives. The pre-toggle paused state is kept for two click delays so such
//! a toggle can be reverted.

use super::seek_overlay::SeekDirection;
use super::timer::Generation;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LastToggle {
    was_paused: bool,
    at: Instant,
}

/// Armed click timer and the presses seen since it was armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    token: u64,
    presses: u32,
}

#[derive(Debug, Clone)]
pub struct State {
    click_delay: Duration,
    skip_zone_ratio: f32,
    token: Generation,
    pending: Option<Pending>,
    last_toggle: Option<LastToggle>,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Primary button press on the surface.
    Click,
    /// The click timer armed with `token` fired. `paused` is the media state
    /// right before the toggle.
    TimerElapsed {
        token: u64,
        paused: bool,
        at: Instant,
    },
    /// Double click at `x` pixels from the left edge of a surface `width` wide.
    DoubleClick { x: f32, width: f32, at: Instant },
    /// Forget pending clicks.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Arm the click timer guarded by this token.
    ScheduleClick(u64),
    /// Toggle play/pause.
    TogglePlayback,
    DoubleClick {
        /// A click timer was pending and must be cancelled.
        cancel_pending: bool,
        /// Restore this paused state to undo a racing toggle.
        restore_paused: Option<bool>,
        seek: Option<SeekDirection>,
    },
}

impl State {
    #[must_use]
    pub fn new(click_delay: Duration, skip_zone_ratio: f32) -> Self {
        Self {
            click_delay,
            skip_zone_ratio,
            token: Generation::default(),
            pending: None,
            last_toggle: None,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Click => {
                if let Some(pending) = self.pending.as_mut() {
                    pending.presses += 1;
                    return Effect::None;
                }
                let token = self.token.bump();
                self.pending = Some(Pending { token, presses: 1 });
                Effect::ScheduleClick(token)
            }
            Message::TimerElapsed { token, paused, at } => {
                if self.pending.map(|pending| pending.token) != Some(token) {
                    return Effect::None;
                }
                self.pending = None;
                self.last_toggle = Some(LastToggle {
                    was_paused: paused,
                    at,
                });
                Effect::TogglePlayback
            }
            Message::DoubleClick { x, width, at } => {
                let pending = self.pending.take();
                let cancel_pending = pending.is_some();
                if cancel_pending {
                    // Invalidate the timer in case its cancellation is lost.
                    self.token.bump();
                }

                // Two presses on the pending click pair up with each other, so
                // no toggle raced ahead. A single press pairs with the press
                // before it, whose toggle may already have run.
                let last_toggle = self.last_toggle.take();
                let paired_with_pending = pending.is_some_and(|pending| pending.presses > 1);
                let restore_paused = last_toggle
                    .filter(|_| !paired_with_pending)
                    .filter(|toggle| at.saturating_duration_since(toggle.at) < self.click_delay * 2)
                    .map(|toggle| toggle.was_paused);

                Effect::DoubleClick {
                    cancel_pending,
                    restore_paused,
                    seek: self.zone(x, width),
                }
            }
            Message::Reset => {
                self.pending = None;
                self.last_toggle = None;
                self.token.bump();
                Effect::None
            }
        }
    }

    /// Skip zone containing `x`, if any.
    #[must_use]
    pub fn zone(&self, x: f32, width: f32) -> Option<SeekDirection> {
        if !(width.is_finite() && width > 0.0 && x.is_finite()) {
            return None;
        }
        let zone = width * self.skip_zone_ratio;
        if x <= zone {
            Some(SeekDirection::Backward)
        } else if x >= width - zone {
            Some(SeekDirection::Forward)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_click_pending(&self) -> bool {
        self.pending.is_some()
    }
}
