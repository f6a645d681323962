// SPDX-License-Identifier: MPL-2.0
//! Controls visibility state machine with auto-hide.
//!
//! While playing, the controls disappear after an idle period. Every user
//! interaction issues a new interaction stamp and re-arms the auto-hide
//! timer with it; a timer only hides the controls if its stamp is still the
//! latest one.

use super::timer::Generation;
use std::time::Instant;

/// Interaction state of the player. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Paused,
    PlayingControlsVisible,
    PlayingControlsHidden,
}

impl UiState {
    #[must_use]
    pub fn is_playing(self) -> bool {
        !matches!(self, UiState::Paused)
    }

    #[must_use]
    pub fn controls_visible(self) -> bool {
        !matches!(self, UiState::PlayingControlsHidden)
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    ui_state: UiState,
    stamp: Generation,
    last_interaction: Option<Instant>,
}

/// Messages for the controls sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The media element started playing.
    PlaybackStarted,
    /// The media element paused or ended.
    PlaybackStopped,
    /// Pointer move/enter, key press, scrub, volume, fullscreen.
    Interaction(Instant),
    /// The pointer left the player surface.
    PointerLeft,
    /// An auto-hide timer armed with this stamp fired.
    AutoHideElapsed(u64),
    /// The video was removed.
    Reset,
}

/// Effects produced by controls state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// (Re)arm the auto-hide timer guarded by this stamp.
    ArmAutoHide(u64),
    CancelAutoHide,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PlaybackStarted => {
                self.ui_state = UiState::PlayingControlsVisible;
                Effect::ArmAutoHide(self.stamp.bump())
            }
            Message::PlaybackStopped => {
                self.ui_state = UiState::Paused;
                self.stamp.bump();
                Effect::CancelAutoHide
            }
            Message::Interaction(at) => {
                self.last_interaction = Some(at);
                let stamp = self.stamp.bump();
                match self.ui_state {
                    UiState::Paused => Effect::None,
                    UiState::PlayingControlsVisible | UiState::PlayingControlsHidden => {
                        self.ui_state = UiState::PlayingControlsVisible;
                        Effect::ArmAutoHide(stamp)
                    }
                }
            }
            Message::PointerLeft => {
                if !self.ui_state.is_playing() {
                    return Effect::None;
                }
                self.ui_state = UiState::PlayingControlsHidden;
                self.stamp.bump();
                Effect::CancelAutoHide
            }
            Message::AutoHideElapsed(stamp) => {
                if self.ui_state == UiState::PlayingControlsVisible && self.stamp.is_current(stamp)
                {
                    self.ui_state = UiState::PlayingControlsHidden;
                } else {
                    tracing::trace!(stamp, latest = self.stamp.current(), "stale auto-hide");
                }
                Effect::None
            }
            Message::Reset => {
                self.ui_state = UiState::Paused;
                self.last_interaction = None;
                self.stamp.bump();
                Effect::CancelAutoHide
            }
        }
    }

    #[must_use]
    pub fn ui_state(&self) -> UiState {
        self.ui_state
    }

    #[must_use]
    pub fn last_interaction(&self) -> Option<Instant> {
        self.last_interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> (State, u64) {
        let mut state = State::default();
        let Effect::ArmAutoHide(stamp) = state.handle(Message::PlaybackStarted) else {
            panic!("playback start should arm auto-hide");
        };
        (state, stamp)
    }

    #[test]
    fn starts_paused() {
        let state = State::default();
        assert_eq!(state.ui_state(), UiState::Paused);
        assert!(state.last_interaction().is_none());
    }

    #[test]
    fn play_shows_controls_and_arms_timer() {
        let (state, _) = playing();
        assert_eq!(state.ui_state(), UiState::PlayingControlsVisible);
    }

    #[test]
    fn auto_hide_hides_after_idle() {
        let (mut state, stamp) = playing();
        state.handle(Message::AutoHideElapsed(stamp));
        assert_eq!(state.ui_state(), UiState::PlayingControlsHidden);
    }

    #[test]
    fn interaction_makes_earlier_timer_stale() {
        let (mut state, first) = playing();
        let effect = state.handle(Message::Interaction(Instant::now()));
        let Effect::ArmAutoHide(second) = effect else {
            panic!("interaction while playing should re-arm");
        };

        state.handle(Message::AutoHideElapsed(first));
        assert_eq!(state.ui_state(), UiState::PlayingControlsVisible);

        state.handle(Message::AutoHideElapsed(second));
        assert_eq!(state.ui_state(), UiState::PlayingControlsHidden);
    }

    #[test]
    fn interaction_while_hidden_shows_controls() {
        let (mut state, stamp) = playing();
        state.handle(Message::AutoHideElapsed(stamp));

        let effect = state.handle(Message::Interaction(Instant::now()));

        assert!(matches!(effect, Effect::ArmAutoHide(_)));
        assert_eq!(state.ui_state(), UiState::PlayingControlsVisible);
    }

    #[test]
    fn interaction_while_paused_arms_nothing() {
        let mut state = State::default();
        let at = Instant::now();

        assert_eq!(state.handle(Message::Interaction(at)), Effect::None);
        assert_eq!(state.ui_state(), UiState::Paused);
        assert_eq!(state.last_interaction(), Some(at));
    }

    #[test]
    fn pause_from_any_state_goes_paused() {
        for hide in [false, true] {
            let (mut state, stamp) = playing();
            if hide {
                state.handle(Message::AutoHideElapsed(stamp));
            }
            assert_eq!(
                state.handle(Message::PlaybackStopped),
                Effect::CancelAutoHide
            );
            assert_eq!(state.ui_state(), UiState::Paused);
        }
    }

    #[test]
    fn timer_firing_after_pause_is_ignored() {
        let (mut state, stamp) = playing();
        state.handle(Message::PlaybackStopped);
        state.handle(Message::AutoHideElapsed(stamp));
        assert_eq!(state.ui_state(), UiState::Paused);
    }

    #[test]
    fn pointer_leave_hides_immediately_while_playing() {
        let (mut state, stamp) = playing();
        assert_eq!(state.handle(Message::PointerLeft), Effect::CancelAutoHide);
        assert_eq!(state.ui_state(), UiState::PlayingControlsHidden);

        // The timer armed before leaving is now stale.
        state.handle(Message::Interaction(Instant::now()));
        state.handle(Message::AutoHideElapsed(stamp));
        assert_eq!(state.ui_state(), UiState::PlayingControlsVisible);
    }

    #[test]
    fn pointer_leave_while_paused_is_ignored() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::PointerLeft), Effect::None);
        assert_eq!(state.ui_state(), UiState::Paused);
    }

    #[test]
    fn reset_clears_interaction_timestamp() {
        let (mut state, _) = playing();
        state.handle(Message::Interaction(Instant::now()));

        state.handle(Message::Reset);

        assert_eq!(state.ui_state(), UiState::Paused);
        assert!(state.last_interaction().is_none());
    }
}
