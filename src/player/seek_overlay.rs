// SPDX-License-Identifier: MPL-2.0
//! Transient seek direction indicator.

use super::timer::Generation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Forward,
    Backward,
}

impl SeekDirection {
    /// Sign applied to the seek step.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            SeekDirection::Forward => 1.0,
            SeekDirection::Backward => -1.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    token: Generation,
    visible: Option<SeekDirection>,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A seek happened in this direction.
    Show(SeekDirection),
    /// The clear timer armed with this token fired.
    Expired(u64),
    /// Hide immediately and invalidate pending clears.
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Schedule the clear guarded by this token.
    ScheduleClear(u64),
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Show(direction) => {
                self.visible = Some(direction);
                Effect::ScheduleClear(self.token.bump())
            }
            Message::Expired(token) => {
                if self.token.is_current(token) {
                    self.visible = None;
                }
                Effect::None
            }
            Message::Clear => {
                self.visible = None;
                self.token.bump();
                Effect::None
            }
        }
    }

    /// Direction currently displayed, if any.
    #[must_use]
    pub fn visible(&self) -> Option<SeekDirection> {
        self.visible
    }
}
