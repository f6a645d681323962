// SPDX-License-Identifier: MPL-2.0
//! Timer identities and guard values.
//!
//! The player never sleeps. It asks its host to schedule a [`Timer`] and,
//! when the timer comes back, compares the guard it carries against the
//! latest one issued. A stale guard makes the firing a no-op, so a lost
//! cancellation can never act on newer state.

/// Timer slots; scheduling a kind replaces the pending timer of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Click,
    AutoHide,
    SeekOverlay,
}

impl TimerKind {
    pub const ALL: [TimerKind; 3] = [TimerKind::Click, TimerKind::AutoHide, TimerKind::SeekOverlay];
}

/// A scheduled timer together with its guard captured at scheduling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Single-click disambiguation window; guarded by the click token.
    Click(u64),
    /// Controls auto-hide; guarded by the interaction stamp.
    AutoHide(u64),
    /// Seek indicator lifetime; guarded by the overlay token.
    SeekOverlay(u64),
}

impl Timer {
    #[must_use]
    pub fn kind(self) -> TimerKind {
        match self {
            Timer::Click(_) => TimerKind::Click,
            Timer::AutoHide(_) => TimerKind::AutoHide,
            Timer::SeekOverlay(_) => TimerKind::SeekOverlay,
        }
    }
}

/// Monotonic guard counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Issues a new guard, invalidating every earlier one.
    pub fn bump(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    #[must_use]
    pub fn current(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn is_current(self, guard: u64) -> bool {
        self.0 == guard
    }
}
