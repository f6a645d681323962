// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcut table.
//!
//! | Key                  | Command                      |
//! |----------------------|------------------------------|
//! | Space                | Toggle play/pause            |
//! | Right, `l`, `L`      | Seek forward one step        |
//! | Left, `j`, `J`       | Seek backward one step       |
//! | Up / Down            | Volume up / down             |
//! | `m`, `M`             | Toggle mute                  |
//! | `0`–`9`              | Jump to 0 %–90 % of duration |

/// Keys the player distinguishes, independent of the windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Character(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePlayback,
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    /// Jump to `digit / 10` of the duration.
    JumpToTenth(u8),
}

/// Looks up the command bound to `key`.
#[must_use]
pub fn command_for(key: Key) -> Option<Command> {
    match key {
        Key::Space => Some(Command::TogglePlayback),
        Key::ArrowRight | Key::Character('l' | 'L') => Some(Command::SeekForward),
        Key::ArrowLeft | Key::Character('j' | 'J') => Some(Command::SeekBackward),
        Key::ArrowUp => Some(Command::VolumeUp),
        Key::ArrowDown => Some(Command::VolumeDown),
        Key::Character('m' | 'M') => Some(Command::ToggleMute),
        Key::Character(c) => c
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .map(Command::JumpToTenth),
    }
}
