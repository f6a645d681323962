// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and window events (file hover/drop, close
//! requests) to top-level messages. Pointer events are handled by the
//! player surface widgets instead.

use super::Message;
use crate::player;
use iced::keyboard::{self, key::Named};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Position refresh interval while playing.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: Event, status: event::Status, window_id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(window::Event::Opened { .. }) => Some(Message::WindowOpened(window_id)),
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered(window_id)),
        Event::Window(window::Event::FilesHoveredLeft) => {
            Some(Message::FilesHoveredLeft(window_id))
        }
        Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(window_id, path))
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if key == keyboard::Key::Named(Named::Escape) {
                return Some(Message::ExitFullscreen(window_id));
            }
            // Leave shortcuts with modifiers to the platform.
            if modifiers.control() || modifiers.alt() || modifiers.logo() {
                return None;
            }
            to_player_key(&key).map(|key| Message::Key {
                window: window_id,
                key,
                captured: status == event::Status::Captured,
            })
        }
        _ => None,
    }
}

/// Maps an Iced key to the keys the player distinguishes.
#[must_use]
pub fn to_player_key(key: &keyboard::Key) -> Option<player::Key> {
    match key {
        keyboard::Key::Named(Named::Space) => Some(player::Key::Space),
        keyboard::Key::Named(Named::ArrowLeft) => Some(player::Key::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(player::Key::ArrowRight),
        keyboard::Key::Named(Named::ArrowUp) => Some(player::Key::ArrowUp),
        keyboard::Key::Named(Named::ArrowDown) => Some(player::Key::ArrowDown),
        keyboard::Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(' '), None) => Some(player::Key::Space),
                (Some(c), None) => Some(player::Key::Character(c)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Ticks while media is playing so the time display and scrub bar advance.
pub fn create_tick_subscription(is_playing: bool) -> Subscription<Message> {
    if is_playing {
        time::every(TICK_INTERVAL).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}
