// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::player;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Player(player::Message),
    /// A keyboard event routed from the window. `captured` is set when a
    /// text input consumed it.
    Key {
        window: window::Id,
        key: player::Key,
        captured: bool,
    },
    FileHovered(window::Id),
    FilesHoveredLeft(window::Id),
    /// A file was dropped on the window.
    FileDropped(window::Id, PathBuf),
    /// The URL input text changed.
    UrlInputChanged(String),
    /// Load the URL input into the player.
    LoadUrl,
    /// Open the file picker.
    OpenFileDialog,
    /// Result from the file picker.
    OpenFileDialogResult(Option<PathBuf>),
    /// Periodic position refresh while playing.
    Tick,
    /// Leave fullscreen (Escape).
    ExitFullscreen(window::Id),
    /// Hide the startup warning banner.
    DismissWarning,
    WindowOpened(window::Id),
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional video URL or path to load on startup.
    pub source: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_REEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
