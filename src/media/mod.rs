// SPDX-License-Identifier: MPL-2.0
//! Media playback seams.
//!
//! The player component never touches a decoder or the filesystem directly.
//! It drives a [`MediaElement`] (transport, position, volume) and asks a
//! [`MediaHost`] for object URLs standing in for uploaded files.
//!
//! The default implementations are [`ClockMedia`], a clock-driven element
//! that probes container durations, and [`ObjectUrlRegistry`].

pub mod clock;
pub mod host;
pub mod mime;
pub mod probe;

pub use clock::ClockMedia;
pub use host::ObjectUrlRegistry;

use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Notifications queued by a media element, drained with
/// [`MediaElement::take_events`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback started.
    Play,
    /// Playback paused, by request or because the end was reached.
    Pause,
    /// Playback reached the end of the media.
    Ended,
    /// The playback position changed (seconds).
    TimeUpdate(f64),
    /// The known duration changed (seconds, `NaN` when unknown).
    DurationChange(f64),
}

/// Transport and audio controls of a playable element.
///
/// Mirrors the subset of an HTML media element the player relies on.
/// Durations are `NaN` while unknown.
pub trait MediaElement {
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, secs: f64);
    fn duration(&self) -> f64;
    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);

    /// Replaces the current source; `None` unloads the element.
    fn load(&mut self, source: Option<&MediaSource>);

    /// Drains events queued since the last call.
    fn take_events(&mut self) -> Vec<MediaEvent>;
}

/// Object URL lifecycle and URL resolution.
pub trait MediaHost {
    /// Allocates a new URL referring to `file`.
    fn create_object_url(&mut self, file: &UploadedFile) -> ObjectUrl;

    /// Releases a URL previously returned by `create_object_url`.
    fn revoke_object_url(&mut self, url: &ObjectUrl);

    /// Maps a URL to a local file, if it refers to one.
    fn resolve(&self, url: &str) -> Option<PathBuf>;
}

/// Opaque handle for an uploaded file, e.g. `blob:iced-reel/3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source handed to [`MediaElement::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    /// URL the source was selected by.
    pub url: String,
    /// Local file backing the URL, when the host could resolve one.
    pub path: Option<PathBuf>,
}

impl MediaSource {
    #[must_use]
    pub fn new(url: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            url: url.into(),
            path,
        }
    }

    /// Short human-readable name: the file name when known, else the last
    /// URL segment.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self
            .path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
        {
            return name.to_string();
        }
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(&self.url)
            .to_string()
    }
}

/// A file chosen by the user through the picker or drag-and-drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: &'static str,
    pub size: u64,
}

impl UploadedFile {
    /// Describes the file at `path`, deriving its MIME type from the extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let size = std::fs::metadata(&path)?.len();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime::from_path(&path);
        Ok(Self {
            path,
            name,
            mime,
            size,
        })
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        mime::is_video(self.mime)
    }
}
