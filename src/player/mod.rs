// SPDX-License-Identifier: MPL-2.0
//! Video player component.
//!
//! [`State`] owns the source selection, the controls state machine, the
//! click gesture disambiguator and the seek indicator. It is driven by
//! [`Message`]s and answers with [`Effect`]s; timers and fullscreen are
//! carried out by the host application.
//!
//! The media element is optional and attached after construction; every
//! playback operation is a no-op without one.

pub mod controls;
pub mod gesture;
pub mod keyboard;
pub mod seek_overlay;
mod settings;
pub mod source;
pub mod timer;
mod volume;

#[cfg(test)]
pub(crate) mod testing;

pub use controls::UiState;
pub use keyboard::{Command, Key};
pub use seek_overlay::SeekDirection;
pub use settings::Settings;
pub use timer::{Timer, TimerKind};
pub use volume::Volume;

use crate::media::{MediaElement, MediaEvent, MediaHost, UploadedFile};
use std::fmt;
use std::time::{Duration, Instant};

/// Messages for the video player.
#[derive(Debug, Clone)]
pub enum Message {
    /// Primary click on the video surface.
    SurfaceClicked,
    /// Double click at `x` pixels from the left edge of a surface `width` wide.
    SurfaceDoubleClicked { x: f32, width: f32 },
    PointerMoved { x: f32 },
    PointerEntered,
    PointerLeft,
    /// `captured` is set when a focused text input already consumed the key.
    KeyPressed { key: Key, captured: bool },
    /// Play/pause button.
    TogglePlayback,
    /// Scrub slider moved, in percent of the duration.
    Scrub(f32),
    /// Volume slider dragged. Preferences are reported on release.
    VolumeChanged(f32),
    VolumeReleased,
    ToggleMute,
    ToggleFullscreen,
    FileHovered,
    FileHoverLeft,
    FileDropped(UploadedFile),
    FileSelected(UploadedFile),
    SetExternalUrl(String),
    RemoveVideo,
    TimerFired(Timer),
    /// Periodic refresh of the playback position while playing.
    Tick,
}

/// Side effects requested by the player.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Schedule `timer`, replacing any pending timer of the same kind.
    Schedule { timer: Timer, delay: Duration },
    Cancel(TimerKind),
    /// A valid video file was accepted.
    VideoUploaded(UploadedFile),
    /// The current video was removed.
    VideoRemoved,
    ToggleFullscreen,
    /// Volume or mute changed and should be persisted.
    PreferencesChanged { volume: f32, muted: bool },
}

pub struct State {
    settings: Settings,
    host: Box<dyn MediaHost>,
    media: Option<Box<dyn MediaElement>>,
    source: source::State,
    controls: controls::State,
    gesture: gesture::State,
    seek_overlay: seek_overlay::State,
    volume: Volume,
    muted: bool,
    /// Displayed position and duration (seconds, 0 when unknown).
    current_time: f64,
    duration: f64,
    drag_over: bool,
    pointer_x: Option<f32>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("ui_state", &self.controls.ui_state())
            .field("source", &self.source.effective_url())
            .field("has_media", &self.media.is_some())
            .field("current_time", &self.current_time)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(settings: Settings, host: Box<dyn MediaHost>) -> Self {
        Self {
            gesture: gesture::State::new(settings.click_delay, settings.skip_zone_ratio),
            settings,
            host,
            media: None,
            source: source::State::default(),
            controls: controls::State::default(),
            seek_overlay: seek_overlay::State::default(),
            volume: Volume::default(),
            muted: false,
            current_time: 0.0,
            duration: 0.0,
            drag_over: false,
            pointer_x: None,
        }
    }

    /// Restores persisted volume and mute.
    #[must_use]
    pub fn with_preferences(mut self, volume: Volume, muted: bool) -> Self {
        self.volume = volume;
        self.muted = muted;
        self.apply_audio();
        self
    }

    /// Attaches the media element and loads the current source into it.
    pub fn attach_media(&mut self, media: Box<dyn MediaElement>) -> Vec<Effect> {
        self.media = Some(media);
        self.apply_audio();
        let mut effects = Vec::new();
        if self.source.effective_url().is_some() {
            self.load_effective_source();
        }
        self.sync_media(&mut effects);
        effects
    }

    /// Cancels pending timers and releases the uploaded file.
    pub fn unmount(&mut self) -> Vec<Effect> {
        self.gesture.handle(gesture::Message::Reset);
        self.seek_overlay.handle(seek_overlay::Message::Clear);
        self.source.release_upload(self.host.as_mut());
        TimerKind::ALL.into_iter().map(Effect::Cancel).collect()
    }

    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        self.handle_at(msg, Instant::now())
    }

    /// Handles `msg` as if it arrived at `now`.
    pub fn handle_at(&mut self, msg: Message, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        match msg {
            Message::SurfaceClicked => {
                self.interaction(now, &mut effects);
                if let gesture::Effect::ScheduleClick(token) =
                    self.gesture.handle(gesture::Message::Click)
                {
                    effects.push(Effect::Schedule {
                        timer: Timer::Click(token),
                        delay: self.settings.click_delay,
                    });
                }
            }
            Message::SurfaceDoubleClicked { x, width } => {
                self.interaction(now, &mut effects);
                self.double_click(x, width, now, &mut effects);
            }
            Message::PointerMoved { x } => {
                self.pointer_x = Some(x);
                self.interaction(now, &mut effects);
            }
            Message::PointerEntered => self.interaction(now, &mut effects),
            Message::PointerLeft => {
                self.pointer_x = None;
                self.apply_controls(controls::Message::PointerLeft, &mut effects);
            }
            Message::KeyPressed { key, captured } => {
                if captured {
                    return effects;
                }
                if let Some(command) = keyboard::command_for(key) {
                    self.interaction(now, &mut effects);
                    self.execute(command, &mut effects);
                }
            }
            Message::TogglePlayback => {
                self.interaction(now, &mut effects);
                self.toggle_playback();
            }
            Message::Scrub(percent) => {
                self.interaction(now, &mut effects);
                self.scrub(percent);
            }
            Message::VolumeChanged(volume) => {
                self.interaction(now, &mut effects);
                self.set_volume(Volume::new(volume), true);
            }
            Message::VolumeReleased => effects.push(self.preferences()),
            Message::ToggleMute => {
                self.interaction(now, &mut effects);
                self.toggle_mute(&mut effects);
            }
            Message::ToggleFullscreen => {
                self.interaction(now, &mut effects);
                effects.push(Effect::ToggleFullscreen);
            }
            Message::FileHovered => self.drag_over = true,
            Message::FileHoverLeft => self.drag_over = false,
            Message::FileDropped(file) => {
                self.drag_over = false;
                self.select_file(file, &mut effects);
            }
            Message::FileSelected(file) => self.select_file(file, &mut effects),
            Message::SetExternalUrl(url) => self.set_external_url(&url),
            Message::RemoveVideo => self.remove_video(&mut effects),
            Message::TimerFired(timer) => self.timer_fired(timer, now, &mut effects),
            Message::Tick => {}
        }

        self.sync_media(&mut effects);
        effects
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn ui_state(&self) -> UiState {
        self.controls.ui_state()
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls.ui_state().controls_visible()
    }

    #[must_use]
    pub fn last_interaction(&self) -> Option<Instant> {
        self.controls.last_interaction()
    }

    #[must_use]
    pub fn seek_indicator(&self) -> Option<SeekDirection> {
        self.seek_overlay.visible()
    }

    #[must_use]
    pub fn effective_url(&self) -> Option<&str> {
        self.source.effective_url()
    }

    #[must_use]
    pub fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.source.uploaded_file()
    }

    /// Short name of the effective source for display.
    #[must_use]
    pub fn source_name(&self) -> Option<String> {
        if let Some(file) = self.source.uploaded_file() {
            return Some(file.name.clone());
        }
        self.source
            .media_source(self.host.as_ref())
            .map(|source| source.display_name())
    }

    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source.effective_url().is_some()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.media.as_ref().is_none_or(|media| media.is_paused())
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Playback position in percent of the duration, for the scrub slider.
    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        if self.duration > 0.0 {
            #[allow(clippy::cast_possible_truncation)]
            let percent = (self.current_time / self.duration * 100.0).clamp(0.0, 100.0) as f32;
            percent
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    #[must_use]
    pub fn pointer_x(&self) -> Option<f32> {
        self.pointer_x
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn interaction(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        self.apply_controls(controls::Message::Interaction(now), effects);
    }

    fn apply_controls(&mut self, msg: controls::Message, effects: &mut Vec<Effect>) {
        match self.controls.handle(msg) {
            controls::Effect::ArmAutoHide(stamp) => effects.push(Effect::Schedule {
                timer: Timer::AutoHide(stamp),
                delay: self.settings.auto_hide_delay,
            }),
            controls::Effect::CancelAutoHide => effects.push(Effect::Cancel(TimerKind::AutoHide)),
            controls::Effect::None => {}
        }
    }

    /// Drains media events into the controls state and displayed times.
    fn sync_media(&mut self, effects: &mut Vec<Effect>) {
        let events = match self.media.as_mut() {
            Some(media) => media.take_events(),
            None => return,
        };
        for event in events {
            match event {
                MediaEvent::Play => {
                    self.apply_controls(controls::Message::PlaybackStarted, effects);
                }
                MediaEvent::Pause | MediaEvent::Ended => {
                    if self.controls.ui_state().is_playing() {
                        self.apply_controls(controls::Message::PlaybackStopped, effects);
                    }
                }
                MediaEvent::TimeUpdate(secs) => {
                    if secs.is_finite() {
                        self.current_time = secs.max(0.0);
                    }
                }
                MediaEvent::DurationChange(secs) => {
                    self.duration = if is_known_duration(secs) { secs } else { 0.0 };
                }
            }
        }
    }

    fn execute(&mut self, command: Command, effects: &mut Vec<Effect>) {
        match command {
            Command::TogglePlayback => self.toggle_playback(),
            Command::SeekForward => self.seek_by(SeekDirection::Forward, effects),
            Command::SeekBackward => self.seek_by(SeekDirection::Backward, effects),
            Command::VolumeUp => {
                self.set_volume(self.volume.increase(), true);
                effects.push(self.preferences());
            }
            Command::VolumeDown => {
                self.set_volume(self.volume.decrease(), false);
                effects.push(self.preferences());
            }
            Command::ToggleMute => self.toggle_mute(effects),
            Command::JumpToTenth(digit) => self.jump_to_fraction(f64::from(digit) / 10.0),
        }
    }

    fn toggle_playback(&mut self) {
        if let Some(media) = self.media.as_mut() {
            if media.is_paused() {
                media.play();
            } else {
                media.pause();
            }
        }
    }

    fn restore_paused(&mut self, paused: bool) {
        if let Some(media) = self.media.as_mut() {
            if paused && !media.is_paused() {
                media.pause();
            } else if !paused && media.is_paused() {
                media.play();
            }
        }
    }

    fn double_click(&mut self, x: f32, width: f32, now: Instant, effects: &mut Vec<Effect>) {
        let gesture::Effect::DoubleClick {
            cancel_pending,
            restore_paused,
            seek,
        } = self.gesture.handle(gesture::Message::DoubleClick { x, width, at: now })
        else {
            return;
        };

        if cancel_pending {
            effects.push(Effect::Cancel(TimerKind::Click));
        }
        if let Some(paused) = restore_paused {
            self.restore_paused(paused);
        }
        if let Some(direction) = seek {
            self.seek_by(direction, effects);
        }
    }

    fn timer_fired(&mut self, timer: Timer, now: Instant, effects: &mut Vec<Effect>) {
        match timer {
            Timer::Click(token) => {
                let paused = self.is_paused();
                let effect = self.gesture.handle(gesture::Message::TimerElapsed {
                    token,
                    paused,
                    at: now,
                });
                if effect == gesture::Effect::TogglePlayback {
                    self.toggle_playback();
                }
            }
            Timer::AutoHide(stamp) => {
                self.apply_controls(controls::Message::AutoHideElapsed(stamp), effects);
            }
            Timer::SeekOverlay(token) => {
                self.seek_overlay
                    .handle(seek_overlay::Message::Expired(token));
            }
        }
    }

    /// Duration of the attached media, if known and positive.
    fn known_duration(&self) -> Option<f64> {
        self.media
            .as_ref()
            .map(|media| media.duration())
            .filter(|duration| is_known_duration(*duration))
    }

    fn seek_to(&mut self, secs: f64) {
        if let Some(media) = self.media.as_mut() {
            media.set_current_time(secs);
            self.current_time = secs;
        }
    }

    fn seek_by(&mut self, direction: SeekDirection, effects: &mut Vec<Effect>) {
        let Some(duration) = self.known_duration() else {
            return;
        };
        let Some(position) = self.media.as_ref().map(|media| media.current_time()) else {
            return;
        };
        let target = (position + direction.sign() * self.settings.seek_step_secs).clamp(0.0, duration);
        self.seek_to(target);

        if let seek_overlay::Effect::ScheduleClear(token) = self
            .seek_overlay
            .handle(seek_overlay::Message::Show(direction))
        {
            effects.push(Effect::Schedule {
                timer: Timer::SeekOverlay(token),
                delay: self.settings.seek_overlay_duration,
            });
        }
    }

    fn jump_to_fraction(&mut self, fraction: f64) {
        if let Some(duration) = self.known_duration() {
            self.seek_to(duration * fraction);
        }
    }

    fn scrub(&mut self, percent: f32) {
        if !percent.is_finite() {
            return;
        }
        let fraction = f64::from(percent.clamp(0.0, 100.0)) / 100.0;
        self.jump_to_fraction(fraction);
    }

    fn set_volume(&mut self, volume: Volume, unmute: bool) {
        self.volume = volume;
        if unmute && !volume.is_silent() {
            self.muted = false;
        }
        self.apply_audio();
    }

    fn toggle_mute(&mut self, effects: &mut Vec<Effect>) {
        self.muted = !self.muted;
        self.apply_audio();
        effects.push(self.preferences());
    }

    fn apply_audio(&mut self) {
        if let Some(media) = self.media.as_mut() {
            media.set_volume(self.volume.value());
            media.set_muted(self.muted);
        }
    }

    fn preferences(&self) -> Effect {
        Effect::PreferencesChanged {
            volume: self.volume.value(),
            muted: self.muted,
        }
    }

    fn load_effective_source(&mut self) {
        let source = self.source.media_source(self.host.as_ref());
        self.current_time = 0.0;
        self.duration = 0.0;
        if let Some(media) = self.media.as_mut() {
            media.load(source.as_ref());
            if self.settings.autoplay && source.is_some() {
                media.play();
            }
        }
    }

    fn select_file(&mut self, file: UploadedFile, effects: &mut Vec<Effect>) {
        if !file.is_video() {
            tracing::debug!(name = %file.name, mime = file.mime, "rejected non-video file");
            return;
        }
        tracing::info!(name = %file.name, size = file.size, "video selected");

        self.source.replace_upload(file.clone(), self.host.as_mut());
        self.load_effective_source();
        effects.push(Effect::VideoUploaded(file));
    }

    fn set_external_url(&mut self, url: &str) {
        if self.source.set_external(url) {
            tracing::info!(url = self.source.external_url(), "external source changed");
            self.load_effective_source();
        }
    }

    fn remove_video(&mut self, effects: &mut Vec<Effect>) {
        if let Some(media) = self.media.as_mut() {
            media.pause();
            media.set_current_time(0.0);
            media.load(None);
        }
        // Reset events from the unload must not re-arm anything.
        if let Some(media) = self.media.as_mut() {
            media.take_events();
        }

        self.source.release_upload(self.host.as_mut());
        self.source.clear_external();
        self.apply_controls(controls::Message::Reset, effects);
        self.gesture.handle(gesture::Message::Reset);
        self.seek_overlay.handle(seek_overlay::Message::Clear);
        self.current_time = 0.0;
        self.duration = 0.0;
        self.pointer_x = None;

        effects.retain(|effect| !matches!(effect, Effect::Cancel(_)));
        effects.extend(TimerKind::ALL.into_iter().map(Effect::Cancel));
        effects.push(Effect::VideoRemoved);
        tracing::info!("video removed");
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.source.release_upload(self.host.as_mut());
    }
}

fn is_known_duration(secs: f64) -> bool {
    secs.is_finite() && secs > 0.0
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeMedia, FakeMediaState, HostLog, RecordingHost};
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    struct Harness {
        player: State,
        media: Rc<RefCell<FakeMediaState>>,
        host: Rc<RefCell<HostLog>>,
    }

    fn harness() -> Harness {
        let host = RecordingHost::default();
        let host_log = host.log();
        let media = FakeMedia::default();
        let media_state = media.state();
        let mut player = State::new(Settings::default(), Box::new(host));
        player.attach_media(Box::new(media));
        Harness {
            player,
            media: media_state,
            host: host_log,
        }
    }

    fn file(name: &str, mime: &'static str) -> UploadedFile {
        UploadedFile {
            path: PathBuf::from(format!("/videos/{name}")),
            name: name.to_string(),
            mime,
            size: 2048,
        }
    }

    /// Harness with a 120 s video loaded.
    fn loaded() -> Harness {
        let mut h = harness();
        h.player
            .handle(Message::FileSelected(file("clip.mp4", "video/mp4")));
        h
    }

    fn playing() -> (Harness, u64) {
        let mut h = loaded();
        let effects = h.player.handle(Message::TogglePlayback);
        (h, armed_stamp(&effects).expect("play arms auto-hide"))
    }

    fn armed_stamp(effects: &[Effect]) -> Option<u64> {
        effects.iter().rev().find_map(|effect| match effect {
            Effect::Schedule {
                timer: Timer::AutoHide(stamp),
                ..
            } => Some(*stamp),
            _ => None,
        })
    }

    fn click_token(effects: &[Effect]) -> Option<u64> {
        effects.iter().find_map(|effect| match effect {
            Effect::Schedule {
                timer: Timer::Click(token),
                ..
            } => Some(*token),
            _ => None,
        })
    }

    fn key(key: Key) -> Message {
        Message::KeyPressed {
            key,
            captured: false,
        }
    }

    // ---------------------------------------------------------------------
    // Source selection
    // ---------------------------------------------------------------------

    #[test]
    fn valid_video_gets_fresh_url_and_releases_previous_once() {
        let mut h = loaded();
        let first = h.host.borrow().created[0].clone();

        let effects = h
            .player
            .handle(Message::FileDropped(file("next.webm", "video/webm")));

        let log = h.host.borrow();
        assert_eq!(log.created.len(), 2);
        assert_eq!(log.revoked, vec![first]);
        assert_eq!(h.player.effective_url(), Some(log.created[1].as_str()));
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::VideoUploaded(f) if f.name == "next.webm")));
    }

    #[test]
    fn non_video_file_changes_nothing() {
        let mut h = loaded();
        let before = h.player.effective_url().map(str::to_string);

        let effects = h
            .player
            .handle(Message::FileSelected(file("photo.png", "image/png")));

        assert!(effects.is_empty());
        assert_eq!(h.player.effective_url().map(str::to_string), before);
        assert_eq!(h.host.borrow().created.len(), 1);
        assert_eq!(h.media.borrow().loads.len(), 1);
    }

    #[test]
    fn accepted_file_is_loaded_into_media() {
        let h = loaded();
        let media = h.media.borrow();
        let loaded = media.loads.last().cloned().flatten().expect("source loaded");
        assert_eq!(loaded.path, Some(PathBuf::from("/videos/clip.mp4")));
        assert_abs_diff_eq!(h.player.duration(), 120.0);
    }

    #[test]
    fn drop_clears_drag_over_even_when_rejected() {
        let mut h = harness();
        h.player.handle(Message::FileHovered);
        assert!(h.player.is_drag_over());

        h.player
            .handle(Message::FileDropped(file("notes.txt", "text/plain")));

        assert!(!h.player.is_drag_over());
        assert!(!h.player.has_source());
    }

    #[test]
    fn external_url_is_used_until_an_upload_arrives() {
        let mut h = harness();
        h.player
            .handle(Message::SetExternalUrl("https://example.com/intro.mp4".into()));
        assert_eq!(h.player.effective_url(), Some("https://example.com/intro.mp4"));
        assert_eq!(h.player.source_name().as_deref(), Some("intro.mp4"));

        h.player
            .handle(Message::FileSelected(file("clip.mp4", "video/mp4")));
        assert_eq!(h.player.source_name().as_deref(), Some("clip.mp4"));

        // Changing the external URL underneath an upload does not reload.
        let loads = h.media.borrow().loads.len();
        h.player
            .handle(Message::SetExternalUrl("https://example.com/other.mp4".into()));
        assert_eq!(h.media.borrow().loads.len(), loads);
    }

    #[test]
    fn autoplay_starts_playback_on_load() {
        let host = RecordingHost::default();
        let media = FakeMedia::default();
        let media_state = media.state();
        let settings = Settings {
            autoplay: true,
            ..Settings::default()
        };
        let mut player = State::new(settings, Box::new(host));
        player.attach_media(Box::new(media));

        player.handle(Message::FileSelected(file("clip.mp4", "video/mp4")));

        assert!(!media_state.borrow().paused);
        assert_eq!(player.ui_state(), UiState::PlayingControlsVisible);
    }

    // ---------------------------------------------------------------------
    // State machine
    // ---------------------------------------------------------------------

    #[test]
    fn play_and_pause_drive_ui_state() {
        let (mut h, stamp) = playing();
        assert_eq!(h.player.ui_state(), UiState::PlayingControlsVisible);

        h.player.handle(Message::TimerFired(Timer::AutoHide(stamp)));
        assert_eq!(h.player.ui_state(), UiState::PlayingControlsHidden);

        let effects = h.player.handle(Message::TogglePlayback);
        assert_eq!(h.player.ui_state(), UiState::Paused);
        assert_eq!(effects.last(), Some(&Effect::Cancel(TimerKind::AutoHide)));
    }

    #[test]
    fn interaction_suppresses_and_rearms_auto_hide() {
        let (mut h, first) = playing();
        let effects = h.player.handle(Message::PointerMoved { x: 40.0 });
        let second = armed_stamp(&effects).expect("re-armed");
        assert_ne!(first, second);

        h.player.handle(Message::TimerFired(Timer::AutoHide(first)));
        assert_eq!(h.player.ui_state(), UiState::PlayingControlsVisible);

        h.player.handle(Message::TimerFired(Timer::AutoHide(second)));
        assert_eq!(h.player.ui_state(), UiState::PlayingControlsHidden);

        h.player.handle(Message::PointerEntered);
        assert_eq!(h.player.ui_state(), UiState::PlayingControlsVisible);
    }

    #[test]
    fn pointer_leave_hides_controls_while_playing() {
        let (mut h, _) = playing();
        let effects = h.player.handle(Message::PointerLeft);
        assert_eq!(h.player.ui_state(), UiState::PlayingControlsHidden);
        assert_eq!(effects, vec![Effect::Cancel(TimerKind::AutoHide)]);
    }

    #[test]
    fn media_ending_returns_to_paused() {
        let (mut h, _) = playing();
        {
            let mut media = h.media.borrow_mut();
            media.paused = true;
            media.events.extend([MediaEvent::Pause, MediaEvent::Ended]);
        }
        let effects = h.player.handle(Message::Tick);
        assert_eq!(h.player.ui_state(), UiState::Paused);
        assert_eq!(effects, vec![Effect::Cancel(TimerKind::AutoHide)]);
    }

    // ---------------------------------------------------------------------
    // Gestures
    // ---------------------------------------------------------------------

    #[test]
    fn single_click_toggles_exactly_once_after_delay() {
        let mut h = loaded();
        let effects = h.player.handle(Message::SurfaceClicked);
        let token = click_token(&effects).expect("click timer scheduled");
        assert!(h.player.is_paused(), "no toggle before the delay");

        h.player.handle(Message::TimerFired(Timer::Click(token)));
        h.player.handle(Message::TimerFired(Timer::Click(token)));

        assert!(!h.player.is_paused());
        assert_eq!(h.media.borrow().play_calls, 1);
        assert_eq!(h.media.borrow().pause_calls, 0);
    }

    #[test]
    fn double_click_before_delay_seeks_without_toggling() {
        let mut h = loaded();
        h.media.borrow_mut().current_time = 30.0;
        let token = click_token(&h.player.handle(Message::SurfaceClicked)).unwrap();
        h.player.handle(Message::SurfaceClicked);

        let effects = h.player.handle(Message::SurfaceDoubleClicked {
            x: 390.0,
            width: 400.0,
        });
        h.player.handle(Message::TimerFired(Timer::Click(token)));

        assert!(effects.contains(&Effect::Cancel(TimerKind::Click)));
        assert!(h.player.is_paused());
        assert_eq!(h.media.borrow().play_calls, 0);
        assert_abs_diff_eq!(h.player.current_time(), 40.0);
        assert_eq!(h.player.seek_indicator(), Some(SeekDirection::Forward));
    }

    #[test]
    fn double_click_in_middle_does_not_seek() {
        let mut h = loaded();
        h.media.borrow_mut().current_time = 30.0;
        h.player.handle(Message::SurfaceClicked);

        h.player.handle(Message::SurfaceDoubleClicked {
            x: 200.0,
            width: 400.0,
        });

        assert_abs_diff_eq!(h.media.borrow().current_time, 30.0);
        assert_eq!(h.player.seek_indicator(), None);
    }

    #[test]
    fn late_double_click_reverts_racing_toggle() {
        let mut h = loaded();
        let start = Instant::now();
        let token = click_token(
            &h.player
                .handle_at(Message::SurfaceClicked, start),
        )
        .unwrap();
        h.player.handle_at(
            Message::TimerFired(Timer::Click(token)),
            start + Duration::from_millis(250),
        );
        assert!(!h.player.is_paused());

        h.player.handle_at(
            Message::SurfaceDoubleClicked { x: 5.0, width: 400.0 },
            start + Duration::from_millis(300),
        );

        assert!(h.player.is_paused());
        assert_eq!(h.player.ui_state(), UiState::Paused);
    }

    #[test]
    fn double_click_spanning_click_delay_keeps_play_state() {
        let mut h = loaded();
        let start = Instant::now();
        let token = click_token(&h.player.handle_at(Message::SurfaceClicked, start)).unwrap();
        h.player.handle_at(
            Message::TimerFired(Timer::Click(token)),
            start + Duration::from_millis(250),
        );
        assert!(!h.player.is_paused());

        // Second press inside the host's double click window.
        let second_press = start + Duration::from_millis(280);
        let effects = h.player.handle_at(Message::SurfaceClicked, second_press);
        let second = click_token(&effects).expect("second press arms a click");
        let effects = h.player.handle_at(
            Message::SurfaceDoubleClicked { x: 390.0, width: 400.0 },
            second_press,
        );
        h.player.handle_at(
            Message::TimerFired(Timer::Click(second)),
            second_press + Duration::from_millis(250),
        );

        assert!(effects.contains(&Effect::Cancel(TimerKind::Click)));
        assert!(h.player.is_paused());
        assert_eq!(h.player.ui_state(), UiState::Paused);
        assert_eq!(h.player.seek_indicator(), Some(SeekDirection::Forward));
    }

    // ---------------------------------------------------------------------
    // Seeking
    // ---------------------------------------------------------------------

    #[test]
    fn seeking_clamps_at_both_ends() {
        let mut h = loaded();
        h.media.borrow_mut().current_time = 4.0;
        h.player.handle(key(Key::ArrowLeft));
        assert_abs_diff_eq!(h.media.borrow().current_time, 0.0);

        h.media.borrow_mut().current_time = 115.0;
        h.player.handle(key(Key::Character('l')));
        assert_abs_diff_eq!(h.media.borrow().current_time, 120.0);
    }

    #[test]
    fn seek_without_known_duration_is_a_no_op() {
        let mut h = loaded();
        for duration in [f64::NAN, f64::INFINITY, 0.0, -1.0] {
            {
                let mut media = h.media.borrow_mut();
                media.duration = duration;
                media.current_time = 12.0;
            }
            let effects = h.player.handle(key(Key::ArrowRight));
            assert_abs_diff_eq!(h.media.borrow().current_time, 12.0);
            assert!(!effects
                .iter()
                .any(|e| matches!(e, Effect::Schedule { timer: Timer::SeekOverlay(_), .. })));
        }
    }

    #[test]
    fn stale_overlay_timer_keeps_newer_indicator() {
        let mut h = loaded();
        h.media.borrow_mut().current_time = 60.0;
        let token_of = |effects: &[Effect]| {
            effects.iter().find_map(|e| match e {
                Effect::Schedule {
                    timer: Timer::SeekOverlay(token),
                    delay,
                } => {
                    assert_eq!(*delay, Duration::from_millis(650));
                    Some(*token)
                }
                _ => None,
            })
        };

        let first = token_of(&h.player.handle(key(Key::ArrowRight))).unwrap();
        let second = token_of(&h.player.handle(key(Key::ArrowLeft))).unwrap();

        h.player
            .handle(Message::TimerFired(Timer::SeekOverlay(first)));
        assert_eq!(h.player.seek_indicator(), Some(SeekDirection::Backward));

        h.player
            .handle(Message::TimerFired(Timer::SeekOverlay(second)));
        assert_eq!(h.player.seek_indicator(), None);
    }

    #[test]
    fn digit_jumps_to_fraction_of_duration() {
        let mut h = loaded();
        h.player.handle(key(Key::Character('5')));
        assert_abs_diff_eq!(h.media.borrow().current_time, 60.0);
        assert_abs_diff_eq!(h.player.current_time(), 60.0);

        h.player.handle(key(Key::Character('0')));
        assert_abs_diff_eq!(h.media.borrow().current_time, 0.0);
    }

    #[test]
    fn digit_with_unknown_duration_keeps_position() {
        let mut h = loaded();
        {
            let mut media = h.media.borrow_mut();
            media.duration = f64::NAN;
            media.current_time = 7.0;
        }
        h.player.handle(key(Key::Character('5')));
        assert_abs_diff_eq!(h.media.borrow().current_time, 7.0);
    }

    #[test]
    fn scrub_maps_percent_to_position() {
        let mut h = loaded();
        h.player.handle(Message::Scrub(25.0));
        assert_abs_diff_eq!(h.media.borrow().current_time, 30.0);
        assert_abs_diff_eq!(h.player.progress_percent(), 25.0);

        h.player.handle(Message::Scrub(180.0));
        assert_abs_diff_eq!(h.media.borrow().current_time, 120.0);
    }

    #[test]
    fn scrub_without_media_is_a_no_op() {
        let mut player = State::new(Settings::default(), Box::new(RecordingHost::default()));
        player.handle(Message::Scrub(50.0));
        player.handle(key(Key::Space));
        assert_abs_diff_eq!(player.current_time(), 0.0);
        assert!(player.is_paused());
    }

    // ---------------------------------------------------------------------
    // Keyboard and audio
    // ---------------------------------------------------------------------

    #[test]
    fn keys_from_text_inputs_are_ignored() {
        let mut h = loaded();
        let effects = h.player.handle(Message::KeyPressed {
            key: Key::Space,
            captured: true,
        });
        assert!(effects.is_empty());
        assert!(h.player.is_paused());
        assert!(h.player.last_interaction().is_none());
    }

    #[test]
    fn space_toggles_and_counts_as_interaction() {
        let mut h = loaded();
        h.player.handle(key(Key::Space));
        assert!(!h.player.is_paused());
        assert!(h.player.last_interaction().is_some());
    }

    #[test]
    fn unbound_key_is_not_an_interaction() {
        let mut h = loaded();
        h.player.handle(key(Key::Character('q')));
        assert!(h.player.last_interaction().is_none());
    }

    #[test]
    fn volume_up_unmutes_and_reports_preferences() {
        let mut h = loaded();
        h.player.handle(Message::VolumeChanged(0.5));
        h.player.handle(key(Key::Character('m')));
        assert!(h.player.is_muted());
        assert!(h.media.borrow().muted);

        let effects = h.player.handle(key(Key::ArrowUp));

        assert!(!h.player.is_muted());
        assert_abs_diff_eq!(h.media.borrow().volume, 0.55, epsilon = 1e-6);
        assert!(effects.iter().any(
            |e| matches!(e, Effect::PreferencesChanged { muted: false, volume } if (*volume - 0.55).abs() < 1e-6)
        ));
    }

    #[test]
    fn volume_down_keeps_mute_and_clamps() {
        let mut h = loaded();
        h.player.handle(Message::VolumeChanged(0.03));
        h.player.handle(Message::ToggleMute);

        h.player.handle(key(Key::ArrowDown));

        assert!(h.player.is_muted());
        assert_abs_diff_eq!(h.player.volume().value(), 0.0);
    }

    #[test]
    fn volume_slider_above_zero_unmutes() {
        let mut h = loaded();
        h.player.handle(Message::ToggleMute);
        h.player.handle(Message::VolumeChanged(0.0));
        assert!(h.player.is_muted());

        h.player.handle(Message::VolumeChanged(0.2));
        assert!(!h.player.is_muted());
    }

    #[test]
    fn volume_drag_reports_preferences_on_release() {
        let mut h = loaded();
        for volume in [0.9, 0.6, 0.4] {
            let effects = h.player.handle(Message::VolumeChanged(volume));
            assert!(!effects
                .iter()
                .any(|e| matches!(e, Effect::PreferencesChanged { .. })));
        }
        assert_abs_diff_eq!(h.media.borrow().volume, 0.4, epsilon = 1e-6);

        let effects = h.player.handle(Message::VolumeReleased);
        assert_eq!(
            effects,
            vec![Effect::PreferencesChanged {
                volume: 0.4,
                muted: false
            }]
        );
    }

    #[test]
    fn preferences_are_applied_on_attach() {
        let media = FakeMedia::default();
        let state = media.state();
        let mut player = State::new(Settings::default(), Box::new(RecordingHost::default()))
            .with_preferences(Volume::new(0.3), true);
        player.attach_media(Box::new(media));

        assert_abs_diff_eq!(state.borrow().volume, 0.3);
        assert!(state.borrow().muted);
    }

    #[test]
    fn fullscreen_toggle_is_forwarded() {
        let mut h = loaded();
        let effects = h.player.handle(Message::ToggleFullscreen);
        assert!(effects.contains(&Effect::ToggleFullscreen));
    }

    // ---------------------------------------------------------------------
    // Removal and teardown
    // ---------------------------------------------------------------------

    #[test]
    fn removal_resets_everything() {
        let (mut h, _) = playing();
        h.player.handle(Message::Scrub(50.0));
        h.player.handle(key(Key::ArrowRight));
        let url = h.host.borrow().created[0].clone();

        let effects = h.player.handle(Message::RemoveVideo);

        assert_eq!(h.player.ui_state(), UiState::Paused);
        assert!(!h.player.has_source());
        assert_abs_diff_eq!(h.player.current_time(), 0.0);
        assert_abs_diff_eq!(h.player.duration(), 0.0);
        assert!(h.player.last_interaction().is_none());
        assert_eq!(h.player.seek_indicator(), None);
        assert_eq!(h.host.borrow().revoked, vec![url]);

        let media = h.media.borrow();
        assert!(media.paused);
        assert_eq!(media.loads.last(), Some(&None));
        for kind in TimerKind::ALL {
            assert!(effects.contains(&Effect::Cancel(kind)));
        }
        assert_eq!(effects.last(), Some(&Effect::VideoRemoved));
    }

    #[test]
    fn unmount_cancels_timers_and_releases_url() {
        let mut h = loaded();
        let effects = h.player.unmount();
        assert_eq!(effects.len(), TimerKind::ALL.len());
        assert_eq!(h.host.borrow().live_count(), 0);

        drop(h.player);
        assert_eq!(h.host.borrow().revoked.len(), 1, "released exactly once");
    }

    #[test]
    fn dropping_player_releases_live_url() {
        let h = loaded();
        let log = Rc::clone(&h.host);
        drop(h);
        assert_eq!(log.borrow().live_count(), 0);
        assert_eq!(log.borrow().revoked.len(), 1);
    }
}
