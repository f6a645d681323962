// SPDX-License-Identifier: MPL-2.0
//! Update logic and effect handling for the application.
//!
//! Player effects become Iced tasks here: timers are abortable sleeps keyed
//! by [`TimerKind`], fullscreen goes through `window::set_mode`, and
//! preference changes are persisted.

use super::{persistence, Message};
use crate::media::{mime, UploadedFile};
use crate::player::{self, Effect, TimerKind};
use iced::task::Handle;
use iced::{window, Task};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Pending timer tasks. Handles abort their task when dropped.
#[derive(Default)]
pub struct Timers {
    handles: HashMap<TimerKind, Handle>,
}

impl fmt::Debug for Timers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handles.keys()).finish()
    }
}

impl Timers {
    /// Schedules `timer`, aborting the pending timer of the same kind.
    pub fn schedule(&mut self, timer: player::Timer, delay: Duration) -> Task<Message> {
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::Player(player::Message::TimerFired(timer)),
        )
        .abortable();

        if let Some(previous) = self.handles.insert(timer.kind(), handle.abort_on_drop()) {
            previous.abort();
        }
        task
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        if let Some(handle) = self.handles.remove(&kind) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.handles.contains_key(&kind)
    }
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub player: &'a mut player::State,
    pub timers: &'a mut Timers,
    pub selected: &'a mut Option<UploadedFile>,
    pub url_input: &'a mut String,
    pub fullscreen: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
    pub config_dir: Option<&'a PathBuf>,
}

/// Forwards `message` to the player and carries out its effects.
pub fn handle_player_message(ctx: &mut UpdateContext<'_>, message: player::Message) -> Task<Message> {
    let effects = ctx.player.handle(message);
    apply_effects(ctx, effects)
}

pub fn apply_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let mut tasks = Vec::new();

    for effect in effects {
        match effect {
            Effect::Schedule { timer, delay } => tasks.push(ctx.timers.schedule(timer, delay)),
            Effect::Cancel(kind) => ctx.timers.cancel(kind),
            Effect::VideoUploaded(file) => {
                *ctx.selected = Some(file);
            }
            Effect::VideoRemoved => {
                *ctx.selected = None;
                ctx.url_input.clear();
            }
            Effect::ToggleFullscreen => {
                let desired = !*ctx.fullscreen;
                tasks.push(update_fullscreen_mode(
                    ctx.fullscreen,
                    ctx.window_id.as_ref(),
                    desired,
                ));
            }
            Effect::PreferencesChanged { volume, muted } => {
                persistence::persist_audio_preferences(volume, muted, ctx.config_dir.cloned());
            }
        }
    }

    Task::batch(tasks)
}

/// Updates fullscreen mode to the desired state.
pub fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        tracing::debug!("fullscreen requested before the window was known");
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}

/// Describes a dropped or picked file and hands it to the player.
pub fn handle_local_file(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    dropped: bool,
) -> Task<Message> {
    match UploadedFile::from_path(&path) {
        Ok(file) => {
            let message = if dropped {
                player::Message::FileDropped(file)
            } else {
                player::Message::FileSelected(file)
            };
            handle_player_message(ctx, message)
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "cannot read selected file");
            if dropped {
                handle_player_message(ctx, player::Message::FileHoverLeft)
            } else {
                Task::none()
            }
        }
    }
}

/// Opens the native file picker filtered to video extensions.
pub fn handle_open_file_dialog(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, mime::VIDEO_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}
