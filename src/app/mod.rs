// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the video player.
//!
//! The `App` struct owns the player, the parent page state (selected video,
//! URL input) and the runtime plumbing (pending timers, fullscreen, window
//! id). Player effects are translated into Iced tasks in [`update`].

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::media::{ClockMedia, ObjectUrlRegistry, UploadedFile};
use crate::player::{self, Settings, Volume};
use crate::ui::theming::ThemeMode;
use config::Config;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    player: player::State,
    timers: update::Timers,
    theme_mode: ThemeMode,
    /// The uploaded file shown in the heading.
    selected: Option<UploadedFile>,
    url_input: String,
    /// Startup warning (i18n key), shown until dismissed.
    warning: Option<String>,
    fullscreen: bool,
    window_id: Option<window::Id>,
    /// Config directory override for preference writes.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("player", &self.player)
            .field("selected", &self.selected.as_ref().map(|file| &file.name))
            .field("fullscreen", &self.fullscreen)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;
pub const MIN_WINDOW_WIDTH: f32 = 560.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        // Closing goes through `App::update` so timers and URLs are released.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config and builds the application from it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        Self::with_config(flags, &config, warning, None)
    }

    /// Builds the application from an already loaded config.
    fn with_config(
        flags: Flags,
        config: &Config,
        warning: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        tracing::debug!(locale = %i18n.current_locale(), "translations loaded");
        let settings = Settings::from_config(&config.player);
        let volume = config.player.volume.map(Volume::new).unwrap_or_default();
        let muted = config.player.muted.unwrap_or(false);

        let mut player = player::State::new(settings, Box::new(ObjectUrlRegistry::new()))
            .with_preferences(volume, muted);
        let boot_effects = player.attach_media(Box::new(ClockMedia::new()));

        let mut app = App {
            i18n,
            player,
            timers: update::Timers::default(),
            theme_mode: config.general.theme_mode,
            selected: None,
            url_input: String::new(),
            warning,
            fullscreen: false,
            window_id: None,
            config_dir,
        };

        let mut tasks = vec![update::apply_effects(&mut app.update_context(), boot_effects)];
        if let Some(source) = flags.source {
            tracing::info!(%source, "loading startup source");
            app.url_input.clone_from(&source);
            tasks.push(update::handle_player_message(
                &mut app.update_context(),
                player::Message::SetExternalUrl(source),
            ));
        }

        (app, Task::batch(tasks))
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            player: &mut self.player,
            timers: &mut self.timers,
            selected: &mut self.selected,
            url_input: &mut self.url_input,
            fullscreen: &mut self.fullscreen,
            window_id: &mut self.window_id,
            config_dir: self.config_dir.as_ref(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.player.source_name() {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(!self.player.is_paused()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Player(message) => {
                update::handle_player_message(&mut self.update_context(), message)
            }
            Message::Key {
                window,
                key,
                captured,
            } => {
                self.window_id = Some(window);
                update::handle_player_message(
                    &mut self.update_context(),
                    player::Message::KeyPressed { key, captured },
                )
            }
            Message::FileHovered(window) => {
                self.window_id = Some(window);
                update::handle_player_message(&mut self.update_context(), player::Message::FileHovered)
            }
            Message::FilesHoveredLeft(window) => {
                self.window_id = Some(window);
                update::handle_player_message(
                    &mut self.update_context(),
                    player::Message::FileHoverLeft,
                )
            }
            Message::FileDropped(window, path) => {
                self.window_id = Some(window);
                update::handle_local_file(&mut self.update_context(), path, true)
            }
            Message::UrlInputChanged(value) => {
                self.url_input = value;
                Task::none()
            }
            Message::LoadUrl => {
                let url = self.url_input.clone();
                update::handle_player_message(
                    &mut self.update_context(),
                    player::Message::SetExternalUrl(url),
                )
            }
            Message::OpenFileDialog => {
                update::handle_open_file_dialog(self.i18n.tr("file-dialog-filter-videos"))
            }
            Message::OpenFileDialogResult(Some(path)) => {
                update::handle_local_file(&mut self.update_context(), path, false)
            }
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::Tick => {
                update::handle_player_message(&mut self.update_context(), player::Message::Tick)
            }
            Message::ExitFullscreen(window) => {
                self.window_id = Some(window);
                update::update_fullscreen_mode(&mut self.fullscreen, Some(&window), false)
            }
            Message::DismissWarning => {
                self.warning = None;
                Task::none()
            }
            Message::WindowOpened(window) => {
                self.window_id = Some(window);
                Task::none()
            }
            Message::WindowCloseRequested(window) => {
                let effects = self.player.unmount();
                let cleanup = update::apply_effects(&mut self.update_context(), effects);
                self.timers.cancel_all();
                cleanup.chain(window::close(window))
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            player: &self.player,
            selected: self.selected.as_ref(),
            url_input: &self.url_input,
            warning: self.warning.as_deref(),
            fullscreen: self.fullscreen,
        })
    }
}
