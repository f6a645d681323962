// SPDX-License-Identifier: MPL-2.0
//! Video playback controls bar.
//!
//! Play/pause, scrub slider, time display, mute toggle, volume slider,
//! fullscreen toggle and remove.

use crate::app::i18n::fluent::I18n;
use crate::player::{self, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, row, slider, text, tooltip, Text};
use iced::{Alignment, Element, Length};

/// Scrub slider resolution, in percent.
const SCRUB_STEP_PERCENT: f32 = 0.1;
const VOLUME_STEP: f32 = 0.01;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub fullscreen: bool,
}

pub fn view<'a>(ctx: &ViewContext<'a>, player: &'a player::State) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let paused = player.is_paused();

    let play_label = if paused {
        i18n.tr("player-button-play")
    } else {
        i18n.tr("player-button-pause")
    };
    let play_button = control_button(play_label, Message::TogglePlayback, false);

    let scrub = slider(0.0..=100.0, player.progress_percent(), Message::Scrub)
        .step(SCRUB_STEP_PERCENT)
        .width(Length::Fill);

    let time_display = text(format!(
        "{} / {}",
        format_time(player.current_time()),
        format_time(player.duration())
    ))
    .size(typography::CAPTION);

    let muted = player.is_muted();
    let mute_label = if muted {
        i18n.tr("player-button-unmute")
    } else {
        i18n.tr("player-button-mute")
    };
    let mute_button = control_button(mute_label, Message::ToggleMute, muted);

    let volume = slider(0.0..=1.0, player.volume().value(), Message::VolumeChanged)
        .step(VOLUME_STEP)
        .on_release(Message::VolumeReleased)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH));

    let fullscreen_label = if ctx.fullscreen {
        i18n.tr("player-button-exit-fullscreen")
    } else {
        i18n.tr("player-button-fullscreen")
    };
    let fullscreen_button =
        control_button(fullscreen_label, Message::ToggleFullscreen, ctx.fullscreen);

    let remove_button = tooltip(
        control_button(i18n.tr("player-button-remove"), Message::RemoveVideo, false),
        Text::new(i18n.tr("player-tooltip-remove")),
        tooltip::Position::Top,
    )
    .gap(spacing::XXS);

    let controls = row![
        play_button,
        scrub,
        time_display,
        mute_button,
        volume,
        fullscreen_button,
        remove_button,
    ]
    .spacing(spacing::XS)
    .padding(spacing::XS)
    .align_y(Alignment::Center);

    container(controls)
        .width(Length::Fill)
        .style(styles::overlay::controls_bar)
        .into()
}

fn control_button<'a>(label: String, on_press: Message, active: bool) -> Element<'a, Message> {
    let base = button(text(label).size(typography::BODY))
        .on_press(on_press)
        .padding([spacing::XXS, spacing::XS])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    if active {
        base.style(styles::button::selected).into()
    } else {
        base.style(styles::button::overlay).into()
    }
}

/// Formats seconds as `MM:SS`, or `HH:MM:SS` from one hour on.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let secs = seconds as u64;
        secs
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
