// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Windowed mode shows the heading, the source bar (URL input, Load and
//! Open buttons) and the player. Fullscreen shows the player alone.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::media::UploadedFile;
use crate::player;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::player_view;
use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub player: &'a player::State,
    pub selected: Option<&'a UploadedFile>,
    pub url_input: &'a str,
    pub warning: Option<&'a str>,
    pub fullscreen: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let player_view = player_view::view(
        player_view::ViewContext {
            i18n: ctx.i18n,
            fullscreen: ctx.fullscreen,
        },
        ctx.player,
    )
    .map(Message::Player);

    if ctx.fullscreen {
        return player_view;
    }

    let mut content = column![heading(&ctx), source_bar(&ctx)]
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(key) = ctx.warning {
        content = content.push(warning_banner(ctx.i18n, key));
    }

    content
        .push(
            container(player_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn heading<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = match ctx.selected {
        Some(file) => ctx
            .i18n
            .tr_with_args("heading-now-playing", &[("name", file.name.as_str())]),
        None => ctx.i18n.tr("heading-no-video"),
    };
    text(label).size(typography::TITLE_MD).into()
}

fn source_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("source-url-placeholder"), ctx.url_input)
        .on_input(Message::UrlInputChanged)
        .on_submit(Message::LoadUrl)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::URL_INPUT_WIDTH));

    let load = button(text(ctx.i18n.tr("source-button-load"))).on_press(Message::LoadUrl);
    let open = button(text(ctx.i18n.tr("source-button-open"))).on_press(Message::OpenFileDialog);

    row![input, load, Space::new().width(Length::Fill), open]
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .into()
}

fn warning_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    row![
        text(i18n.tr(key)).size(typography::BODY),
        Space::new().width(Length::Fill),
        button(text(i18n.tr("warning-dismiss")).size(typography::CAPTION))
            .on_press(Message::DismissWarning),
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center)
    .into()
}
