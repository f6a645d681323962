// SPDX-License-Identifier: MPL-2.0
//! Video surface: drop target, playback surface and overlays.
//!
//! The surface reports clicks, double clicks, pointer moves and the
//! pointer leaving to the player. Double clicks carry the last known pointer
//! position and the surface width so the player can pick a skip zone.

use crate::app::i18n::fluent::I18n;
use crate::player::{self, Message, SeekDirection};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::video_controls;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{column, container, mouse_area, responsive, text, Space, Stack};
use iced::{Element, Length, Size};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub fullscreen: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>, player: &'a player::State) -> Element<'a, Message> {
    if !player.has_source() {
        return drop_zone(&ctx, player);
    }
    responsive(move |size: Size| surface(&ctx, player, size)).into()
}

fn drop_zone<'a>(ctx: &ViewContext<'a>, player: &'a player::State) -> Element<'a, Message> {
    let hint = column![
        text(ctx.i18n.tr("drop-zone-title")).size(typography::TITLE_MD),
        text(ctx.i18n.tr("drop-zone-hint")).size(typography::BODY),
    ]
    .spacing(spacing::XS)
    .align_x(Horizontal::Center);

    container(hint)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .style(styles::container::drop_zone(player.is_drag_over()))
        .into()
}

fn surface<'a>(ctx: &ViewContext<'a>, player: &'a player::State, size: Size) -> Element<'a, Message> {
    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop(ctx, player));

    if let Some(direction) = player.seek_indicator() {
        stack = stack.push(seek_indicator(ctx, direction, player.settings().seek_step_secs));
    }

    if player.controls_visible() {
        let controls = video_controls::view(
            &video_controls::ViewContext {
                i18n: ctx.i18n,
                fullscreen: ctx.fullscreen,
            },
            player,
        );
        // Presses on the bar itself must not reach the surface.
        let controls = mouse_area(controls).on_press(Message::PointerEntered);
        stack = stack.push(
            column![Space::new().height(Length::Fill), controls]
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    if player.is_drag_over() {
        stack = stack.push(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::drop_zone(true)),
        );
    }

    let width = size.width;
    let x = player.pointer_x().unwrap_or(width / 2.0);

    mouse_area(
        container(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::surface),
    )
    .on_press(Message::SurfaceClicked)
    .on_double_click(Message::SurfaceDoubleClicked { x, width })
    .on_move(|point| Message::PointerMoved { x: point.x })
    .on_enter(Message::PointerEntered)
    .on_exit(Message::PointerLeft)
    .into()
}

/// Source name, with a large play glyph while paused.
fn backdrop<'a>(ctx: &ViewContext<'a>, player: &'a player::State) -> Element<'a, Message> {
    let name = player
        .source_name()
        .unwrap_or_else(|| ctx.i18n.tr("player-unknown-source"));

    let mut content = column![].spacing(spacing::MD).align_x(Horizontal::Center);
    if player.is_paused() {
        content = content.push(
            container(text("▶").size(typography::GLYPH_XL))
                .padding([spacing::SM, spacing::LG])
                .style(styles::overlay::indicator(radius::FULL)),
        );
    }
    content = content.push(text(name).size(typography::BODY));

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn seek_indicator<'a>(
    ctx: &ViewContext<'a>,
    direction: SeekDirection,
    step_secs: f64,
) -> Element<'a, Message> {
    let seconds = format!("{step_secs:.0}");
    let (label, align) = match direction {
        SeekDirection::Forward => (
            ctx.i18n
                .tr_with_args("player-seek-forward", &[("seconds", seconds.as_str())]),
            Horizontal::Right,
        ),
        SeekDirection::Backward => (
            ctx.i18n
                .tr_with_args("player-seek-backward", &[("seconds", seconds.as_str())]),
            Horizontal::Left,
        ),
    };

    let badge = container(text(label).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::overlay::indicator(radius::MD));

    container(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(align)
        .align_y(Vertical::Center)
        .into()
}
