// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Black backdrop behind the video.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Dashed-looking drop target; highlighted while a file hovers the window.
pub fn drop_zone(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let (border_color, fill) = if highlighted {
            (
                palette::PRIMARY_500,
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_400
                },
            )
        } else {
            (extended.background.strong.color, Color::TRANSPARENT)
        };
        container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}
