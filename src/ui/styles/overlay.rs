// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the controls bar and transient indicators.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scrim() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Rounded badge used for the seek indicator and the paused glyph.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scrim())),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Bar along the bottom edge holding the playback controls.
#[must_use]
pub fn controls_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scrim())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}
