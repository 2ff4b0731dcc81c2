// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal backdrop and badge indicators.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Color of the dimmed backdrop behind modal dialogs.
#[must_use]
pub fn backdrop_color() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..BLACK
    }
}

/// Generic style for overlay indicators like the slide counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
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

/// Style for the key badges in the help dialog.
pub fn key_badge(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.strong.color.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
