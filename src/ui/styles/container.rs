// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius};
use iced::widget::container;
use iced::{Border, Color, Shadow, Theme, Vector};

/// Style for the bottom controls bar.
pub fn controls_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for a dialog surface floating above the backdrop.
pub fn dialog_surface(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}
