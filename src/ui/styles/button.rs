// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::radius;
use iced::widget::button;
use iced::{Border, Theme};

/// Style for the navigation/control bar buttons: quiet until hovered.
pub fn control(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.color,
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

/// Style for the primary action in dialogs (close buttons).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        _ => palette.primary.base.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
