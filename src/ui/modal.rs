// SPDX-License-Identifier: MPL-2.0
//! Modal overlay helper.
//!
//! Stacks a dialog surface above the base view behind a dimmed backdrop.
//! A click on the backdrop emits `on_backdrop`; the dialog content is opaque,
//! so clicks on it never reach the backdrop handler.

use crate::ui::styles::overlay;
use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::Element;

pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_backdrop: Message,
) -> Element<'a, Message> {
    stack([
        base.into(),
        opaque(
            mouse_area(center(opaque(dialog)).style(|_theme| container::Style {
                background: Some(overlay::backdrop_color().into()),
                ..container::Style::default()
            }))
            .on_press(on_backdrop),
        ),
    ])
    .into()
}
