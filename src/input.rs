// SPDX-License-Identifier: MPL-2.0
//! Keyboard dispatch for the presenter.
//!
//! Translates key presses into navigation or dialog actions. The mapping is
//! a pure function so it can be tested without a running event loop; the app
//! shell feeds it raw keyboard events together with the widget-capture
//! status from the subscription.

use iced::keyboard::{key::Named, Key, Modifiers};

/// A discrete action produced by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NextSlide,
    PreviousSlide,
    FirstSlide,
    LastSlide,
    ToggleFullscreen,
    OpenHelp,
    /// Close an open dialog, or leave fullscreen when none is open.
    Dismiss,
}

/// Maps a key press to an action.
///
/// `widget_captured` is true when a focused widget already consumed the
/// event. Space doubles as the activation key for buttons, so a captured
/// Space performs no navigation; the control it activated handles it alone.
/// Letter chords with a command or alt modifier are left to the platform.
pub fn action_for_key(key: &Key, modifiers: Modifiers, widget_captured: bool) -> Option<Action> {
    match key {
        Key::Named(Named::Space) => {
            if widget_captured {
                None
            } else {
                Some(Action::NextSlide)
            }
        }
        Key::Named(Named::ArrowRight | Named::PageDown) => Some(Action::NextSlide),
        Key::Named(Named::ArrowLeft | Named::PageUp) => Some(Action::PreviousSlide),
        Key::Named(Named::Home) => Some(Action::FirstSlide),
        Key::Named(Named::End) => Some(Action::LastSlide),
        Key::Named(Named::Escape) => Some(Action::Dismiss),
        Key::Character(c) if !modifiers.command() && !modifiers.alt() => match c.as_str() {
            "f" | "F" => Some(Action::ToggleFullscreen),
            "?" | "h" | "H" => Some(Action::OpenHelp),
            _ => None,
        },
        _ => None,
    }
}
