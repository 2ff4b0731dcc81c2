// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::controls;
use crate::ui::help_dialog;
use crate::ui::slide_panel;
use crate::ui::zoom_dialog;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    SlidePanel(slide_panel::Message),
    Help(help_dialog::Message),
    Zoom(zoom_dialog::Message),
    /// The backdrop of an open dialog was clicked.
    ModalBackdropPressed,
    /// A raw runtime event routed by the subscription, together with whether
    /// a widget already captured it.
    RawEvent {
        window: window::Id,
        event: iced::Event,
        captured: bool,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from the open deck dialog.
    OpenDeckDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional deck path to preload on startup, with an optional `#<N>`
    /// fragment naming the starting slide (e.g. `talk.toml#3`).
    pub deck: Option<String>,
}
