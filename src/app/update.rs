// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All handlers run to completion synchronously; the only deferred work is
//! the file dialog task and the window-mode switch returned to the runtime.

use super::{App, Message, Modal};
use crate::deck::Deck;
use crate::input::{self, Action};
use crate::ui::{controls, help_dialog, slide_panel, zoom_dialog};
use iced::keyboard;
use iced::{window, Task};
use std::path::Path;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::RawEvent {
            window,
            event,
            captured,
        } => {
            app.window_id = Some(window);
            handle_raw_event(app, &event, captured)
        }
        Message::Controls(msg) => handle_controls(app, msg),
        Message::SlidePanel(slide_panel::Message::FigureActivated(payload)) => {
            app.modal = Modal::ImageZoom(payload);
            Task::none()
        }
        Message::Help(help_dialog::Message::ClosePressed)
        | Message::Zoom(zoom_dialog::Message::ClosePressed)
        | Message::ModalBackdropPressed => {
            app.modal = Modal::None;
            Task::none()
        }
        Message::FileDropped(path) => {
            open_deck(app, &path);
            Task::none()
        }
        Message::OpenDeckDialogResult(Some(path)) => {
            open_deck(app, &path);
            Task::none()
        }
        Message::OpenDeckDialogResult(None) => Task::none(),
    }
}

/// Handles clicks on the controls bar.
fn handle_controls(app: &mut App, message: controls::Message) -> Task<Message> {
    match message {
        controls::Message::PreviousPressed => {
            let write = app.cursor.previous();
            publish_location(app, write);
            Task::none()
        }
        controls::Message::NextPressed => {
            let write = app.cursor.next();
            publish_location(app, write);
            Task::none()
        }
        controls::Message::OpenDeckPressed => pick_deck_task(),
        controls::Message::FullscreenPressed => {
            toggle_fullscreen(&mut app.fullscreen, app.window_id.as_ref())
        }
        controls::Message::HelpPressed => {
            app.modal = Modal::Help;
            Task::none()
        }
    }
}

/// Routes raw runtime events: key presses become dispatcher actions.
fn handle_raw_event(app: &mut App, event: &iced::Event, captured: bool) -> Task<Message> {
    if let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event {
        if let Some(action) = input::action_for_key(key, *modifiers, captured) {
            return apply_action(app, action);
        }
    }
    Task::none()
}

/// Applies a dispatcher action to the app state.
fn apply_action(app: &mut App, action: Action) -> Task<Message> {
    match action {
        Action::NextSlide => {
            let write = app.cursor.next();
            publish_location(app, write);
            Task::none()
        }
        Action::PreviousSlide => {
            let write = app.cursor.previous();
            publish_location(app, write);
            Task::none()
        }
        Action::FirstSlide => {
            let write = app.cursor.first();
            publish_location(app, write);
            Task::none()
        }
        Action::LastSlide => {
            let write = app.cursor.last();
            publish_location(app, write);
            Task::none()
        }
        Action::ToggleFullscreen => toggle_fullscreen(&mut app.fullscreen, app.window_id.as_ref()),
        Action::OpenHelp => {
            app.modal = Modal::Help;
            Task::none()
        }
        Action::Dismiss => {
            if app.modal != Modal::None {
                app.modal = Modal::None;
                Task::none()
            } else if app.fullscreen {
                set_fullscreen_mode(&mut app.fullscreen, app.window_id.as_ref(), false)
            } else {
                Task::none()
            }
        }
    }
}

/// Mirrors a fragment write into the app location. Rewriting the current
/// value is a no-op by construction.
fn publish_location(app: &mut App, write: Option<String>) {
    if let Some(fragment) = write {
        app.location = fragment;
    }
}

/// Loads a deck handed to the app at runtime (file drop or open dialog).
///
/// A deck that fails to load leaves the current one in place; the failure is
/// noted on stderr only.
fn open_deck(app: &mut App, path: &Path) {
    match Deck::load(path) {
        Ok(deck) => {
            app.install_deck(deck, path.parent().map(Path::to_path_buf), None);
        }
        Err(err) => {
            eprintln!("Failed to load deck {}: {}", path.display(), err);
        }
    }
}

/// Opens the async deck picker.
fn pick_deck_task() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Deck", &["toml"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenDeckDialogResult,
    )
}

/// Toggles fullscreen for the tracked window.
fn toggle_fullscreen(fullscreen: &mut bool, window_id: Option<&window::Id>) -> Task<Message> {
    let desired = !*fullscreen;
    set_fullscreen_mode(fullscreen, window_id, desired)
}

/// Switches the window mode. Before the window id is known the request is a
/// silent no-op, mirroring the absent-backend recovery path.
fn set_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}

#[cfg(test)]
mod tests {
    use super::super::tests::app_with_slides;
    use super::*;
    use crate::ui::zoom_dialog::ZoomPayload;
    use iced::keyboard::{key::Named, Key, Modifiers};
    use std::path::PathBuf;

    fn key_event(key: Key) -> iced::Event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    fn press(app: &mut App, key: Key, captured: bool) {
        let _ = update(
            app,
            Message::RawEvent {
                window: window::Id::unique(),
                event: key_event(key),
                captured,
            },
        );
    }

    #[test]
    fn next_button_advances_and_publishes_location() {
        let mut app = app_with_slides(5);
        let _ = update(&mut app, Message::Controls(controls::Message::NextPressed));
        assert_eq!(app.cursor.index(), 1);
        assert_eq!(app.location, "#2");
    }

    #[test]
    fn previous_button_at_first_slide_is_a_no_op() {
        let mut app = app_with_slides(5);
        let _ = update(
            &mut app,
            Message::Controls(controls::Message::PreviousPressed),
        );
        assert_eq!(app.cursor.index(), 0);
        assert_eq!(app.location, "#1");
    }

    #[test]
    fn raw_arrow_key_advances_cursor() {
        let mut app = app_with_slides(5);
        press(&mut app, Key::Named(Named::ArrowRight), false);
        assert_eq!(app.cursor.index(), 1);
        assert_eq!(app.location, "#2");
    }

    #[test]
    fn captured_space_does_not_advance() {
        let mut app = app_with_slides(5);
        press(&mut app, Key::Named(Named::Space), true);
        assert_eq!(app.cursor.index(), 0);
    }

    #[test]
    fn uncaptured_space_advances() {
        let mut app = app_with_slides(5);
        press(&mut app, Key::Named(Named::Space), false);
        assert_eq!(app.cursor.index(), 1);
    }

    #[test]
    fn home_and_end_jump() {
        let mut app = app_with_slides(5);
        press(&mut app, Key::Named(Named::End), false);
        assert_eq!(app.cursor.index(), 4);
        press(&mut app, Key::Named(Named::Home), false);
        assert_eq!(app.cursor.index(), 0);
    }

    #[test]
    fn help_key_opens_help_modal() {
        let mut app = app_with_slides(3);
        press(&mut app, Key::Character("?".into()), false);
        assert_eq!(app.modal, Modal::Help);
    }

    #[test]
    fn escape_closes_modal_before_anything_else() {
        let mut app = app_with_slides(3);
        app.modal = Modal::Help;
        press(&mut app, Key::Named(Named::Escape), false);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn figure_activation_opens_zoom_modal() {
        let mut app = app_with_slides(3);
        let payload = ZoomPayload {
            source: PathBuf::from("diagram.svg"),
            caption: "A diagram".to_string(),
        };
        let _ = update(
            &mut app,
            Message::SlidePanel(slide_panel::Message::FigureActivated(payload.clone())),
        );
        assert_eq!(app.modal, Modal::ImageZoom(payload));
    }

    #[test]
    fn backdrop_press_closes_any_modal() {
        let mut app = app_with_slides(3);
        app.modal = Modal::ImageZoom(ZoomPayload {
            source: PathBuf::from("diagram.svg"),
            caption: String::new(),
        });
        let _ = update(&mut app, Message::ModalBackdropPressed);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn dialog_close_buttons_close_their_modal() {
        let mut app = app_with_slides(3);
        app.modal = Modal::Help;
        let _ = update(&mut app, Message::Help(help_dialog::Message::ClosePressed));
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn navigation_keys_do_not_touch_modal_state() {
        let mut app = app_with_slides(3);
        app.modal = Modal::Help;
        press(&mut app, Key::Named(Named::ArrowRight), false);
        assert_eq!(app.modal, Modal::Help);
        assert_eq!(app.cursor.index(), 1);
    }

    #[test]
    fn fullscreen_toggle_without_window_is_a_no_op() {
        let mut fullscreen = false;
        let _ = toggle_fullscreen(&mut fullscreen, None);
        assert!(!fullscreen);
    }

    #[test]
    fn cancelled_open_dialog_changes_nothing() {
        let mut app = app_with_slides(3);
        let _ = update(&mut app, Message::OpenDeckDialogResult(None));
        assert_eq!(app.cursor.count(), 3);
    }

    #[test]
    fn dropped_unreadable_deck_keeps_current_deck() {
        let mut app = app_with_slides(3);
        let _ = update(
            &mut app,
            Message::FileDropped(PathBuf::from("/no/such/deck.toml")),
        );
        assert_eq!(app.cursor.count(), 3);
    }
}
