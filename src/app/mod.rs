// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the deck, the navigation cursor, and the
//! two modal dialogs, and translates messages into cursor moves or side
//! effects like fullscreen switches. Policy decisions (window sizing, deck
//! fallback, location mirroring) live close to the main update loop so the
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::deck::{Deck, Slide};
use crate::fragment;
use crate::i18n::fluent::I18n;
use crate::navigation::Cursor;
use crate::ui::theming::ThemeMode;
use crate::ui::zoom_dialog::ZoomPayload;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// The dialog currently shown above the slide area, if any.
///
/// Both dialogs are independent of the cursor; opening or closing one never
/// moves it. The zoom payload is built right before opening and dropped on
/// close.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    Help,
    ImageZoom(ZoomPayload),
}

/// Root Iced application state bridging the deck, cursor, and dialogs.
pub struct App {
    pub i18n: I18n,
    deck: Deck,
    /// Directory of the loaded deck file, for resolving figure sources.
    deck_dir: Option<PathBuf>,
    cursor: Cursor,
    /// Location mirror: the fragment of the active slide, e.g. `"#3"`.
    /// Updated on every user-initiated navigation; idempotent on rewrites.
    location: String,
    modal: Modal,
    fullscreen: bool,
    window_id: Option<window::Id>,
    theme_mode: ThemeMode,
    show_progress: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("slide", &self.cursor.counter_text())
            .field("location", &self.location)
            .field("modal", &self.modal)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// The deck shown when no deck was given or loading failed: a single slide
/// pointing at the open/help affordances. Keeps the cursor invariant (N >= 1)
/// without surfacing an error.
fn welcome_deck(i18n: &I18n) -> Deck {
    let slide = Slide {
        title: Some(i18n.tr("welcome-slide-title")),
        body: vec![
            i18n.tr("welcome-slide-line-open"),
            i18n.tr("welcome-slide-line-help"),
        ],
        figure: None,
    };
    Deck::new(Some(i18n.tr("welcome-deck-title")), vec![slide])
        .expect("welcome deck has one slide")
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let deck = welcome_deck(&i18n);
        let cursor = Cursor::new(deck.len());
        let location = cursor.fragment();
        Self {
            i18n,
            deck,
            deck_dir: None,
            cursor,
            location,
            modal: Modal::None,
            fullscreen: false,
            window_id: None,
            theme_mode: ThemeMode::System,
            show_progress: true,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    ///
    /// A deck argument may carry a `#<N>` fragment; the cursor syncs from it
    /// once the deck is loaded. A missing or invalid deck degrades silently
    /// to the welcome deck.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode.unwrap_or_default();
        app.show_progress = config.show_progress.unwrap_or(true);

        if let Some(target) = flags.deck {
            let (path_part, frag) = fragment::split_target(&target);
            let path = PathBuf::from(path_part);
            match Deck::load(&path) {
                Ok(deck) => {
                    app.install_deck(deck, path.parent().map(Path::to_path_buf), frag);
                }
                Err(err) => {
                    eprintln!("Failed to load deck {}: {}", path.display(), err);
                }
            }
        }

        (app, Task::none())
    }

    /// Replaces the deck and re-derives all cursor-dependent state.
    fn install_deck(&mut self, deck: Deck, deck_dir: Option<PathBuf>, frag: Option<&str>) {
        self.cursor = Cursor::new(deck.len());
        self.cursor.sync_from_fragment(frag);
        self.location = self.cursor.fragment();
        self.deck = deck;
        self.deck_dir = deck_dir;
        self.modal = Modal::None;
    }

    fn title(&self) -> String {
        let deck_title = self
            .deck
            .title()
            .map(String::from)
            .unwrap_or_else(|| self.i18n.tr("app-name"));

        let slide = self.deck.slide(self.cursor.index());
        let slide_title = match &slide.title {
            Some(title) => title.clone(),
            None => self.i18n.tr_with(
                "slide-fallback-title",
                &[("ordinal", self.cursor.ordinal().to_string())],
            ),
        };

        format!("{slide_title} - {deck_title}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn app_with_slides(count: usize) -> App {
        let slides = (0..count)
            .map(|i| Slide {
                title: Some(format!("Slide title {}", i + 1)),
                body: vec![format!("Body {}", i + 1)],
                figure: None,
            })
            .collect();
        let deck = Deck::new(Some("Test deck".to_string()), slides).expect("non-empty");
        let mut app = App::default();
        app.install_deck(deck, None, None);
        app
    }

    #[test]
    fn default_app_holds_welcome_deck() {
        let app = App::default();
        assert_eq!(app.deck.len(), 1);
        assert_eq!(app.cursor.count(), 1);
        assert_eq!(app.location, "#1");
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn install_deck_resets_cursor_and_location() {
        let mut app = app_with_slides(4);
        app.cursor.last();
        let deck = welcome_deck(&app.i18n);
        app.install_deck(deck, None, None);
        assert_eq!(app.cursor.index(), 0);
        assert_eq!(app.location, "#1");
    }

    #[test]
    fn install_deck_honors_fragment() {
        let mut app = App::default();
        let slides = vec![
            Slide {
                title: None,
                body: Vec::new(),
                figure: None,
            };
            5
        ];
        let deck = Deck::new(None, slides).expect("non-empty");
        app.install_deck(deck, None, Some("3"));
        assert_eq!(app.cursor.index(), 2);
        assert_eq!(app.location, "#3");
    }

    #[test]
    fn title_uses_slide_and_deck_titles() {
        let app = app_with_slides(2);
        assert_eq!(app.title(), "Slide title 1 - Test deck");
    }

    #[test]
    fn title_falls_back_for_untitled_slides() {
        let mut app = App::default();
        let deck = Deck::new(
            None,
            vec![Slide {
                title: None,
                body: Vec::new(),
                figure: None,
            }],
        )
        .expect("non-empty");
        app.install_deck(deck, None, None);
        let title = app.title();
        assert!(title.contains('1'));
    }
}
