// SPDX-License-Identifier: MPL-2.0
//! Deck model and loader.
//!
//! A deck is an ordered, immutable-after-load sequence of slide panels read
//! from a TOML file. Every deck holds at least one slide; the loader rejects
//! empty decks so the navigation cursor always has a valid range to move in.
//!
//! Deck file format:
//!
//! ```toml
//! title = "AI Tech Training"
//!
//! [[slides]]
//! title = "Welcome"
//! body = ["First line", "Second line"]
//!
//! [slides.figure]
//! source = "diagrams/architecture.svg"
//! caption = "System architecture"
//! ```

use crate::error::{DeckError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension eligible for the image zoom dialog.
const ZOOMABLE_EXTENSION: &str = ".svg";

/// A figure attached to a slide: an image source plus an optional caption.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Figure {
    pub source: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl Figure {
    /// Caption shown in the zoom dialog; empty string when the figure has none.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }

    /// Resolves the figure source against the deck file's directory.
    pub fn resolved_source(&self, deck_dir: Option<&Path>) -> PathBuf {
        let path = Path::new(&self.source);
        match deck_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Returns the resolved source when this figure is eligible for the zoom
    /// dialog, i.e. its path ends in the vector-image extension.
    ///
    /// The check is case-insensitive and ignores a trailing `?query` or
    /// `#fragment` suffix. Embedded `data:` sources and empty sources are
    /// never eligible; they are skipped without error.
    pub fn zoom_source(&self, deck_dir: Option<&Path>) -> Option<PathBuf> {
        let trimmed = self.source.trim();
        if trimmed.is_empty() || trimmed.to_ascii_lowercase().starts_with("data:") {
            return None;
        }

        let path_part = trimmed
            .split_once(['?', '#'])
            .map_or(trimmed, |(path, _)| path);
        if !path_part.to_ascii_lowercase().ends_with(ZOOMABLE_EXTENSION) {
            return None;
        }

        let stripped = Figure {
            source: path_part.to_string(),
            caption: self.caption.clone(),
        };
        Some(stripped.resolved_source(deck_dir))
    }
}

/// One presented panel: an optional title, body lines, and an optional figure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub figure: Option<Figure>,
}

/// An ordered sequence of slides, fixed once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    title: Option<String>,
    slides: Vec<Slide>,
}

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    slides: Vec<Slide>,
}

impl Deck {
    /// Builds a deck from already-parsed parts. Fails on an empty slide list.
    pub fn new(title: Option<String>, slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::Empty.into());
        }
        Ok(Self { title, slides })
    }

    /// Loads and validates a deck from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| DeckError::Unreadable(e.to_string()))?;
        let file: DeckFile =
            toml::from_str(&content).map_err(|e| DeckError::Invalid(e.to_string()))?;
        Self::new(file.title, file.slides)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// A deck is never empty; this exists to pair with `len` per convention.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn slide(&self, index: usize) -> &Slide {
        &self.slides[index]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_deck(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create deck file");
        file.write_all(content.as_bytes())
            .expect("failed to write deck file");
        path
    }

    fn figure(source: &str, caption: Option<&str>) -> Figure {
        Figure {
            source: source.to_string(),
            caption: caption.map(String::from),
        }
    }

    #[test]
    fn load_parses_titles_bodies_and_figures() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_deck(
            temp_dir.path(),
            "deck.toml",
            r#"
title = "Demo"

[[slides]]
title = "Intro"
body = ["Hello"]

[[slides]]
body = ["No title here"]

[slides.figure]
source = "diagram.svg"
caption = "A diagram"
"#,
        );

        let deck = Deck::load(&path).expect("load failed");
        assert_eq!(deck.title(), Some("Demo"));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slide(0).title.as_deref(), Some("Intro"));
        assert_eq!(deck.slide(1).title, None);
        let fig = deck.slide(1).figure.as_ref().expect("figure missing");
        assert_eq!(fig.source, "diagram.svg");
        assert_eq!(fig.caption_text(), "A diagram");
    }

    #[test]
    fn load_rejects_deck_without_slides() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_deck(temp_dir.path(), "deck.toml", "title = \"Empty\"\n");

        let err = Deck::load(&path).expect_err("empty deck should fail");
        assert!(format!("{}", err).contains("no slides"));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_deck(temp_dir.path(), "deck.toml", "slides = not toml");

        assert!(Deck::load(&path).is_err());
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = Deck::load(Path::new("/no/such/deck.toml")).expect_err("should fail");
        assert!(format!("{}", err).contains("could not be read"));
    }

    #[test]
    fn new_requires_at_least_one_slide() {
        assert!(Deck::new(None, Vec::new()).is_err());
    }

    #[test]
    fn zoom_source_accepts_vector_extension() {
        let fig = figure("diagram.svg", None);
        assert_eq!(fig.zoom_source(None), Some(PathBuf::from("diagram.svg")));
    }

    #[test]
    fn zoom_source_is_case_insensitive() {
        let fig = figure("DIAGRAM.SVG", None);
        assert!(fig.zoom_source(None).is_some());
    }

    #[test]
    fn zoom_source_ignores_query_suffix() {
        let fig = figure("diagram.svg?v=1", None);
        assert_eq!(fig.zoom_source(None), Some(PathBuf::from("diagram.svg")));
    }

    #[test]
    fn zoom_source_rejects_raster_images() {
        let fig = figure("photo.png", None);
        assert_eq!(fig.zoom_source(None), None);
    }

    #[test]
    fn zoom_source_skips_data_uris() {
        let fig = figure("data:image/svg+xml;base64,AAAA", None);
        assert_eq!(fig.zoom_source(None), None);
    }

    #[test]
    fn zoom_source_skips_empty_source() {
        let fig = figure("   ", None);
        assert_eq!(fig.zoom_source(None), None);
    }

    #[test]
    fn zoom_source_resolves_relative_to_deck_dir() {
        let fig = figure("img/diagram.svg", None);
        let resolved = fig.zoom_source(Some(Path::new("/decks/demo")));
        assert_eq!(resolved, Some(PathBuf::from("/decks/demo/img/diagram.svg")));
    }

    #[test]
    fn resolved_source_keeps_absolute_paths() {
        let fig = figure("/abs/diagram.svg", None);
        let resolved = fig.resolved_source(Some(Path::new("/decks/demo")));
        assert_eq!(resolved, PathBuf::from("/abs/diagram.svg"));
    }

    #[test]
    fn caption_text_defaults_to_empty_string() {
        let fig = figure("diagram.svg", None);
        assert_eq!(fig.caption_text(), "");
        let with_caption = figure("diagram.svg", Some("Caption"));
        assert_eq!(with_caption.caption_text(), "Caption");
    }
}
