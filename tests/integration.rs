// SPDX-License-Identifier: MPL-2.0
use podium::config::{self, Config};
use podium::deck::Deck;
use podium::fragment;
use podium::i18n::fluent::I18n;
use podium::navigation::Cursor;
use podium::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: Some(ThemeMode::System),
        show_progress: Some(true),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: Some(ThemeMode::System),
        show_progress: Some(true),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_deck_argument_deep_link_flow() {
    // A deck argument like `talk.toml#3` splits into a path and a fragment,
    // and the cursor syncs to the named slide after the deck loads.
    let dir = tempdir().expect("Failed to create temporary directory");
    let deck_path = dir.path().join("talk.toml");
    fs::write(
        &deck_path,
        r#"
title = "Integration talk"

[[slides]]
title = "One"

[[slides]]
title = "Two"

[[slides]]
title = "Three"
"#,
    )
    .expect("Failed to write deck file");

    let target = format!("{}#3", deck_path.display());
    let (path_part, frag) = fragment::split_target(&target);

    let deck = Deck::load(std::path::Path::new(path_part)).expect("Failed to load deck");
    assert_eq!(deck.len(), 3);

    let mut cursor = Cursor::new(deck.len());
    cursor.sync_from_fragment(frag);
    assert_eq!(cursor.index(), 2);
    assert_eq!(cursor.counter_text(), "3 / 3");

    // Out-of-range and malformed fragments fall back to the first slide.
    cursor.sync_from_fragment(Some("9"));
    assert_eq!(cursor.index(), 0);
    cursor.sync_from_fragment(Some("abc"));
    assert_eq!(cursor.index(), 0);
}

#[test]
fn test_navigation_updates_location_mirror() {
    let mut cursor = Cursor::new(4);
    let mut location = cursor.fragment();

    for _ in 0..10 {
        if let Some(fragment) = cursor.next() {
            location = fragment;
        }
    }

    // Clamped at the last slide; the mirror follows the cursor.
    assert_eq!(cursor.index(), 3);
    assert_eq!(location, "#4");
    assert_eq!(cursor.progress_percent(), 100.0);
}
