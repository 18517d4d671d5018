//! Integration tests for keybinding override functionality.
//!
//! These tests verify that user-defined keybinding overrides replace the
//! default keys, and that conflicting overrides abort key map loading.

use std::collections::BTreeMap;
use std::io::Write;

use edithost_config::{KeybindAction, KeybindOverrides};
use edithost_tui::input::help::short_help_text;
use edithost_tui::input::keymap::overrides::edit_host_keymap_with_overrides;
use edithost_tui::runtime::config::load_keymap;
use edithost_tui::{Action, KeyMapError};
use serial_test::serial;

fn overrides(entries: &[(KeybindAction, &[&str])]) -> KeybindOverrides {
    let mut map = BTreeMap::new();
    for (action, keys) in entries {
        map.insert(*action, keys.iter().map(|k| k.to_string()).collect());
    }
    KeybindOverrides { overrides: map }
}

fn write_keymap(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_override_replaces_default_keys() {
    let keymap =
        edit_host_keymap_with_overrides(&overrides(&[(KeybindAction::Save, &["ctrl+w"])]))
            .unwrap();

    assert_eq!(keymap.resolve("ctrl+w"), Some(Action::Save));
    assert_eq!(keymap.resolve("ctrl+s"), None);
    assert_eq!(
        short_help_text(&keymap),
        "↑ up • ↓ down • ctrl+w save • esc discard"
    );
}

#[test]
fn test_override_keys_are_canonicalized() {
    let keymap = edit_host_keymap_with_overrides(&overrides(&[(
        KeybindAction::Discard,
        &["Ctrl + Q", "Escape"],
    )]))
    .unwrap();

    assert_eq!(keymap.resolve("ctrl+q"), Some(Action::Discard));
    assert_eq!(keymap.resolve("esc"), Some(Action::Discard));
}

#[test]
fn test_override_stealing_default_key_is_rejected() {
    let err = edit_host_keymap_with_overrides(&overrides(&[(KeybindAction::Up, &["enter"])]))
        .unwrap_err();

    assert_eq!(
        err,
        KeyMapError::DuplicateTrigger {
            key: "enter".to_string(),
            first: "Up".to_string(),
            second: "Down".to_string(),
        }
    );
}

#[test]
fn test_swapping_keys_between_actions_is_allowed() {
    let keymap = edit_host_keymap_with_overrides(&overrides(&[
        (KeybindAction::Up, &["down"]),
        (KeybindAction::Down, &["up", "tab"]),
    ]))
    .unwrap();

    assert_eq!(keymap.resolve("down"), Some(Action::Up));
    assert_eq!(keymap.resolve("up"), Some(Action::Down));
    assert_eq!(keymap.resolve("enter"), None);
}

#[test]
#[serial]
fn test_load_keymap_from_file() {
    let file = write_keymap(r#"{ "overrides": { "discard": ["ctrl+q"] } }"#);

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", Some("1")),
            ("EDITHOST_KEYMAP_PATH", None::<&str>),
        ],
        || {
            let loaded = load_keymap(Some(file.path().to_path_buf())).unwrap();
            assert_eq!(loaded.keymap.resolve("ctrl+q"), Some(Action::Discard));
            assert_eq!(loaded.keymap.resolve("esc"), None);
            assert_eq!(loaded.source.as_deref(), Some(file.path()));
        },
    );
}

#[test]
#[serial]
fn test_load_keymap_from_env_path() {
    let file = write_keymap(r#"{ "overrides": { "save": ["f2"] } }"#);
    let path = file.path().to_string_lossy().to_string();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", Some("1")),
            ("EDITHOST_KEYMAP_PATH", Some(path.as_str())),
        ],
        || {
            let loaded = load_keymap(None).unwrap();
            assert_eq!(loaded.keymap.resolve("f2"), Some(Action::Save));
        },
    );
}

#[test]
#[serial]
fn test_reserved_key_in_file_is_rejected() {
    let file = write_keymap(r#"{ "overrides": { "save": ["ctrl+c"] } }"#);

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", Some("1")),
            ("EDITHOST_KEYMAP_PATH", None::<&str>),
        ],
        || {
            let err = load_keymap(Some(file.path().to_path_buf())).unwrap_err();
            let chain = format!("{:#}", err);
            assert!(chain.contains("ctrl+c"), "unexpected error: {}", chain);
        },
    );
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", Some("1")),
            ("EDITHOST_KEYMAP_PATH", None::<&str>),
        ],
        || {
            assert!(load_keymap(Some(missing.clone())).is_err());
        },
    );
}
