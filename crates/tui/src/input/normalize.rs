//! Crossterm key event normalization.
//!
//! Converts terminal key events into the canonical key identifiers the key
//! map resolves (`up`, `shift+tab`, `ctrl+s`). Uses the config crate's
//! `ParsedKey` so declared keys and pressed keys share one spelling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use edithost_config::ParsedKey;
use edithost_config::keybind::{KeyCodeName, ModifierFlags};

use crate::input::keymap::KeyMap;

/// Canonical identifier for a key press, or `None` for releases, repeats,
/// and keys the key map cannot express.
pub fn key_event_identifier(event: &KeyEvent) -> Option<String> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let code = match event.code {
        KeyCode::Char(' ') => KeyCodeName::Space,
        KeyCode::Char(c) => KeyCodeName::Char(c),
        KeyCode::F(n) if (1..=20).contains(&n) => KeyCodeName::F(n),
        KeyCode::Esc => KeyCodeName::Esc,
        KeyCode::Enter => KeyCodeName::Enter,
        KeyCode::Tab => KeyCodeName::Tab,
        KeyCode::BackTab => KeyCodeName::BackTab,
        KeyCode::Backspace => KeyCodeName::Backspace,
        KeyCode::Delete => KeyCodeName::Delete,
        KeyCode::Insert => KeyCodeName::Insert,
        KeyCode::Home => KeyCodeName::Home,
        KeyCode::End => KeyCodeName::End,
        KeyCode::PageUp => KeyCodeName::PageUp,
        KeyCode::PageDown => KeyCodeName::PageDown,
        KeyCode::Up => KeyCodeName::Up,
        KeyCode::Down => KeyCodeName::Down,
        KeyCode::Left => KeyCodeName::Left,
        KeyCode::Right => KeyCodeName::Right,
        _ => return None,
    };

    let modifiers = ModifierFlags {
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
        alt: event.modifiers.contains(KeyModifiers::ALT),
    };

    Some(ParsedKey { code, modifiers }.canonical())
}

/// Resolve a crossterm key event against a key map.
pub fn resolve_key_event<A>(keymap: &KeyMap<A>, event: &KeyEvent) -> Option<A>
where
    A: Copy + Eq + std::fmt::Display,
{
    key_event_identifier(event).and_then(|key| keymap.resolve(&key))
}
