//! Edit host keybinding declarations.
//!
//! Invariants:
//! - Ordering matches the rendered help/docs expectations.
//! - The edit host declares no full-help groups; short help is the only view.

use super::{KeyBinding, KeyMap, KeyMapError};
use crate::action::Action;

/// Default bindings of the edit host, in help-display order.
pub fn edit_host_bindings() -> Vec<KeyBinding<Action>> {
    vec![
        KeyBinding::new(Action::Up)
            .with_keys(["up", "shift+tab"])
            .with_help("↑", "up"),
        KeyBinding::new(Action::Down)
            .with_keys(["down", "tab", "enter"])
            .with_help("↓", "down"),
        KeyBinding::new(Action::Save)
            .with_keys(["ctrl+s"])
            .with_help("ctrl+s", "save"),
        KeyBinding::new(Action::Discard)
            .with_keys(["esc"])
            .with_help("esc", "discard"),
    ]
}

/// Build the default edit host key map.
pub fn edit_host_keymap() -> Result<KeyMap<Action>, KeyMapError> {
    KeyMap::new(edit_host_bindings())
}
