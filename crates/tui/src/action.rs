//! Edit host actions.
//!
//! Actions are the named outcomes of key resolution. The edit host applies
//! them to its focus and outcome state; the key map only produces them.

use std::fmt;

use edithost_config::KeybindAction;

/// Named action triggered by an edit host key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move focus to the previous field
    Up,
    /// Move focus to the next field
    Down,
    /// Save the edited content
    Save,
    /// Discard the edited content
    Discard,
}

impl Action {
    /// All actions in help-display order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Save, Action::Discard];

    /// The config identifier used for this action in keymap files.
    pub fn keybind_action(self) -> KeybindAction {
        match self {
            Action::Up => KeybindAction::Up,
            Action::Down => KeybindAction::Down,
            Action::Save => KeybindAction::Save,
            Action::Discard => KeybindAction::Discard,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Up => write!(f, "Up"),
            Action::Down => write!(f, "Down"),
            Action::Save => write!(f, "Save"),
            Action::Discard => write!(f, "Discard"),
        }
    }
}
