//! Keybinding configuration types for the edit host.
//!
//! Responsibilities:
//! - Define overridable keybinding action identifiers (`KeybindAction`).
//! - Define `KeybindOverrides` for user-defined keybinding customizations.
//!
//! Does NOT handle:
//! - Keybinding parsing or validation (see `keybind` module at crate root).
//! - Runtime key event matching (see TUI crate).
//!
//! Invariants:
//! - `KeybindAction` uses snake_case serialization for config file consistency.
//! - `KeybindOverrides` uses `BTreeMap` for deterministic serialization.
//! - Only actions explicitly listed in overrides override the defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An overridable edit host action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum KeybindAction {
    /// Move focus to the previous field
    Up,
    /// Move focus to the next field
    Down,
    /// Save the edited content
    Save,
    /// Discard the edited content
    Discard,
}

impl fmt::Display for KeybindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Save => write!(f, "save"),
            Self::Discard => write!(f, "discard"),
        }
    }
}

/// User-defined keybinding overrides.
///
/// Maps action identifiers to the full list of keys that should trigger them.
/// An entry replaces every default key of that action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindOverrides {
    #[serde(default)]
    pub overrides: BTreeMap<KeybindAction, Vec<String>>,
}

impl KeybindOverrides {
    /// Returns true if there are no overrides configured.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Get the override keys for a specific action, if any.
    pub fn get(&self, action: KeybindAction) -> Option<&[String]> {
        self.overrides.get(&action).map(|keys| keys.as_slice())
    }
}
