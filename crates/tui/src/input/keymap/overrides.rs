//! Keybinding override application.
//!
//! Bridges the config crate's `KeybindOverrides` with the edit host key map.
//!
//! Responsibilities:
//! - Replace the keys of overridden actions before the key map is built.
//! - Show the first override key in help for overridden actions.
//!
//! Does NOT handle:
//! - Parsing or loading override files (handled by `edithost_config`).
//! - Conflict detection against default keys (handled by `KeyMap` validation).
//!
//! Invariants:
//! - Actions without an override keep their default keys and help.
//! - The merged bindings go through the same validation as the defaults.

use edithost_config::{KeybindOverrides, canonicalize};

use super::{KeyBinding, KeyMap, KeyMapError, edit_host_bindings};
use crate::action::Action;

/// Apply user overrides to a list of edit host bindings.
pub fn apply_overrides(
    bindings: Vec<KeyBinding<Action>>,
    overrides: &KeybindOverrides,
) -> Vec<KeyBinding<Action>> {
    bindings
        .into_iter()
        .map(|binding| {
            let action = *binding.action();
            let Some(keys) = overrides.get(action.keybind_action()) else {
                return binding;
            };

            tracing::debug!(action = %action, keys = ?keys, "Applying keybinding override");

            // Unparseable keys keep their spelling; KeyMap validation reports them.
            let help_key = match keys.first() {
                Some(first) => canonicalize(first).unwrap_or_else(|_| first.clone()),
                None => binding.help().key.to_string(),
            };
            let description = binding.help().description.to_string();
            binding
                .with_keys(keys.iter().cloned())
                .with_help(help_key, description)
        })
        .collect()
}

/// Build the edit host key map with user overrides applied.
///
/// # Errors
///
/// Returns a [`KeyMapError`] if an override collides with another action's
/// keys or leaves an action without keys.
pub fn edit_host_keymap_with_overrides(
    overrides: &KeybindOverrides,
) -> Result<KeyMap<Action>, KeyMapError> {
    if overrides.is_empty() {
        tracing::debug!("No keybinding overrides configured");
    }
    KeyMap::new(apply_overrides(edit_host_bindings(), overrides))
}
