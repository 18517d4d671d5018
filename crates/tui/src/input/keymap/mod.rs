//! Declarative keybinding registry and input resolver.
//!
//! Responsibilities:
//! - Hold an ordered, validated set of keybindings for one UI component.
//! - Resolve normalized key identifiers into actions.
//! - Expose short and full help listings through [`HelpProvider`].
//!
//! Non-responsibilities:
//! - Translating terminal events into key identifiers (see `input::normalize`).
//! - Rendering help (see `input::help` and `ui::help_bar`).
//! - Mutating component state; resolution only returns an action.
//!
//! Invariants:
//! - A `KeyMap` is immutable once built; declaration order is help order.
//! - Every binding has at least one trigger and non-empty help text.
//! - Actions are unique and no trigger belongs to two bindings.
//! - Triggers are stored in canonical form (`ctrl+s`, `shift+tab`).

use std::collections::HashMap;
use std::fmt;

use edithost_config::{KeybindError, canonicalize};
use thiserror::Error;

mod bindings;
pub mod overrides;

pub use bindings::{edit_host_bindings, edit_host_keymap};

/// Configuration errors detected while building a [`KeyMap`].
#[derive(Debug, Error, PartialEq)]
pub enum KeyMapError {
    #[error("Binding '{action}' has no keys")]
    EmptyTriggers { action: String },

    #[error("Binding '{action}' has an empty help {field}")]
    EmptyHelp {
        action: String,
        field: &'static str,
    },

    #[error("Binding '{action}' is declared more than once")]
    DuplicateAction { action: String },

    #[error("Key '{key}' is bound to both {first} and {second}")]
    DuplicateTrigger {
        key: String,
        first: String,
        second: String,
    },

    #[error("Binding '{action}' has invalid key '{key}'")]
    InvalidTrigger {
        action: String,
        key: String,
        #[source]
        source: KeybindError,
    },

    #[error("Full help group references unknown action '{action}'")]
    UnknownGroupAction { action: String },
}

/// One `(key, description)` pair shown in help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry<'a> {
    pub key: &'a str,
    pub description: &'a str,
}

/// Capability to list bindings for help display.
pub trait HelpProvider {
    /// Condensed single-line help, in declaration order.
    fn short_help(&self) -> Vec<HelpEntry<'_>>;

    /// Grouped help. An empty result means "show short help only".
    fn full_help(&self) -> Vec<Vec<HelpEntry<'_>>>;
}

/// A single keybinding declaration.
///
/// Built with a small builder chain:
///
/// ```
/// use edithost_tui::{Action, KeyBinding};
///
/// let save = KeyBinding::new(Action::Save)
///     .with_keys(["ctrl+s"])
///     .with_help("ctrl+s", "save");
/// assert_eq!(save.keys(), ["ctrl+s"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding<A> {
    action: A,
    keys: Vec<String>,
    help_key: String,
    help_description: String,
    enabled: bool,
    primary: bool,
}

impl<A> KeyBinding<A> {
    pub fn new(action: A) -> Self {
        Self {
            action,
            keys: Vec::new(),
            help_key: String::new(),
            help_description: String::new(),
            enabled: true,
            primary: true,
        }
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_help(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.help_key = key.into();
        self.help_description = description.into();
        self
    }

    /// Declare the binding disabled: it never resolves and is hidden from help.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Exclude the binding from short help (it can still appear in full help groups).
    pub fn secondary(mut self) -> Self {
        self.primary = false;
        self
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn help(&self) -> HelpEntry<'_> {
        HelpEntry {
            key: &self.help_key,
            description: &self.help_description,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    fn matches(&self, pressed: &str) -> bool {
        self.enabled && self.keys.iter().any(|key| key == pressed)
    }
}

/// Ordered, validated set of keybindings.
#[derive(Debug, Clone)]
pub struct KeyMap<A> {
    bindings: Vec<KeyBinding<A>>,
    groups: Vec<Vec<usize>>,
}

impl<A> KeyMap<A>
where
    A: Copy + Eq + fmt::Display,
{
    /// Build a key map with no full-help groups.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyMapError`] for empty key lists, empty help text,
    /// unparseable keys, repeated actions, or keys claimed by two bindings.
    pub fn new(bindings: Vec<KeyBinding<A>>) -> Result<Self, KeyMapError> {
        Self::with_full_help(bindings, Vec::new())
    }

    /// Build a key map whose full help lists `groups` of actions.
    ///
    /// # Errors
    ///
    /// Same as [`KeyMap::new`], plus [`KeyMapError::UnknownGroupAction`] when
    /// a group names an action without a binding.
    pub fn with_full_help(
        mut bindings: Vec<KeyBinding<A>>,
        groups: Vec<Vec<A>>,
    ) -> Result<Self, KeyMapError> {
        let mut seen_actions: Vec<A> = Vec::with_capacity(bindings.len());
        let mut owners: HashMap<String, String> = HashMap::new();

        for binding in &mut bindings {
            let action = binding.action.to_string();

            if seen_actions.contains(&binding.action) {
                return Err(KeyMapError::DuplicateAction { action });
            }
            seen_actions.push(binding.action);

            if binding.keys.is_empty() {
                return Err(KeyMapError::EmptyTriggers { action });
            }
            if binding.help_key.trim().is_empty() {
                return Err(KeyMapError::EmptyHelp {
                    action,
                    field: "key",
                });
            }
            if binding.help_description.trim().is_empty() {
                return Err(KeyMapError::EmptyHelp {
                    action,
                    field: "description",
                });
            }

            let mut canonical_keys: Vec<String> = Vec::with_capacity(binding.keys.len());
            for key in &binding.keys {
                let canonical = canonicalize(key).map_err(|source| KeyMapError::InvalidTrigger {
                    action: action.clone(),
                    key: key.clone(),
                    source,
                })?;

                if canonical_keys.contains(&canonical) {
                    continue;
                }
                if let Some(first) = owners.get(&canonical) {
                    return Err(KeyMapError::DuplicateTrigger {
                        key: canonical,
                        first: first.clone(),
                        second: action,
                    });
                }
                owners.insert(canonical.clone(), action.clone());
                canonical_keys.push(canonical);
            }
            binding.keys = canonical_keys;
        }

        let groups = groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .map(|action| {
                        bindings
                            .iter()
                            .position(|b| b.action == action)
                            .ok_or_else(|| KeyMapError::UnknownGroupAction {
                                action: action.to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            bindings = bindings.len(),
            groups = groups.len(),
            "Built key map"
        );

        Ok(Self { bindings, groups })
    }

    /// Resolve a normalized key identifier to an action.
    ///
    /// The first enabled binding (in declaration order) whose keys contain
    /// `pressed` wins. `None` means the key is not bound.
    pub fn resolve(&self, pressed: &str) -> Option<A> {
        self.bindings
            .iter()
            .find(|binding| binding.matches(pressed))
            .map(|binding| binding.action)
    }

    /// The binding declared for `action`, if any.
    pub fn binding(&self, action: A) -> Option<&KeyBinding<A>> {
        self.bindings.iter().find(|b| b.action == action)
    }

    pub fn bindings(&self) -> &[KeyBinding<A>] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<A> HelpProvider for KeyMap<A> {
    fn short_help(&self) -> Vec<HelpEntry<'_>> {
        self.bindings
            .iter()
            .filter(|b| b.enabled && b.primary)
            .map(KeyBinding::help)
            .collect()
    }

    fn full_help(&self) -> Vec<Vec<HelpEntry<'_>>> {
        self.groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|&index| &self.bindings[index])
                    .filter(|b| b.enabled)
                    .map(KeyBinding::help)
                    .collect::<Vec<_>>()
            })
            .filter(|group| !group.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Nav {
        Next,
        Prev,
        Open,
    }

    impl fmt::Display for Nav {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Debug::fmt(self, f)
        }
    }

    fn next() -> KeyBinding<Nav> {
        KeyBinding::new(Nav::Next)
            .with_keys(["j", "down"])
            .with_help("j", "next")
    }

    fn prev() -> KeyBinding<Nav> {
        KeyBinding::new(Nav::Prev)
            .with_keys(["k", "up"])
            .with_help("k", "prev")
    }

    fn open() -> KeyBinding<Nav> {
        KeyBinding::new(Nav::Open)
            .with_keys(["enter"])
            .with_help("enter", "open")
    }

    #[test]
    fn resolves_declared_keys() {
        let map = KeyMap::new(vec![next(), prev(), open()]).unwrap();
        assert_eq!(map.resolve("j"), Some(Nav::Next));
        assert_eq!(map.resolve("up"), Some(Nav::Prev));
        assert_eq!(map.resolve("enter"), Some(Nav::Open));
        assert_eq!(map.resolve("x"), None);
    }

    #[test]
    fn keys_are_stored_canonically() {
        let binding = KeyBinding::new(Nav::Open)
            .with_keys(["Enter", "Ctrl + O", "BackTab"])
            .with_help("enter", "open");
        let map = KeyMap::new(vec![binding]).unwrap();

        assert_eq!(map.bindings()[0].keys(), ["enter", "ctrl+o", "shift+tab"]);
        assert_eq!(map.resolve("ctrl+o"), Some(Nav::Open));
        assert_eq!(map.resolve("Ctrl + O"), None);
    }

    #[test]
    fn repeated_key_in_one_binding_collapses() {
        let binding = KeyBinding::new(Nav::Next)
            .with_keys(["j", "J", "j"])
            .with_help("j", "next");
        let map = KeyMap::new(vec![binding]).unwrap();
        assert_eq!(map.bindings()[0].keys(), ["j", "J"]);
    }

    #[test]
    fn rejects_empty_keys() {
        let binding = KeyBinding::new(Nav::Next).with_help("j", "next");
        assert_eq!(
            KeyMap::new(vec![binding]).unwrap_err(),
            KeyMapError::EmptyTriggers {
                action: "Next".to_string()
            }
        );
    }

    #[test]
    fn rejects_blank_help() {
        let no_key = KeyBinding::new(Nav::Next)
            .with_keys(["j"])
            .with_help("  ", "next");
        let no_description = KeyBinding::new(Nav::Next)
            .with_keys(["j"])
            .with_help("j", "");

        assert!(matches!(
            KeyMap::new(vec![no_key]),
            Err(KeyMapError::EmptyHelp { field: "key", .. })
        ));
        assert!(matches!(
            KeyMap::new(vec![no_description]),
            Err(KeyMapError::EmptyHelp {
                field: "description",
                ..
            })
        ));
    }

    #[test]
    fn rejects_duplicate_action() {
        let err = KeyMap::new(vec![next(), next().with_keys(["n"])]).unwrap_err();
        assert_eq!(
            err,
            KeyMapError::DuplicateAction {
                action: "Next".to_string()
            }
        );
    }

    #[test]
    fn rejects_shared_trigger_across_bindings() {
        let clash = KeyBinding::new(Nav::Open)
            .with_keys(["o", "DOWN"])
            .with_help("o", "open");
        let err = KeyMap::new(vec![next(), clash]).unwrap_err();
        assert_eq!(
            err,
            KeyMapError::DuplicateTrigger {
                key: "down".to_string(),
                first: "Next".to_string(),
                second: "Open".to_string(),
            }
        );
    }

    #[test]
    fn disabled_bindings_still_claim_triggers() {
        let clash = KeyBinding::new(Nav::Open)
            .with_keys(["j"])
            .with_help("j", "open")
            .disabled();
        assert!(matches!(
            KeyMap::new(vec![next(), clash]),
            Err(KeyMapError::DuplicateTrigger { .. })
        ));
    }

    #[test]
    fn rejects_unparseable_key() {
        let bad = KeyBinding::new(Nav::Open)
            .with_keys(["ctrl+nope"])
            .with_help("?", "open");
        assert!(matches!(
            KeyMap::new(vec![bad]),
            Err(KeyMapError::InvalidTrigger { key, .. }) if key == "ctrl+nope"
        ));
    }

    #[test]
    fn disabled_binding_never_resolves_or_shows() {
        let map = KeyMap::new(vec![next(), prev().disabled(), open()]).unwrap();
        assert_eq!(map.resolve("k"), None);
        let keys: Vec<&str> = map.short_help().iter().map(|e| e.key).collect();
        assert_eq!(keys, ["j", "enter"]);
    }

    #[test]
    fn secondary_binding_is_hidden_from_short_help_only() {
        let map = KeyMap::with_full_help(
            vec![next(), prev(), open().secondary()],
            vec![vec![Nav::Open, Nav::Next]],
        )
        .unwrap();

        assert_eq!(map.resolve("enter"), Some(Nav::Open));
        assert_eq!(map.short_help().len(), 2);
        assert_eq!(
            map.full_help(),
            vec![vec![
                HelpEntry {
                    key: "enter",
                    description: "open"
                },
                HelpEntry {
                    key: "j",
                    description: "next"
                },
            ]]
        );
    }

    #[test]
    fn full_help_drops_groups_that_end_up_empty() {
        let map = KeyMap::with_full_help(
            vec![next(), prev().disabled()],
            vec![vec![Nav::Prev], vec![Nav::Next]],
        )
        .unwrap();
        assert_eq!(map.full_help().len(), 1);
    }

    #[test]
    fn rejects_group_with_unknown_action() {
        let err = KeyMap::with_full_help(vec![next()], vec![vec![Nav::Open]]).unwrap_err();
        assert_eq!(
            err,
            KeyMapError::UnknownGroupAction {
                action: "Open".to_string()
            }
        );
    }

    #[test]
    fn key_map_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KeyMap<Nav>>();
    }
}
