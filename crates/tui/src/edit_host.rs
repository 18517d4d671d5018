//! Edit host component state.
//!
//! Responsibilities:
//! - Own the edit host key map for the component's lifetime.
//! - Apply resolved actions to field focus and the edit outcome.
//!
//! Does NOT handle:
//! - Text editing inside fields.
//! - Terminal setup or drawing (see `runtime::demo`).
//!
//! Invariants:
//! - `focus` is always a valid field index.
//! - Once the outcome is `Saved` or `Discarded`, further actions are ignored.

use crossterm::event::KeyEvent;

use crate::action::Action;
use crate::input::keymap::KeyMap;
use crate::input::normalize::key_event_identifier;

/// Result of an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Editing,
    Saved,
    Discarded,
}

/// Focus and outcome state of a multi-field edit view.
#[derive(Debug)]
pub struct EditHost {
    keymap: KeyMap<Action>,
    field_count: usize,
    focus: usize,
    outcome: EditOutcome,
    last_key: Option<String>,
    last_action: Option<Action>,
}

impl EditHost {
    /// Create an edit host over `field_count` fields (at least one).
    pub fn new(keymap: KeyMap<Action>, field_count: usize) -> Self {
        Self {
            keymap,
            field_count: field_count.max(1),
            focus: 0,
            outcome: EditOutcome::Editing,
            last_key: None,
            last_action: None,
        }
    }

    pub fn keymap(&self) -> &KeyMap<Action> {
        &self.keymap
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn outcome(&self) -> EditOutcome {
        self.outcome
    }

    pub fn last_key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    pub fn is_done(&self) -> bool {
        self.outcome != EditOutcome::Editing
    }

    /// Resolve a key event and apply the resulting action.
    ///
    /// Returns the applied action, or `None` for unbound keys.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<Action> {
        let identifier = key_event_identifier(&event)?;
        let action = self.keymap.resolve(&identifier);
        match action {
            Some(action) => tracing::debug!(key = %identifier, action = %action, "Resolved key"),
            None => tracing::trace!(key = %identifier, "Unbound key"),
        }
        self.last_key = Some(identifier);
        self.last_action = action;
        if let Some(action) = action {
            self.apply(action);
        }
        action
    }

    /// Apply an action. Focus movement wraps around the field list.
    pub fn apply(&mut self, action: Action) {
        if self.is_done() {
            return;
        }
        match action {
            Action::Up => {
                self.focus = (self.focus + self.field_count - 1) % self.field_count;
            }
            Action::Down => {
                self.focus = (self.focus + 1) % self.field_count;
            }
            Action::Save => {
                tracing::info!("Edit saved");
                self.outcome = EditOutcome::Saved;
            }
            Action::Discard => {
                tracing::info!("Edit discarded");
                self.outcome = EditOutcome::Discarded;
            }
        }
    }
}
