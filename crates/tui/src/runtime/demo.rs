//! Interactive edit host demo loop.
//!
//! Reads key events, resolves them through the edit host's key map, and
//! redraws until the session is saved, discarded, or interrupted with
//! `ctrl+c`.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent};

use crate::action::Action;
use crate::edit_host::{EditHost, EditOutcome};
use crate::input::keymap::KeyMap;
use crate::input::normalize::key_event_identifier;
use crate::runtime::terminal::TerminalGuard;
use crate::ui::render_edit_host;

/// Identifier that always ends the demo; reserved from overrides.
const INTERRUPT_KEY: &str = "ctrl+c";

fn is_interrupt(key: &KeyEvent) -> bool {
    key_event_identifier(key).as_deref() == Some(INTERRUPT_KEY)
}

/// Run the demo and return the final outcome.
pub fn run_demo(keymap: KeyMap<Action>, fields: usize) -> Result<EditOutcome> {
    let mut host = EditHost::new(keymap, fields);
    let (_guard, mut terminal) =
        TerminalGuard::enter().context("Failed to initialize terminal")?;

    tracing::info!(fields = host.field_count(), "Demo started");

    while !host.is_done() {
        terminal
            .draw(|f| render_edit_host(f, &host))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
            if is_interrupt(&key) {
                tracing::info!("Demo interrupted");
                break;
            }
            host.handle_key(key);
        }
    }

    tracing::info!(outcome = ?host.outcome(), "Demo finished");
    Ok(host.outcome())
}
