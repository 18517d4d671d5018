//! Documentation rendering helpers for keybindings.
//!
//! Responsibilities:
//! - Render a key map into a Markdown table for docs/usage output.
//!
//! Non-responsibilities:
//! - Reading or writing files (handled by the CLI).
//!
//! Invariants:
//! - Output is deterministic and follows declaration order.
//! - Disabled bindings are omitted.

use std::fmt;

use crate::input::keymap::KeyMap;

pub fn render_markdown<A>(title: &str, keymap: &KeyMap<A>) -> String
where
    A: Copy + Eq + fmt::Display,
{
    let mut out = String::new();

    out.push_str(&format!("### {}\n\n", title));
    out.push_str("| Keys | Action | Help |\n");
    out.push_str("|------|--------|------|\n");

    for binding in keymap.bindings().iter().filter(|b| b.is_enabled()) {
        let keys = binding
            .keys()
            .iter()
            .map(|k| format!("`{}`", k))
            .collect::<Vec<_>>()
            .join(", ");
        let help = binding.help();
        out.push_str(&format!(
            "| {} | {} | {} {} |\n",
            keys,
            binding.action(),
            help.key,
            help.description
        ));
    }

    out.trim_end().to_string()
}
