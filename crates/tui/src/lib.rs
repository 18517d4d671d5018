//! Edit host key binding library.
//!
//! This library provides the declarative key map for the edit host view,
//! the terminal key normalization that feeds it, and the help rendering
//! that consumes it.
//!
//! # Example
//!
//! ```rust
//! use edithost_tui::{Action, HelpProvider, edit_host_keymap};
//!
//! let keymap = edit_host_keymap().unwrap();
//! assert_eq!(keymap.resolve("tab"), Some(Action::Down));
//! assert_eq!(keymap.resolve("q"), None);
//! assert_eq!(keymap.short_help()[0].key, "↑");
//! ```

pub mod action;
pub mod cli;
pub mod edit_host;
pub mod input;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use edit_host::{EditHost, EditOutcome};
pub use input::keymap::{
    HelpEntry, HelpProvider, KeyBinding, KeyMap, KeyMapError, edit_host_bindings,
    edit_host_keymap,
};
