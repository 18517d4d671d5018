//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the serializable keybinding override types.
//!
//! Does NOT handle:
//! - Loading configuration from files or environment variables (see `loader` module).
//! - Keybinding parsing or validation (see `keybind` module at crate root).

pub mod keybind;

pub use keybind::{KeybindAction, KeybindOverrides};
