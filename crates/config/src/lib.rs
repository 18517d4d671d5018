//! Configuration management for the edithost key map.
//!
//! This crate parses and normalizes key strings, defines the keybinding
//! override types, and loads user overrides from `.env`, environment
//! variables, and a JSON keymap file.

pub mod constants;
pub mod keybind;
mod loader;
pub mod types;

pub use keybind::{KeybindError, ParsedKey, canonicalize, parse_key};
pub use loader::{ConfigError, ConfigLoader, KeymapConfig, default_keymap_path, env_var_or_none};
pub use types::{KeybindAction, KeybindOverrides};
