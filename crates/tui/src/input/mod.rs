//! Centralized input/keybinding definitions for the edit host.
//!
//! Responsibilities:
//! - Define the keybinding registry used by input resolution, help, and docs.
//! - Normalize terminal key events into key identifiers.
//! - Provide deterministic rendering helpers for help and documentation output.
//!
//! Non-responsibilities:
//! - Mutating edit host state directly (handled by `EditHost` via Actions).
//! - Performing I/O or file writes.
//!
//! Invariants:
//! - Keybinding metadata is the single source of truth for help/docs.
//! - Input resolution returns Actions only and never mutates state.

pub mod docs;
pub mod help;
pub mod keymap;
pub mod normalize;
