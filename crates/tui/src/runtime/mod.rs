//! Runtime components for the edithost-keys binary.
//!
//! This module contains the runtime infrastructure:
//! - File logging setup
//! - Key map configuration loading
//! - Terminal management (TerminalGuard) and the interactive demo loop
//!
//! Does NOT handle:
//! - Key resolution or help rendering (see `edithost_tui::input`).
//!
//! Invariants:
//! - Logging and the key map are initialized once during startup in `main()`.

pub mod config;
pub mod demo;
pub mod logging;
pub mod terminal;
