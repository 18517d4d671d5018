//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the standard keymap file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, KEYMAP_FILE_NAME};

/// Returns the default path to the keymap override file.
///
/// - Linux: `~/.config/edithost/keybindings.json`
/// - macOS: `~/Library/Application Support/edithost/keybindings.json`
/// - Windows: `%AppData%\edithost\config\keybindings.json`
pub fn default_keymap_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(KEYMAP_FILE_NAME))
}
