//! Key map configuration loading.
//!
//! Responsibilities:
//! - Load keybinding overrides with CLI and environment variable precedence.
//! - Build the validated edit host key map from defaults plus overrides.
//!
//! Does NOT handle:
//! - Parsing override files (see `edithost_config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > default config path.
//! - `load_dotenv()` is called before loading configuration.
//! - Any configuration error aborts startup; there is no silent fallback.

use std::path::PathBuf;

use anyhow::{Context, Result};
use edithost_config::ConfigLoader;

use crate::action::Action;
use crate::input::keymap::KeyMap;
use crate::input::keymap::overrides::edit_host_keymap_with_overrides;

/// A built key map together with the file its overrides came from.
#[derive(Debug)]
pub struct LoadedKeymap {
    pub keymap: KeyMap<Action>,
    pub source: Option<PathBuf>,
}

/// Load overrides and build the edit host key map.
///
/// # Errors
///
/// Returns an error if `.env` or the keymap file cannot be read or parsed,
/// or if the merged bindings fail key map validation.
pub fn load_keymap(keymap_path: Option<PathBuf>) -> Result<LoadedKeymap> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?;
    if let Some(path) = keymap_path {
        loader = loader.with_keymap_path(path);
    }

    let config = loader
        .from_env()
        .load()
        .context("Failed to load keymap configuration")?;

    let keymap = edit_host_keymap_with_overrides(&config.overrides)
        .context("Invalid key map configuration")?;

    tracing::info!(
        bindings = keymap.len(),
        overrides = config.overrides.overrides.len(),
        source = ?config.source,
        "Key map initialized"
    );

    Ok(LoadedKeymap {
        keymap,
        source: config.source,
    })
}
