//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that resolves the keymap file path.
//! - Read, parse, and validate the keymap override file.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Applying overrides to a key map (see TUI crate).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - A missing file at the default path means "no overrides"; a missing file
//!   at an explicitly requested path is an error.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use super::path::default_keymap_path;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::keybind::validate_overrides;
use crate::types::KeybindOverrides;

/// Loaded keymap configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeymapConfig {
    /// Validated user overrides; empty when no file was found.
    pub overrides: KeybindOverrides,
    /// File the overrides were read from, if any.
    pub source: Option<PathBuf>,
}

/// Configuration loader that resolves and reads the keymap override file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    keymap_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self { keymap_path: None }
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but cannot be read or parsed.
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use an explicit keymap file path (from CLI arguments or tests).
    pub fn with_keymap_path(mut self, path: PathBuf) -> Self {
        self.keymap_path = Some(path);
        self
    }

    /// Apply environment variables that are not already set through the builder.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    pub(crate) fn keymap_path(&self) -> Option<&Path> {
        self.keymap_path.as_deref()
    }

    pub(crate) fn set_keymap_path(&mut self, path: Option<PathBuf>) {
        self.keymap_path = path;
    }

    /// Resolve the keymap file and load its overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path does not exist, or if the file
    /// cannot be read, parsed, or validated.
    pub fn load(self) -> Result<KeymapConfig, ConfigError> {
        let (path, explicit) = match self.keymap_path {
            Some(path) => (path, true),
            None => (
                default_keymap_path()
                    .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
                false,
            ),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::KeymapFileNotFound { path });
            }
            tracing::debug!(path = %path.display(), "No keymap file found, using default bindings");
            return Ok(KeymapConfig::default());
        }

        let contents =
            std::fs::read_to_string(&path).map_err(|source| ConfigError::ConfigFileRead {
                path: path.clone(),
                source,
            })?;

        let overrides: KeybindOverrides =
            serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
                path: path.clone(),
                source,
            })?;

        validate_overrides(&overrides.overrides).map_err(|source| {
            ConfigError::InvalidKeybinding {
                path: path.clone(),
                source,
            }
        })?;

        tracing::info!(
            path = %path.display(),
            count = overrides.overrides.len(),
            "Loaded keymap overrides"
        );

        Ok(KeymapConfig {
            overrides,
            source: Some(path),
        })
    }
}
