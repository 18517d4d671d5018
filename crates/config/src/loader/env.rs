//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//! - Reading the keymap file (see builder.rs).
//!
//! Invariants:
//! - Values set through builder methods are never replaced by environment values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use crate::constants::ENV_KEYMAP_PATH;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) {
    if loader.keymap_path().is_some() {
        return;
    }
    if let Some(path) = env_var_or_none(ENV_KEYMAP_PATH) {
        tracing::debug!(path = %path, "Using keymap path from {}", ENV_KEYMAP_PATH);
        loader.set_keymap_path(Some(PathBuf::from(path)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_blank() {
        temp_env::with_var("EDITHOST_TEST_BLANK", Some("   "), || {
            assert_eq!(env_var_or_none("EDITHOST_TEST_BLANK"), None);
        });
    }

    #[test]
    #[serial]
    fn test_env_var_or_none_trims() {
        temp_env::with_var("EDITHOST_TEST_TRIM", Some("  value  "), || {
            assert_eq!(
                env_var_or_none("EDITHOST_TEST_TRIM"),
                Some("value".to_string())
            );
        });
    }

    #[test]
    #[serial]
    fn test_env_var_or_none_unset() {
        temp_env::with_var_unset("EDITHOST_TEST_UNSET", || {
            assert_eq!(env_var_or_none("EDITHOST_TEST_UNSET"), None);
        });
    }

    #[test]
    #[serial]
    fn test_apply_env_sets_keymap_path() {
        temp_env::with_var(ENV_KEYMAP_PATH, Some("/etc/edithost/keys.json"), || {
            let mut loader = ConfigLoader::new();
            apply_env(&mut loader);
            assert_eq!(
                loader.keymap_path(),
                Some(PathBuf::from("/etc/edithost/keys.json").as_path())
            );
        });
    }

    #[test]
    #[serial]
    fn test_apply_env_keeps_builder_path() {
        temp_env::with_var(ENV_KEYMAP_PATH, Some("/from/env.json"), || {
            let mut loader = ConfigLoader::new().with_keymap_path(PathBuf::from("/from/cli.json"));
            apply_env(&mut loader);
            assert_eq!(
                loader.keymap_path(),
                Some(PathBuf::from("/from/cli.json").as_path())
            );
        });
    }
}
