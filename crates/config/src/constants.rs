//! Centralized constants for the edithost workspace.

/// Application directory name used for platform config paths.
pub const APP_DIR_NAME: &str = "edithost";

/// File name of the keymap override file inside the config directory.
pub const KEYMAP_FILE_NAME: &str = "keybindings.json";

/// Environment variable pointing at an explicit keymap override file.
pub const ENV_KEYMAP_PATH: &str = "EDITHOST_KEYMAP_PATH";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
