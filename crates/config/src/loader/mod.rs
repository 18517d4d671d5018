//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load `.env` files and environment variables.
//! - Resolve and read the JSON keymap override file.
//!
//! Does NOT handle:
//! - Building or validating the runtime key map (see TUI crate).
//!
//! Invariants / Assumptions:
//! - Precedence: builder (CLI) path > `EDITHOST_KEYMAP_PATH` > platform default path.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod path;

pub use builder::{ConfigLoader, KeymapConfig};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use path::default_keymap_path;
