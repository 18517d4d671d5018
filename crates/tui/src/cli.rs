//! Command-line argument parsing for edithost-keys.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `edithost_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for edithost-keys.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (--keymap-path)
/// 2. Environment variables (EDITHOST_KEYMAP_PATH)
/// 3. Default config file location
#[derive(Debug, Parser)]
#[command(
    name = "edithost-keys",
    about = "Inspect and try the edit host key bindings",
    version,
    after_help = "Examples:\n  edithost-keys shortcuts\n  edithost-keys resolve ctrl+s\n  edithost-keys --keymap-path ./keybindings.json check\n  edithost-keys demo --fields 4\n"
)]
pub struct Cli {
    /// Path to a keymap override file
    #[arg(long, global = true)]
    pub keymap_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, global = true, default_value = "logs")]
    pub log_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print the edit host help line
    Shortcuts {
        /// Print grouped full help (falls back to short help when there are no groups)
        #[arg(long)]
        full: bool,
    },
    /// Print the action bound to a key
    Resolve {
        /// Key to resolve, e.g. "ctrl+s" or "shift+tab"
        key: String,
    },
    /// Validate the key map configuration
    Check,
    /// Print the key bindings as Markdown
    Docs,
    /// Run an interactive edit host that resolves key presses
    Demo {
        /// Number of fields to move focus between
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..))]
        fields: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_subcommand() {
        let cli = Cli::parse_from(["edithost-keys", "resolve", "ctrl+s"]);
        assert_eq!(
            cli.command,
            Command::Resolve {
                key: "ctrl+s".to_string()
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "edithost-keys",
            "check",
            "--keymap-path",
            "/tmp/keys.json",
            "--log-dir",
            "/tmp/logs",
        ]);
        assert_eq!(cli.command, Command::Check);
        assert_eq!(cli.keymap_path, Some(PathBuf::from("/tmp/keys.json")));
        assert_eq!(cli.log_dir, PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn test_log_dir_default() {
        let cli = Cli::parse_from(["edithost-keys", "docs"]);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert_eq!(cli.keymap_path, None);
    }

    #[test]
    fn test_shortcuts_full_flag() {
        let cli = Cli::parse_from(["edithost-keys", "shortcuts", "--full"]);
        assert_eq!(cli.command, Command::Shortcuts { full: true });
    }

    #[test]
    fn test_demo_fields() {
        let cli = Cli::parse_from(["edithost-keys", "demo"]);
        assert_eq!(cli.command, Command::Demo { fields: 3 });

        assert!(Cli::try_parse_from(["edithost-keys", "demo", "--fields", "0"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["edithost-keys"]).is_err());
    }
}
