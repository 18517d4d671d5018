//! edithost-keys - Inspect and try the edit host key bindings.
//!
//! Responsibilities:
//! - Orchestrate startup: logging, configuration, key map construction.
//! - Dispatch CLI subcommands.
//!
//! Does NOT handle:
//! - Key resolution or help rendering (see `edithost_tui::input`).
//! - Override file parsing (see `crates/config`).
//!
//! Invariants:
//! - Logging goes to a file in `--log-dir`, never to stdout.
//! - An invalid key map aborts startup with a descriptive error.

use anyhow::{Context, Result};
use clap::Parser;
use edithost_config::canonicalize;
use edithost_tui::cli::{Cli, Command};
use edithost_tui::input::docs::render_markdown;
use edithost_tui::input::help::{help_text, short_help_text};
use edithost_tui::runtime::config::load_keymap;
use edithost_tui::runtime::demo::run_demo;
use edithost_tui::runtime::logging::init_file_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Note: _guard must live for entire main() duration to ensure logs are flushed
    let _guard = init_file_logging(&cli.log_dir)?;

    let loaded = load_keymap(cli.keymap_path.clone())?;
    let keymap = loaded.keymap;

    match cli.command {
        Command::Shortcuts { full } => {
            if full {
                println!("{}", help_text(&keymap));
            } else {
                println!("{}", short_help_text(&keymap));
            }
        }
        Command::Resolve { key } => {
            let canonical =
                canonicalize(&key).with_context(|| format!("Invalid key '{}'", key))?;
            match keymap.resolve(&canonical) {
                Some(action) => println!("{} -> {}", canonical, action),
                None => println!("{} -> no action", canonical),
            }
        }
        Command::Check => {
            match &loaded.source {
                Some(path) => println!(
                    "OK: {} bindings (overrides from {})",
                    keymap.len(),
                    path.display()
                ),
                None => println!("OK: {} bindings (defaults)", keymap.len()),
            }
        }
        Command::Docs => {
            println!("{}", render_markdown("Edit Host", &keymap));
        }
        Command::Demo { fields } => {
            let outcome = run_demo(keymap, usize::from(fields))?;
            println!("{:?}", outcome);
        }
    }

    Ok(())
}
