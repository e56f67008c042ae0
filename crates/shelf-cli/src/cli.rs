//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use shelf_core::Layout;
use shelf_fs::StorageLayout;

/// Shelf - a temporary holding area for files, images and text
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root directory for held files and settings
    #[arg(long, global = true, env = "SHELF_STORAGE_DIR", value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Settings file to use instead of the default
    #[arg(long, global = true, env = "SHELF_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Resolve where held files and settings live for this invocation.
    pub fn storage_layout(&self) -> shelf_fs::Result<StorageLayout> {
        let layout = match &self.storage_dir {
            Some(root) => StorageLayout::rooted(root),
            None => StorageLayout::user()?,
        };
        Ok(match &self.settings {
            Some(file) => layout.with_settings_file(file),
            None => layout,
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive shelf session
    ///
    /// Reads one command per line from stdin. Type `help` inside the
    /// session for the command list.
    ///
    /// Examples:
    ///   shelf run
    ///   printf 'text hello\nlist\n' | shelf run --memory-clipboard
    Run {
        /// Use an in-process clipboard instead of the system one
        #[arg(long)]
        memory_clipboard: bool,

        /// Put held files back where they came from when the session ends
        #[arg(long)]
        restore_on_exit: bool,
    },

    /// Show where held files and settings are stored
    Paths,

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },

    /// Show the configured global hotkey
    Hotkey,
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    /// Print the current settings
    Show,

    /// Set the panel layout (horizontal, grid or list)
    Layout {
        layout: Layout,
    },

    /// Enable or disable launching at login
    LaunchAtLogin {
        #[arg(action = clap::ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },

    /// Set the global hotkey chord, e.g. "ctrl+`" or "cmd+shift+s"
    Hotkey {
        chord: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["shelf"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_run_flags() {
        let cli = Cli::parse_from(["shelf", "run", "--memory-clipboard"]);
        assert_eq!(
            cli.command,
            Some(Commands::Run {
                memory_clipboard: true,
                restore_on_exit: false,
            })
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["shelf", "paths", "-v", "--storage-dir", "/tmp/shelf"]);
        assert!(cli.verbose);
        assert_eq!(cli.storage_dir.as_deref(), Some(Path::new("/tmp/shelf")));
        assert_eq!(cli.command, Some(Commands::Paths));
    }

    #[test]
    fn parse_settings_layout() {
        let cli = Cli::parse_from(["shelf", "settings", "layout", "Grid"]);
        assert_eq!(
            cli.command,
            Some(Commands::Settings {
                action: Some(SettingsAction::Layout {
                    layout: Layout::Grid
                }),
            })
        );
    }

    #[test]
    fn reject_unknown_layout() {
        let result = Cli::try_parse_from(["shelf", "settings", "layout", "diagonal"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_launch_at_login_boolish() {
        for (value, expected) in [("on", true), ("false", false), ("yes", true), ("0", false)] {
            let cli = Cli::parse_from(["shelf", "settings", "launch-at-login", value]);
            assert_eq!(
                cli.command,
                Some(Commands::Settings {
                    action: Some(SettingsAction::LaunchAtLogin { enabled: expected }),
                })
            );
        }
    }

    #[test]
    fn storage_layout_uses_overrides() {
        let cli = Cli::parse_from([
            "shelf",
            "--storage-dir",
            "/tmp/shelf",
            "--settings",
            "/tmp/other.toml",
            "paths",
        ]);
        let layout = cli.storage_layout().unwrap();
        assert_eq!(layout.held_files(), Path::new("/tmp/shelf/HeldFiles"));
        assert_eq!(layout.settings_file(), Path::new("/tmp/other.toml"));
    }
}
