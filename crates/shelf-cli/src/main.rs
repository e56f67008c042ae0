//! Shelf CLI
//!
//! Command-line front end for the shelf: an interactive session driving
//! the shelf event loop, plus settings and path inspection.

mod cli;
mod commands;
mod error;
mod logging;
mod session;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    let layout = cli.storage_layout()?;

    match cli.command {
        Some(Commands::Run {
            memory_clipboard,
            restore_on_exit,
        }) => commands::run_session(&layout, memory_clipboard, restore_on_exit),
        Some(Commands::Paths) => commands::run_paths(&layout),
        Some(Commands::Settings { action }) => commands::run_settings(&layout, action),
        Some(Commands::Hotkey) => commands::run_hotkey(&layout),
        None => {
            println!("{} Shelf", "shelf".green().bold());
            println!();
            println!("Run {} for available commands.", "shelf --help".cyan());
            Ok(())
        }
    }
}
