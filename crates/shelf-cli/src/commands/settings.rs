//! Settings command implementations

use colored::Colorize;
use shelf_core::{Settings, SettingsService};
use shelf_fs::StorageLayout;

use crate::cli::SettingsAction;
use crate::error::Result;

/// Run a settings subcommand; no action shows the current settings.
pub fn run_settings(layout: &StorageLayout, action: Option<SettingsAction>) -> Result<()> {
    let mut service = SettingsService::open(layout.settings_file())?;

    match action.unwrap_or(SettingsAction::Show) {
        SettingsAction::Show => {
            print_settings(service.settings());
            println!("{:<16} {}", "file".dimmed(), service.path());
        }
        SettingsAction::Layout { layout } => {
            service.set_layout(layout)?;
            println!(
                "{} Layout set to {}.",
                "OK".green().bold(),
                layout.display_name().cyan()
            );
        }
        SettingsAction::LaunchAtLogin { enabled } => {
            service.set_launch_at_login(enabled)?;
            let state = if enabled { "enabled" } else { "disabled" };
            println!("{} Launch at login {}.", "OK".green().bold(), state);
        }
        SettingsAction::Hotkey { chord } => {
            let hotkey = service.set_hotkey(&chord)?;
            println!(
                "{} Hotkey set to {} {}.",
                "OK".green().bold(),
                hotkey.to_string().cyan(),
                hotkey.description().dimmed()
            );
        }
    }
    Ok(())
}

fn print_settings(settings: &Settings) {
    println!("{:<16} {}", "layout", settings.layout);
    println!("{:<16} {}", "launch-at-login", settings.launch_at_login);
    match settings.hotkey() {
        Ok(hotkey) => println!("{:<16} {} {}", "hotkey", hotkey, hotkey.description().dimmed()),
        Err(e) => println!(
            "{:<16} {} {}",
            "hotkey",
            settings.hotkey,
            format!("({e})").yellow()
        ),
    }
}
