//! Show the configured global hotkey

use colored::Colorize;
use shelf_core::SettingsService;
use shelf_fs::StorageLayout;

use crate::error::Result;

/// Print the chord from settings and its readable form.
///
/// Registering the chord with the window server belongs to the desktop
/// front end; the CLI only validates and reports it.
pub fn run_hotkey(layout: &StorageLayout) -> Result<()> {
    let service = SettingsService::open(layout.settings_file())?;
    let hotkey = service.settings().hotkey()?;
    println!("{}  {}", hotkey.to_string().cyan(), hotkey.description());
    Ok(())
}
