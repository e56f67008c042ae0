//! Print storage locations

use colored::Colorize;
use shelf_fs::StorageLayout;

use crate::error::Result;

pub fn run_paths(layout: &StorageLayout) -> Result<()> {
    println!("{:<11} {}", "Held files".bold(), layout.held_files().display());
    println!("{:<11} {}", "Settings".bold(), layout.settings_file().display());
    Ok(())
}
