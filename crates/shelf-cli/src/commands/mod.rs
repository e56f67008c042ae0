//! Command implementations for shelf-cli

pub mod hotkey;
pub mod paths;
pub mod run;
pub mod settings;

pub use hotkey::run_hotkey;
pub use paths::run_paths;
pub use run::run_session;
pub use settings::run_settings;
