//! Persisted user settings
//!
//! [`SettingsService`] is constructed explicitly with the path of its
//! settings file and writes every change through immediately.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shelf_fs::{ConfigStore, NormalizedPath};
use tracing::debug;

use crate::hotkey::Hotkey;
use crate::{Error, Result};

/// Default global chord: Control + backtick.
pub const DEFAULT_HOTKEY: &str = "ctrl+`";

/// How the shelf panel arranges its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Horizontal,
    Grid,
    List,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Horizontal, Layout::Grid, Layout::List];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str() == wanted)
            .ok_or_else(|| Error::InvalidLayout(s.to_string()))
    }
}

/// User preferences stored between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: Layout,
    pub launch_at_login: bool,
    /// Chord string, see [`Hotkey::parse`]
    pub hotkey: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            launch_at_login: false,
            hotkey: DEFAULT_HOTKEY.to_string(),
        }
    }
}

impl Settings {
    /// The configured hotkey.
    pub fn hotkey(&self) -> Result<Hotkey> {
        Hotkey::parse(&self.hotkey)
    }
}

/// Loads settings from a file and saves each change back to it.
#[derive(Debug)]
pub struct SettingsService {
    path: NormalizedPath,
    config: ConfigStore,
    settings: Settings,
}

impl SettingsService {
    /// Open the settings file, using defaults if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = NormalizedPath::new(path);
        let config = ConfigStore::new();
        let settings: Settings = config.load_optional(&path)?.unwrap_or_default();
        debug!(path = %path, ?settings, "Loaded settings");
        Ok(Self {
            path,
            config,
            settings,
        })
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_layout(&mut self, layout: Layout) -> Result<()> {
        self.settings.layout = layout;
        self.save()
    }

    pub fn set_launch_at_login(&mut self, enabled: bool) -> Result<()> {
        self.settings.launch_at_login = enabled;
        self.save()
    }

    /// Validate and store a hotkey chord in its normalized form.
    pub fn set_hotkey(&mut self, chord: &str) -> Result<Hotkey> {
        let hotkey = Hotkey::parse(chord)?;
        self.settings.hotkey = hotkey.to_string();
        self.save()?;
        Ok(hotkey)
    }

    fn save(&self) -> Result<()> {
        self.config.save(&self.path, &self.settings)?;
        debug!(path = %self.path, "Saved settings");
        Ok(())
    }
}
