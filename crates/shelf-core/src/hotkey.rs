//! Hotkey chords
//!
//! Parses chord strings such as ``ctrl+` `` or `cmd+shift+s` into a
//! [`Hotkey`]. Registering the chord with the OS is the UI's job.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Named keys accepted besides single characters.
const NAMED_KEYS: &[&str] = &[
    "space", "tab", "return", "escape", "delete", "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8",
    "f9", "f10", "f11", "f12",
];

/// A modifier key, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Control,
    Option,
    Shift,
    Command,
}

impl Modifier {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "ctrl" | "control" => Some(Self::Control),
            "alt" | "opt" | "option" => Some(Self::Option),
            "shift" => Some(Self::Shift),
            "cmd" | "command" | "super" => Some(Self::Command),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Control => "ctrl",
            Self::Option => "alt",
            Self::Shift => "shift",
            Self::Command => "cmd",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Control => "⌃",
            Self::Option => "⌥",
            Self::Shift => "⇧",
            Self::Command => "⌘",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Control => "Control",
            Self::Option => "Option",
            Self::Shift => "Shift",
            Self::Command => "Command",
        }
    }
}

/// A global hotkey chord: one or more modifiers plus a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    modifiers: Vec<Modifier>,
    key: String,
}

impl Hotkey {
    /// Parse a `+`-separated chord. Case-insensitive.
    pub fn parse(chord: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidHotkey {
            chord: chord.to_string(),
            reason: reason.to_string(),
        };

        let lowered = chord.trim().to_lowercase();
        let mut tokens: Vec<&str> = lowered.split('+').map(str::trim).collect();
        let key = tokens.pop().unwrap_or_default();

        let mut modifiers = Vec::with_capacity(tokens.len());
        for token in tokens {
            let modifier =
                Modifier::parse(token).ok_or_else(|| invalid(&format!("unknown modifier '{token}'")))?;
            modifiers.push(modifier);
        }
        modifiers.sort();
        modifiers.dedup();

        if modifiers.is_empty() {
            return Err(invalid("a global hotkey needs at least one modifier"));
        }

        let key = match key {
            "" => return Err(invalid("missing key")),
            "enter" => "return",
            "esc" => "escape",
            other => other,
        };
        if key.chars().count() != 1 && !NAMED_KEYS.contains(&key) {
            return Err(invalid(&format!("unknown key '{key}'")));
        }

        Ok(Self {
            modifiers,
            key: key.to_string(),
        })
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable form, e.g. ``⌃` (Control + Backtick)``.
    pub fn description(&self) -> String {
        let key_name = key_name(&self.key);
        let symbols: String = self.modifiers.iter().map(Modifier::symbol).collect();
        let mut names: Vec<&str> = self.modifiers.iter().map(Modifier::name).collect();
        names.push(&key_name);
        format!("{symbols}{} ({})", key_glyph(&self.key), names.join(" + "))
    }
}

fn key_glyph(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_uppercase()
    } else {
        capitalize(key)
    }
}

fn key_name(key: &str) -> String {
    match key {
        "`" => "Backtick".to_string(),
        "," => "Comma".to_string(),
        "." => "Period".to_string(),
        "/" => "Slash".to_string(),
        "-" => "Minus".to_string(),
        "=" => "Equals".to_string(),
        other => key_glyph(other),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl FromStr for Hotkey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.token())?;
        }
        write!(f, "{}", self.key)
    }
}
