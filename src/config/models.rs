//! Configuration data models
//!
//! This module defines the user preferences persisted to `config.json`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Appearance mode of the user interface
///
/// Written lowercase; read through [`FromStr`], so hand-edited files may use
/// any casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Theme {
    /// Light color scheme
    Light,
    /// Dark color scheme
    Dark,
    /// Follow the operating system appearance
    #[default]
    System,
}

impl Theme {
    /// Lowercase name, as stored in the config file
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Theme`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Case-insensitive, so segmented button labels ("Dark") parse directly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = ParseThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// User preferences persisted between sessions
///
/// Missing keys fall back to their default, so `{}` is a valid file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Last selected appearance mode
    pub theme: Theme,
    /// Whether to launch at user login
    pub auto_start: bool,
}
