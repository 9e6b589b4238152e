//! Configuration management module
//!
//! This module handles loading and saving user preferences. Preferences are
//! stored as `config.json` next to the executable and overwritten in full on
//! every change.

pub mod models;
pub mod store;

pub use models::{ParseThemeError, Preferences, Theme};
pub use store::ConfigStore;
