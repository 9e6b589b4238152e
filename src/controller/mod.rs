//! Application logic controller module
//!
//! This module ties the preference file, the brightness and auto-start
//! adapters and the appearance mode together behind one struct the GUI calls
//! into.
//!
//! # Architecture
//!
//! - `AppController`: owns `AppState` and the injected adapters, one method per
//!   user gesture
//! - `ThemeController`: applies appearance modes through an `AppearanceSink`
//!   and persists the choice
//!
//! # Event Flow
//!
//! ```text
//! MainWindow callback → AppController → adapter (brightness / auto-start / theme)
//!                                   ↓
//!                              ConfigStore (theme, auto-start only)
//! ```
//!
//! Everything runs on the UI thread, one callback at a time, so the state is
//! plain owned data without locks.

pub mod app_controller;
pub mod theme;

pub use app_controller::{AppController, AppState};
pub use theme::{AppearanceSink, ThemeController};
