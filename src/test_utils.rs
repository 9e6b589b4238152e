#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for Brightness Controller unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::error::{BrightnessControllerError, ErrorReporter};
use std::cell::RefCell;
use tempfile::TempDir;

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Reporter that keeps every reported error for later assertions
#[derive(Debug, Default)]
pub struct RecordingReporter {
    errors: RefCell<Vec<BrightnessControllerError>>,
}

impl RecordingReporter {
    /// Whether nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    /// Message box titles of the reported errors, in order
    pub fn titles(&self) -> Vec<&'static str> {
        self.errors.borrow().iter().map(BrightnessControllerError::title).collect()
    }

    /// Display strings of the reported errors, in order
    pub fn messages(&self) -> Vec<String> {
        self.errors.borrow().iter().map(ToString::to_string).collect()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: BrightnessControllerError) {
        self.errors.borrow_mut().push(error);
    }
}
