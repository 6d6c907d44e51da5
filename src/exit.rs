// src/exit.rs
//! Standardized process exit codes for `wikigraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WikigraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, unreadable table).
    Error = 1,
    /// Input validation failed (bad config, malformed row, invalid JSON, duplicate key).
    InvalidInput = 2,
    /// Build finished but at least one dataset has no nodes.
    EmptyDataset = 3,
}

impl WikigraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed command.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        let invalid = err
            .chain()
            .filter_map(|cause| cause.downcast_ref::<crate::error::WikigraphError>())
            .any(crate::error::WikigraphError::is_invalid_input);
        if invalid {
            Self::InvalidInput
        } else {
            Self::Error
        }
    }
}

impl Termination for WikigraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
