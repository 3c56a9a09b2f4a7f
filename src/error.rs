// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::io;
use thiserror::Error;

/// Failures the harness can report to its caller.
///
/// Bounds violations are not errors; they travel as
/// [`ValidationResult::OutOfBounds`](crate::bounds::ValidationResult).
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unable to provision a tape of {size} bytes")]
    ResourceExhaustion { size: u64 },
    #[error("report output failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid harness config: {0}")]
    Config(#[from] toml::de::Error),
}

impl HarnessError {
    /// True for errors the process cannot continue past.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HarnessError::ResourceExhaustion { .. })
    }
}
