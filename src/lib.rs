// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Execution harness for compiled tape programs.
//!
//! Provisions a zeroed tape, hands its base to a generated entry point,
//! checks where the returned data pointer landed and then stops for a
//! debugger.

/// Tape allocation
pub mod tape;

/// Entry point capability and invocation
pub mod entry;

/// Data pointer bounds check
pub mod bounds;

/// Diagnostic output
pub mod report;

/// Debugger trap
pub mod trap;

/// Run state machine
pub mod harness;

pub mod config;
pub mod error;

pub use bounds::{DataPointer, ValidationResult};
pub use config::HarnessConfig;
pub use entry::{EntryPoint, NativeEntry};
pub use error::HarnessError;
pub use harness::{Harness, RunReport, Stage};
pub use tape::{TapeRegion, MIN_TAPE_SIZE};
pub use trap::{Breakpoint, DebugTrap};
