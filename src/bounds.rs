// CLASSIFICATION: COMMUNITY
// Filename: bounds.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Bounds check for the data pointer returned by generated code.

use crate::tape::TapeRegion;
use std::fmt;

/// Address returned by an entry point. Never dereferenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataPointer(usize);

impl DataPointer {
    pub fn from_ptr(ptr: *const u8) -> Self {
        Self(ptr as usize)
    }

    pub fn from_addr(addr: usize) -> Self {
        Self(addr)
    }

    pub fn addr(self) -> usize {
        self.0
    }
}

impl fmt::LowerHex for DataPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Where the data pointer ended up relative to its tape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    InBounds { offset: usize },
    OutOfBounds,
}

impl ValidationResult {
    pub fn is_in_bounds(&self) -> bool {
        matches!(self, ValidationResult::InBounds { .. })
    }

    pub fn offset(&self) -> Option<usize> {
        match *self {
            ValidationResult::InBounds { offset } => Some(offset),
            ValidationResult::OutOfBounds => None,
        }
    }
}

/// Check `dp` against `tape`.
pub fn validate(tape: &TapeRegion, dp: DataPointer) -> ValidationResult {
    check(tape.base_addr(), tape.size(), dp)
}

/// In bounds iff `base <= dp <= base + size`.
///
/// The upper bound is inclusive: a pointer one past the last cell counts as
/// in bounds.
pub fn check(base: usize, size: usize, dp: DataPointer) -> ValidationResult {
    match dp.addr().checked_sub(base) {
        Some(offset) if offset <= size => ValidationResult::InBounds { offset },
        _ => ValidationResult::OutOfBounds,
    }
}
