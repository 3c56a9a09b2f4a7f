// CLASSIFICATION: COMMUNITY
// Filename: tape.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Tape provisioning for generated code.

use crate::error::HarnessError;
use log::{debug, error};

/// Smallest tape the harness will ever hand to an entry point.
pub const MIN_TAPE_SIZE: usize = 30_000;

/// Zeroed memory region owned by the harness for one run.
#[derive(Debug)]
pub struct TapeRegion {
    cells: Box<[u8]>,
}

impl TapeRegion {
    /// Allocate a zeroed tape of at least [`MIN_TAPE_SIZE`] bytes.
    ///
    /// Requests below the minimum are raised to it. A request the allocator
    /// cannot satisfy yields [`HarnessError::ResourceExhaustion`].
    pub fn provision(requested: u64) -> Result<Self, HarnessError> {
        let size = effective_size(requested).ok_or_else(|| {
            error!("tape request of {requested} bytes exceeds the address space");
            HarnessError::ResourceExhaustion { size: requested }
        })?;

        let mut cells: Vec<u8> = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| {
            error!("allocator refused a tape of {size} bytes");
            HarnessError::ResourceExhaustion { size: size as u64 }
        })?;
        cells.resize(size, 0);

        let tape = Self {
            cells: cells.into_boxed_slice(),
        };
        debug!(
            "provisioned tape base=0x{:x} size=0x{:x} (requested 0x{:x})",
            tape.base_addr(),
            size,
            requested
        );
        Ok(tape)
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Address of the first cell.
    pub fn base_addr(&self) -> usize {
        self.cells.as_ptr() as usize
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Raw base pointer handed to the entry point.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.cells.as_mut_ptr()
    }
}

fn effective_size(requested: u64) -> Option<usize> {
    let requested = usize::try_from(requested).ok()?;
    Some(requested.max(MIN_TAPE_SIZE))
}
