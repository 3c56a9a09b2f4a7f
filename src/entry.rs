// CLASSIFICATION: COMMUNITY
// Filename: entry.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Invocation of the generated entry point.
//!
//! The callee receives the tape base and returns its final data pointer.
//! Nothing it does is checked here; the returned address is passed on as-is.

use crate::bounds::DataPointer;
use crate::tape::TapeRegion;
use log::debug;

/// Native signature of generated code: `void *entry(void *tape)`.
pub type RawEntryFn = unsafe extern "C" fn(*mut u8) -> *mut u8;

/// Something callable with one address that returns one address.
pub trait EntryPoint {
    /// Run the entry point against `base`.
    ///
    /// # Safety
    /// `base` must point at a live tape. The callee may read or write any
    /// memory it likes; the caller trusts its contract.
    unsafe fn call(&mut self, base: *mut u8) -> *mut u8;
}

/// Entry point produced by the external compiler and linked in.
#[derive(Clone, Copy, Debug)]
pub struct NativeEntry {
    func: RawEntryFn,
}

impl NativeEntry {
    pub fn new(func: RawEntryFn) -> Self {
        Self { func }
    }
}

impl EntryPoint for NativeEntry {
    unsafe fn call(&mut self, base: *mut u8) -> *mut u8 {
        (self.func)(base)
    }
}

/// Adapter for in-process entry points written as closures.
pub struct FnEntry<F> {
    func: F,
}

pub fn from_fn<F>(func: F) -> FnEntry<F>
where
    F: FnMut(*mut u8) -> *mut u8,
{
    FnEntry { func }
}

impl<F> EntryPoint for FnEntry<F>
where
    F: FnMut(*mut u8) -> *mut u8,
{
    unsafe fn call(&mut self, base: *mut u8) -> *mut u8 {
        (self.func)(base)
    }
}

/// Call `entry` once with the tape base and capture the returned address.
pub fn invoke<E: EntryPoint + ?Sized>(entry: &mut E, tape: &mut TapeRegion) -> DataPointer {
    let base = tape.as_mut_ptr();
    debug!("invoking entry point with base={:p}", base);
    // SAFETY: `base` is the live, exclusively owned tape. Whatever the callee
    // does beyond that is its own contract.
    let dp = unsafe { entry.call(base) };
    debug!("entry point returned {:p}", dp);
    DataPointer::from_ptr(dp)
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn mark_and_step(base: *mut u8) -> *mut u8 {
        *base = 7;
        base.add(3)
    }

    #[test]
    fn native_entry_writes_tape_and_returns_pointer() {
        let mut tape = TapeRegion::provision(0).unwrap();
        let base = tape.base_addr();
        let mut entry = NativeEntry::new(mark_and_step);
        let dp = invoke(&mut entry, &mut tape);
        assert_eq!(dp.addr(), base + 3);
        assert_eq!(tape.as_slice()[0], 7);
    }

    #[test]
    fn closure_entry_is_called_exactly_once() {
        let mut calls = 0;
        let mut tape = TapeRegion::provision(0).unwrap();
        let base = tape.base_addr();
        let mut entry = from_fn(|p: *mut u8| {
            calls += 1;
            p
        });
        let dp = invoke(&mut entry, &mut tape);
        drop(entry);
        assert_eq!(calls, 1);
        assert_eq!(dp.addr(), base);
    }

    #[test]
    fn returned_address_is_not_interpreted() {
        let mut tape = TapeRegion::provision(0).unwrap();
        let mut entry = from_fn(|_| 0x10 as *mut u8);
        assert_eq!(invoke(&mut entry, &mut tape).addr(), 0x10);
    }
}
