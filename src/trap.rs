// CLASSIFICATION: COMMUNITY
// Filename: trap.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Debugger hand-off after a run has been reported.
//!
//! With no debugger attached the trap falls through to the platform default,
//! which on most hosts terminates the process.

#![allow(unsafe_code)]

use log::info;

/// Ask an attached debugger to stop the process here.
pub trait DebugTrap {
    fn request_attention(&mut self);
}

/// Hardware breakpoint for the host architecture.
#[derive(Clone, Copy, Debug, Default)]
pub struct Breakpoint;

impl DebugTrap for Breakpoint {
    fn request_attention(&mut self) {
        info!("requesting debugger attention");
        breakpoint();
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[inline(always)]
fn breakpoint() {
    unsafe {
        core::arch::asm!("int3", options(nomem, nostack));
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn breakpoint() {
    unsafe {
        core::arch::asm!("brk #0xf000", options(nomem, nostack));
    }
}

#[cfg(all(
    unix,
    not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"))
))]
fn breakpoint() {
    unsafe {
        libc::raise(libc::SIGTRAP);
    }
}

#[cfg(not(any(
    unix,
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64"
)))]
fn breakpoint() {
    std::process::abort();
}

/// Trap that records requests instead of stopping. Used by tests.
#[derive(Debug, Default)]
pub struct CountingTrap {
    pub hits: usize,
}

impl DebugTrap for CountingTrap {
    fn request_attention(&mut self) {
        self.hits += 1;
    }
}
