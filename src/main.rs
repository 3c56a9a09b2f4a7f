// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Runs the linked `test` entry point once and traps into the debugger.

use std::io;
use tape_harness::{config, Breakpoint, Harness, HarnessConfig, NativeEntry};

extern "C" {
    /// Generated code: `void *test(void *tape)`.
    #[link_name = "test"]
    fn generated_entry(tape: *mut u8) -> *mut u8;
}

fn main() {
    let cfg = HarnessConfig::default();
    config::init_logging(&cfg);

    let mut entry = NativeEntry::new(generated_entry);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = Harness::new(cfg).run(&mut entry, &mut Breakpoint, &mut out) {
        log::error!("{err}");
        if err.is_fatal() {
            std::process::abort();
        }
    }
}
