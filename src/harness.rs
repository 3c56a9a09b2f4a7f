// CLASSIFICATION: COMMUNITY
// Filename: harness.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! One provision/invoke/validate/report/trap cycle.
//!
//! Stages advance strictly in order:
//! `Start → Provisioned → Invoked → Validated → Reported → Trapped → Released → End`.
//! An out-of-bounds pointer changes only what is printed.

use crate::bounds::{self, DataPointer, ValidationResult};
use crate::config::HarnessConfig;
use crate::entry::{invoke, EntryPoint};
use crate::error::HarnessError;
use crate::report;
use crate::tape::TapeRegion;
use crate::trap::DebugTrap;
use log::{debug, error, warn};
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    Provisioned,
    Invoked,
    Validated,
    Reported,
    Trapped,
    Released,
    End,
}

/// What a completed run observed. The tape itself is gone by now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub base: usize,
    pub tape_size: usize,
    pub data_pointer: DataPointer,
    pub result: ValidationResult,
    pub stages: Vec<Stage>,
}

pub struct Harness {
    config: HarnessConfig,
    stages: Vec<Stage>,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            stages: vec![Stage::Start],
        }
    }

    pub fn stage(&self) -> Stage {
        self.stages.last().copied().unwrap_or(Stage::Start)
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(next > self.stage(), "stage {:?} after {:?}", next, self.stage());
        debug!("harness stage {:?} -> {:?}", self.stage(), next);
        self.stages.push(next);
    }

    /// Run the entry point once against a fresh tape.
    ///
    /// Diagnostics go to `out`; `trap` is asked for attention exactly once
    /// before the tape is released, even when writing `out` failed. Only
    /// provisioning and output failures return `Err`.
    pub fn run<E, T, W>(
        mut self,
        entry: &mut E,
        trap: &mut T,
        out: &mut W,
    ) -> Result<RunReport, HarnessError>
    where
        E: EntryPoint + ?Sized,
        T: DebugTrap + ?Sized,
        W: Write,
    {
        let mut tape = TapeRegion::provision(self.config.requested_size)?;
        self.advance(Stage::Provisioned);

        let dp = invoke(entry, &mut tape);
        self.advance(Stage::Invoked);

        let result = bounds::validate(&tape, dp);
        if result == ValidationResult::OutOfBounds {
            warn!(
                "data pointer 0x{:x} left tape [0x{:x}, 0x{:x}]",
                dp,
                tape.base_addr(),
                tape.base_addr() + tape.size()
            );
        }
        self.advance(Stage::Validated);

        let base = tape.base_addr();
        let tape_size = tape.size();
        let reported = report::report(out, base, dp, result);
        if let Err(e) = &reported {
            error!("report output failed: {e}");
        }
        self.advance(Stage::Reported);

        trap.request_attention();
        self.advance(Stage::Trapped);

        drop(tape);
        self.advance(Stage::Released);
        self.advance(Stage::End);

        reported?;
        Ok(RunReport {
            base,
            tape_size,
            data_pointer: dp,
            result,
            stages: self.stages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::from_fn;
    use crate::trap::CountingTrap;

    #[test]
    fn identity_entry_walks_every_stage() {
        let mut trap = CountingTrap::default();
        let mut out = Vec::new();
        let report = Harness::new(HarnessConfig::default())
            .run(&mut from_fn(|p| p), &mut trap, &mut out)
            .unwrap();
        assert_eq!(
            report.stages,
            [
                Stage::Start,
                Stage::Provisioned,
                Stage::Invoked,
                Stage::Validated,
                Stage::Reported,
                Stage::Trapped,
                Stage::Released,
                Stage::End,
            ]
        );
        assert_eq!(report.result, ValidationResult::InBounds { offset: 0 });
        assert_eq!(trap.hits, 1);
    }

    #[test]
    fn output_failure_still_traps() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let mut trap = CountingTrap::default();
        let err = Harness::new(HarnessConfig::default())
            .run(&mut from_fn(|p| p), &mut trap, &mut Broken)
            .unwrap_err();
        assert!(matches!(err, HarnessError::Io(_)));
        assert_eq!(trap.hits, 1);
    }

    #[test]
    fn new_harness_starts_at_start() {
        assert_eq!(Harness::new(HarnessConfig::default()).stage(), Stage::Start);
    }
}
