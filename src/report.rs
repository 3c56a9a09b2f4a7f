// CLASSIFICATION: COMMUNITY
// Filename: report.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use crate::bounds::{DataPointer, ValidationResult};
use std::io::{self, Write};

pub const OUT_OF_BOUNDS_MSG: &str = "Brainfuck code has errors! Data pointer went out of bounds!";

/// Print the run diagnostics: base, data pointer, then offset or error.
pub fn report<W: Write>(
    out: &mut W,
    base: usize,
    dp: DataPointer,
    result: ValidationResult,
) -> io::Result<()> {
    writeln!(out, " |        memory base  = {:#x}", base)?;
    writeln!(out, " |        data pointer = {:#x}", dp)?;
    match result {
        ValidationResult::InBounds { offset } => {
            writeln!(out, " | data pointer offset = {:#x}", offset)?
        }
        ValidationResult::OutOfBounds => writeln!(out, " | {OUT_OF_BOUNDS_MSG}")?,
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(base: usize, dp: usize, result: ValidationResult) -> String {
        let mut buf = Vec::new();
        report(&mut buf, base, DataPointer::from_addr(dp), result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn in_bounds_prints_offset() {
        let text = render(0x5000, 0x5000 + 30_000, ValidationResult::InBounds { offset: 30_000 });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                " |        memory base  = 0x5000",
                " |        data pointer = 0xc530",
                " | data pointer offset = 0x7530",
            ]
        );
    }

    #[test]
    fn out_of_bounds_prints_error_without_offset() {
        let text = render(0x5000, 0x4fff, ValidationResult::OutOfBounds);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("data pointer = 0x4fff"));
        assert!(text.ends_with(&format!(" | {OUT_OF_BOUNDS_MSG}\n")));
        assert!(!text.contains("offset"));
    }
}
