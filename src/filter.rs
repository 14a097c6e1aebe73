//! Line filter
//!
//! Streams lines from a reader through a compiled pattern, writing each
//! whole-line match verbatim in input order. Lines are independent; the
//! pattern is read-only once compiled, and a non-matching line is normal
//! control flow, not an error.

use std::io::{BufRead, Write};

use crate::compiler::CompiledPattern;

/// Filter `input` through `pattern`, emitting matching lines to `output`.
///
/// Reads until the input is exhausted and returns the number of emitted
/// lines. Read and write failures are surfaced as the underlying
/// `io::Error`; the run ends at the first one.
pub fn filter_lines<R: BufRead, W: Write>(
    pattern: &CompiledPattern,
    input: R,
    mut output: W,
) -> std::io::Result<u64> {
    let mut emitted = 0;
    for line in input.lines() {
        let line = line?;
        if pattern.is_match(&line) {
            writeln!(output, "{}", line)?;
            emitted += 1;
        }
    }
    Ok(emitted)
}
