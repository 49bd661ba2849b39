use anyhow::Result;
use std::io::Write;

use crate::mining::types::ScoredCandidate;

/// First line of the result table.
pub const REPORT_HEADER: &str = "NGRAM COVERAGE";

/// Writes the final result table: the header, then one
/// `<candidate-symbols> <coverage>` line per retained entry, in the order
/// `finalize` produced (descending coverage, ties in arrival order).
pub fn write_report(out: &mut impl Write, results: &[ScoredCandidate]) -> Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    for entry in results {
        writeln!(out, "{} {}", entry.candidate, entry.coverage)?;
    }
    out.flush()?;
    Ok(())
}
