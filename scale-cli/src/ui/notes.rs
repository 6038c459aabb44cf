//! # Note Table
//!
//! One line per key: index, name and frequency to two decimals, followed by
//! the reference pitch moved a semitone each way.

use scale_core::ScaleReport;
use std::io::{self, Write};

/// Writes the 88-key frequency table.
pub fn write_note_table(out: &mut impl Write, report: &ScaleReport) -> io::Result<()> {
    writeln!(
        out,
        "Equal-tempered keyboard ({} = {} Hz)",
        report.reference.name, report.reference.frequency
    )?;
    for note in &report.notes {
        writeln!(out, "{:>2}  {:<4} {:>8.2}", note.key_index, note.name, note.frequency)?;
    }
    writeln!(out, "UP: {}", report.semitone_up)?;
    writeln!(out, "DOWN: {}", report.semitone_down)
}
