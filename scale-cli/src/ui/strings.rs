//! # Plain String Table
//!
//! Each plain string with its ideal diameter and the nearest catalog gauge.
//! Covered strings have no entry in the report and are not printed.

use scale_core::ScaleReport;
use std::io::{self, Write};

/// Writes one line per plain string.
pub fn write_string_table(out: &mut impl Write, report: &ScaleReport) -> io::Result<()> {
    writeln!(
        out,
        "Plain strings at {} lbf, {} g/cm³",
        report.tension_lbf, report.relative_density
    )?;
    for result in &report.strings {
        writeln!(
            out,
            "{:>2}  {}: {:.5} cm  -> size {} ({:.3} mm, {:.1} lbf)",
            result.key_index,
            result.string,
            result.ideal_diameter_cm,
            result.gauge.wire.size,
            result.gauge.wire.diameter_mm,
            result.gauge_tension_lbf
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scale_core::{ScaleConfig, design_scale};

    #[test]
    fn prints_plain_strings_only() {
        let report = design_scale(&ScaleConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_string_table(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 62);
        assert_eq!(lines[0], "Plain strings at 180 lbf, 7.84 g/cm³");
        assert!(
            lines[1].starts_with("26  PianoString(B2, 113.9825 cm): 0.12811 cm  -> size 23 "),
            "{}",
            lines[1]
        );
        assert!(lines[62].starts_with("87  PianoString(C8, 6.2621 cm)"));
    }
}
