//! # Catalog Density Check
//!
//! Shows the density derived from each wire gauge next to the density the
//! scale is designed with.

use scale_core::ScaleReport;
use std::io::{self, Write};

/// Writes one line per catalog gauge plus the catalog mean.
pub fn write_density_check(out: &mut impl Write, report: &ScaleReport) -> io::Result<()> {
    writeln!(out, "Wire catalog density (design value {:.2} g/cm³)", report.relative_density)?;
    for check in &report.catalog_density {
        writeln!(
            out,
            "size {:>4}  {:.3} mm  {:>5.2} kg/km  {:.3} g/cm³  ({:+.3})",
            check.wire.size,
            check.wire.diameter_mm,
            check.wire.mass_kg_per_km,
            check.relative_density,
            check.deviation
        )?;
    }
    writeln!(out, "mean {:.3} g/cm³", report.mean_catalog_density)
}
