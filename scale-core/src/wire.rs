//! # Wire Catalog Module
//!
//! Music wire catalog data and the calculations made directly against it:
//! material density from a catalog entry, and picking the standard gauge
//! closest to a computed diameter.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::warn;

use crate::error::{Error, Result, require_positive};

/// Density of steel music wire in g/cm³, used as the default material.
pub const STEEL_RELATIVE_DENSITY: f64 = 7.84;

/// One catalog entry: a wire gauge with its diameter and linear mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireSpec {
    /// Nominal gauge size; only used as a label.
    pub size: f64,
    /// Diameter in millimeters.
    pub diameter_mm: f64,
    /// Linear mass in kilograms per kilometer.
    pub mass_kg_per_km: f64,
}

impl WireSpec {
    pub const fn new(size: f64, diameter_mm: f64, mass_kg_per_km: f64) -> Self {
        Self {
            size,
            diameter_mm,
            mass_kg_per_km,
        }
    }

    /// Relative density of the wire material in g/cm³.
    ///
    /// Works on a 1 cm slice of the wire: kg/km is converted to g/cm and
    /// divided by the cross-section of the slice.
    pub fn relative_density(&self) -> Result<f64> {
        let diameter_mm = require_positive("diameter_mm", self.diameter_mm)?;
        let mass = require_positive("mass_kg_per_km", self.mass_kg_per_km)?;

        let mass_per_cm = mass / 100.0;
        let radius_cm = (diameter_mm / 10.0) / 2.0;
        let area = PI * radius_cm * radius_cm;
        Ok(mass_per_cm / area)
    }
}

/// Röslau music wire, sizes 12 to 25.
pub const ROESLAU: [WireSpec; 22] = [
    WireSpec::new(12.0, 0.725, 3.24),
    WireSpec::new(12.5, 0.750, 3.47),
    WireSpec::new(13.0, 0.775, 3.70),
    WireSpec::new(13.5, 0.800, 3.95),
    WireSpec::new(14.0, 0.825, 4.20),
    WireSpec::new(14.5, 0.850, 4.45),
    WireSpec::new(15.0, 0.875, 4.72),
    WireSpec::new(15.5, 0.900, 4.99),
    WireSpec::new(16.0, 0.925, 5.28),
    WireSpec::new(16.5, 0.950, 5.56),
    WireSpec::new(17.0, 0.975, 5.86),
    WireSpec::new(17.5, 1.000, 6.17),
    WireSpec::new(18.0, 1.025, 6.48),
    WireSpec::new(18.5, 1.050, 6.80),
    WireSpec::new(19.0, 1.075, 7.12),
    WireSpec::new(19.5, 1.100, 7.46),
    WireSpec::new(20.0, 1.125, 7.80),
    WireSpec::new(21.0, 1.175, 8.51),
    WireSpec::new(22.0, 1.225, 9.25),
    WireSpec::new(23.0, 1.275, 10.02),
    WireSpec::new(24.0, 1.325, 10.82),
    WireSpec::new(25.0, 1.375, 11.66),
];

/// Density check result for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityCheck {
    pub wire: WireSpec,
    /// g/cm³ derived from the entry.
    pub relative_density: f64,
    /// Difference from the density the scale is designed with.
    pub deviation: f64,
}

/// The nearest standard gauge for an ideal diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeChoice {
    pub wire: WireSpec,
    /// Chosen diameter minus ideal diameter, in millimeters.
    pub deviation_mm: f64,
}

/// A validated, non-empty wire catalog sorted by diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct WireCatalog {
    wires: Vec<WireSpec>,
}

impl WireCatalog {
    /// Validates and sorts the entries.
    ///
    /// # Errors
    /// * `InvalidParameter` - the catalog is empty or an entry has a
    ///   non-positive diameter or mass
    pub fn new(mut wires: Vec<WireSpec>) -> Result<Self> {
        if wires.is_empty() {
            return Err(Error::InvalidParameter {
                name: "catalog",
                value: "[]".to_string(),
                reason: "must contain at least one wire".to_string(),
            });
        }
        for wire in &wires {
            require_positive("diameter_mm", wire.diameter_mm)?;
            require_positive("mass_kg_per_km", wire.mass_kg_per_km)?;
        }
        wires.sort_by(|a, b| a.diameter_mm.total_cmp(&b.diameter_mm));
        Ok(Self { wires })
    }

    /// The built-in Röslau catalog.
    pub fn roeslau() -> Self {
        Self {
            wires: ROESLAU.to_vec(),
        }
    }

    pub fn wires(&self) -> &[WireSpec] {
        &self.wires
    }

    /// Derives the density of every entry and compares it to `expected`.
    pub fn density_checks(&self, expected: f64) -> Result<Vec<DensityCheck>> {
        self.wires
            .iter()
            .map(|wire| {
                let relative_density = wire.relative_density()?;
                Ok(DensityCheck {
                    wire: *wire,
                    relative_density,
                    deviation: relative_density - expected,
                })
            })
            .collect()
    }

    /// Average density over the catalog in g/cm³.
    pub fn mean_density(&self) -> Result<f64> {
        let total = self
            .wires
            .iter()
            .map(WireSpec::relative_density)
            .sum::<Result<f64>>()?;
        Ok(total / self.wires.len() as f64)
    }

    /// Finds the catalog gauge closest to `ideal_diameter_mm`.
    ///
    /// Ties go to the thinner wire. Diameters outside the catalog still get
    /// the closest end of the range.
    pub fn nearest(&self, ideal_diameter_mm: f64) -> Result<GaugeChoice> {
        let ideal = require_positive("ideal_diameter_mm", ideal_diameter_mm)?;

        // Sorted ascending, so the first minimum is the thinner one on a tie.
        let mut best = self.wires[0];
        for wire in &self.wires[1..] {
            if (wire.diameter_mm - ideal).abs() < (best.diameter_mm - ideal).abs() {
                best = *wire;
            }
        }

        let thinnest = self.wires[0].diameter_mm;
        let thickest = self.wires[self.wires.len() - 1].diameter_mm;
        if ideal < thinnest || ideal > thickest {
            warn!(
                ideal_diameter_mm = ideal,
                thinnest, thickest, "ideal diameter is outside the catalog range"
            );
        }

        Ok(GaugeChoice {
            wire: best,
            deviation_mm: best.diameter_mm - ideal,
        })
    }
}

impl Default for WireCatalog {
    fn default() -> Self {
        Self::roeslau()
    }
}
