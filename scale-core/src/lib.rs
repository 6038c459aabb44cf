// scale-core/src/lib.rs

//! The core logic for the piano string scale calculator.
//! This crate is responsible for the equal-tempered note table,
//! wire catalog calculations and ideal plain-string diameters. It is
//! completely headless and contains no console code.

pub mod config;
pub mod design;
pub mod error;
pub mod strings;
pub mod tuning;
pub mod wire;

pub use config::ScaleConfig;
pub use design::{ScaleDesign, ScaleReport, design_scale};
pub use error::{Error, Result};

use serde::Serialize;

/// Represents the computed result for a single plain string.
#[derive(Debug, Clone, Serialize)]
pub struct StringResult {
    /// The piano key index (0-87).
    pub key_index: usize,
    /// The string as laid out in the scale.
    pub string: strings::PianoString,
    /// Equal-tempered fundamental in Hz.
    pub frequency: f64,
    /// Ideal wire diameter in cm.
    pub ideal_diameter_cm: f64,
    /// The same diameter in mm, the unit the catalog uses.
    pub ideal_diameter_mm: f64,
    /// Nearest standard gauge in the catalog.
    pub gauge: wire::GaugeChoice,
    /// Tension the chosen gauge carries at this pitch, in lbf.
    pub gauge_tension_lbf: f64,
}
