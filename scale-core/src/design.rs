//! # Scale Design Module
//!
//! Ties the note table, string layout and wire catalog together and works
//! out every plain string of a configured scale.

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    StringResult,
    config::ScaleConfig,
    error::Result,
    strings::{StringLayout, tension_lbf},
    tuning::{Note, NoteTable, semitone_down, semitone_up},
    wire::{DensityCheck, WireCatalog},
};

/// Everything needed to evaluate one scale, built once from a config.
#[derive(Debug, Clone)]
pub struct ScaleDesign {
    pub notes: NoteTable,
    pub layout: StringLayout,
    pub catalog: WireCatalog,
    pub tension_lbf: f64,
    pub relative_density: f64,
}

/// Output of a full design run.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleReport {
    pub reference: Note,
    /// Reference pitch moved one semitone up.
    pub semitone_up: f64,
    /// Reference pitch moved one semitone down.
    pub semitone_down: f64,
    pub notes: Vec<Note>,
    pub tension_lbf: f64,
    pub relative_density: f64,
    pub catalog_density: Vec<DensityCheck>,
    pub mean_catalog_density: f64,
    pub strings: Vec<StringResult>,
}

impl ScaleDesign {
    /// Validates `config` and builds the tables it describes.
    pub fn new(config: &ScaleConfig) -> Result<Self> {
        config.validate()?;

        let notes = NoteTable::equal_tempered(config.reference_frequency, &config.reference_note)?;
        let layout = StringLayout::new(
            &notes,
            config.plain_start_index,
            &config.speaking_lengths_cm,
        )?;
        let catalog = WireCatalog::new(config.catalog.clone())?;

        debug!(
            plain_start = layout.plain_start(),
            gauges = catalog.wires().len(),
            "scale design initialised"
        );

        Ok(Self {
            notes,
            layout,
            catalog,
            tension_lbf: config.tension_lbf,
            relative_density: config.relative_density,
        })
    }

    /// Works out the plain string at `key_index`.
    ///
    /// Fails with `CoveredString` for covered slots.
    pub fn string_result(&self, key_index: usize) -> Result<StringResult> {
        let string = self.layout.plain(key_index)?;
        let frequency = self.notes.frequency(&string.note)?;
        let ideal_diameter_cm =
            string.ideal_diameter_cm(&self.notes, self.tension_lbf, self.relative_density)?;
        let ideal_diameter_mm = ideal_diameter_cm * 10.0;

        let gauge = self.catalog.nearest(ideal_diameter_mm)?;
        let gauge_tension_lbf = tension_lbf(
            frequency,
            string.speaking_length_cm,
            gauge.wire.diameter_mm / 10.0,
            self.relative_density,
        )?;

        debug!(
            key_index,
            note = %string.note,
            ideal_diameter_mm,
            gauge = gauge.wire.size,
            gauge_tension_lbf,
            "string computed"
        );

        Ok(StringResult {
            key_index,
            string: string.clone(),
            frequency,
            ideal_diameter_cm,
            ideal_diameter_mm,
            gauge,
            gauge_tension_lbf,
        })
    }

    /// Computes every plain string in the layout; covered slots are skipped.
    pub fn strings(&self) -> Result<Vec<StringResult>> {
        self.layout
            .plain_strings()
            .map(|(key_index, _)| self.string_result(key_index))
            .collect()
    }

    /// Runs the whole design.
    pub fn report(&self) -> Result<ScaleReport> {
        let reference = self.notes.reference().clone();
        let catalog_density = self.catalog.density_checks(self.relative_density)?;
        let mean_catalog_density = self.catalog.mean_density()?;
        let strings = self.strings()?;

        info!(
            reference = %reference.name,
            strings = strings.len(),
            mean_catalog_density,
            "scale design complete"
        );

        Ok(ScaleReport {
            semitone_up: semitone_up(reference.frequency),
            semitone_down: semitone_down(reference.frequency),
            reference,
            notes: self.notes.iter().cloned().collect(),
            tension_lbf: self.tension_lbf,
            relative_density: self.relative_density,
            catalog_density,
            mean_catalog_density,
            strings,
        })
    }
}

/// Builds and runs a design in one step.
pub fn design_scale(config: &ScaleConfig) -> Result<ScaleReport> {
    ScaleDesign::new(config)?.report()
}
