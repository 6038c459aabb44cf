//! # Musical Tuning Module
//!
//! This module builds the equal-tempered frequency table for a standard
//! 88-key piano and provides the semitone arithmetic it is derived from.
//!
//! ## Features
//! - 88-key piano note mapping (A0 to C8)
//! - Equal temperament frequency calculations from any reference pitch
//! - Note name to key index and key index to note name lookups
//! - Semitone up/down/offset helpers

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{Error, Result, require_positive};

/// Number of keys on a standard piano.
pub const KEY_COUNT: usize = 88;

/// Number of semitones in one octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Concert pitch used when nothing else is configured.
pub const DEFAULT_REFERENCE_FREQUENCY: f64 = 440.0;

/// Note the reference frequency is pinned to.
pub const DEFAULT_REFERENCE_NOTE: &str = "A4";

/// Pitch classes in keyboard order starting from the lowest key (A0).
const NOTE_NAMES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Moves a frequency one semitone up.
pub fn semitone_up(freq: f64) -> f64 {
    freq * 2.0_f64.powf(1.0 / 12.0)
}

/// Moves a frequency one semitone down.
pub fn semitone_down(freq: f64) -> f64 {
    freq * 0.5_f64.powf(1.0 / 12.0)
}

/// Moves a frequency by `offset` semitones; negative offsets move down.
///
/// # Arguments
/// * `freq` - Starting frequency in Hz
/// * `offset` - Number of semitones to move
///
/// # Returns
/// * The shifted frequency, `freq * 2^(offset / 12)`
pub fn semitone_offset(freq: f64, offset: i32) -> f64 {
    freq * 2.0_f64.powf(offset as f64 / SEMITONES_PER_OCTAVE as f64)
}

/// Name of the key at `key_index` (0 is A0, 87 is C8).
///
/// The octave number changes at C, so the three keys below C1 belong to
/// octave 0.
fn key_name(key_index: usize) -> String {
    let octave = (key_index + 9) / 12;
    format!("{}{}", NOTE_NAMES[key_index % 12], octave)
}

/// Represents a single piano key with its name and frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    /// Position on the keyboard (0-87)
    pub key_index: u8,
    /// Note name (e.g., "A4", "C#3")
    pub name: String,
    /// Frequency in Hz
    pub frequency: f64,
}

/// Equal-tempered frequencies of all 88 keys.
///
/// Keeps the keys in pitch order for positional work and a separate
/// name index for lookups. Built once and never mutated.
#[derive(Debug, Clone)]
pub struct NoteTable {
    notes: Vec<Note>,
    index: BTreeMap<String, u8>,
    reference_index: usize,
}

impl NoteTable {
    /// The standard table, A4 = 440 Hz.
    pub fn standard() -> Self {
        Self::build(DEFAULT_REFERENCE_FREQUENCY, 48)
    }

    /// Builds the table with `reference_note` pinned to `reference_frequency`.
    ///
    /// # Errors
    /// * `InvalidParameter` - the reference frequency is not positive and finite
    /// * `UnknownNote` - the reference note is not one of the 88 keys
    pub fn equal_tempered(reference_frequency: f64, reference_note: &str) -> Result<Self> {
        let reference_frequency = require_positive("reference_frequency", reference_frequency)?;
        let reference_index = (0..KEY_COUNT)
            .find(|&i| key_name(i) == reference_note)
            .ok_or_else(|| Error::UnknownNote(reference_note.to_string()))?;

        Ok(Self::build(reference_frequency, reference_index))
    }

    fn build(reference_frequency: f64, reference_index: usize) -> Self {
        let notes: Vec<Note> = (0..KEY_COUNT)
            .map(|i| Note {
                key_index: i as u8,
                name: key_name(i),
                frequency: semitone_offset(reference_frequency, i as i32 - reference_index as i32),
            })
            .collect();

        let index = notes
            .iter()
            .map(|note| (note.name.clone(), note.key_index))
            .collect();

        debug!(
            reference = %notes[reference_index].name,
            reference_frequency,
            lowest = notes[0].frequency,
            highest = notes[KEY_COUNT - 1].frequency,
            "built equal-tempered note table"
        );

        Self {
            notes,
            index,
            reference_index,
        }
    }

    /// Frequency of the named note in Hz.
    pub fn frequency(&self, name: &str) -> Result<f64> {
        Ok(self.note(self.key_index(name)? as usize)?.frequency)
    }

    /// Gets the 88-key piano index from a note name.
    ///
    /// Unlike a lenient lookup, an unknown name is an error rather than key 0.
    pub fn key_index(&self, name: &str) -> Result<u8> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownNote(name.to_string()))
    }

    /// The note at a key index (0 is A0, 87 is C8).
    pub fn note(&self, key_index: usize) -> Result<&Note> {
        self.notes
            .get(key_index)
            .ok_or(Error::KeyOutOfRange(key_index))
    }

    /// The note the table was tuned from.
    pub fn reference(&self) -> &Note {
        &self.notes[self.reference_index]
    }

    /// Notes in ascending pitch order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<'a> IntoIterator for &'a NoteTable {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
