//! # String Scale Module
//!
//! The plain-string layout of the piano and the Mersenne–Taylor relation
//! between frequency, speaking length, tension, density and diameter.
//!
//! Covered (wound) bass strings are part of the layout only as
//! [`StringSlot::Covered`] markers; nothing here models their mass.

use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

use crate::error::{Error, Result, require_positive};
use crate::tuning::{KEY_COUNT, NoteTable};

/// Dynes in one pound-force.
pub const LBF_TO_DYNE: f64 = 444_822.168;

/// Tension the default scale is designed for, in pounds-force.
pub const DEFAULT_TENSION_LBF: f64 = 180.0;

/// First key of the default layout carrying a plain string.
pub const DEFAULT_PLAIN_START: usize = 26;

/// Speaking lengths in cm of the default plain strings, B2 up to C8.
pub const DEFAULT_SPEAKING_LENGTHS_CM: [f64; KEY_COUNT - DEFAULT_PLAIN_START] = [
    113.9825, 108.3516, 103.0095, 97.9409, 93.1314, 88.5672,
    84.2354, 80.1237, 76.2206, 72.5152, 68.9970, 65.6563,
    62.4838, 59.4708, 56.6089, 53.8902, 51.3075, 48.8536,
    46.5218, 44.3059, 42.1999, 40.1982, 38.2954, 36.4864,
    34.7664, 33.1310, 31.5757, 30.0966, 28.6897, 27.3514,
    26.0782, 24.8669, 23.7142, 22.6173, 21.5734, 20.5798,
    19.6340, 18.7336, 17.8763, 17.0600, 16.2826, 15.5423,
    14.8372, 14.1655, 13.5256, 12.9159, 12.3350, 11.7815,
    11.2539, 10.7511, 10.2718, 9.8149, 9.3792, 8.9638,
    8.5677, 8.1900, 7.8297, 7.4860, 7.1582, 6.8454,
    6.5469, 6.2621,
];

/// `K` in `d = sqrt(K·T) / (f·L)`: dynes per lbf over `ρ·π`.
pub fn conversion_factor(relative_density: f64) -> Result<f64> {
    let density = require_positive("relative_density", relative_density)?;
    Ok(LBF_TO_DYNE / (density * PI))
}

/// Ideal diameter in cm of a wire sounding `frequency` over `speaking_length_cm`.
///
/// # Arguments
/// * `frequency` - Fundamental in Hz
/// * `speaking_length_cm` - Vibrating length in cm
/// * `tension_lbf` - Target tension in pounds-force
/// * `relative_density` - Wire material density in g/cm³
///
/// # Errors
/// * `InvalidParameter` - any argument is zero, negative or not finite
pub fn ideal_diameter_cm(
    frequency: f64,
    speaking_length_cm: f64,
    tension_lbf: f64,
    relative_density: f64,
) -> Result<f64> {
    let frequency = require_positive("frequency", frequency)?;
    let length = require_positive("speaking_length_cm", speaking_length_cm)?;
    let tension = require_positive("tension_lbf", tension_lbf)?;
    let k = conversion_factor(relative_density)?;

    Ok((k * tension).sqrt() / (frequency * length))
}

/// Tension in lbf a wire of `diameter_cm` carries at the given pitch and length.
///
/// Inverse of [`ideal_diameter_cm`].
pub fn tension_lbf(
    frequency: f64,
    speaking_length_cm: f64,
    diameter_cm: f64,
    relative_density: f64,
) -> Result<f64> {
    let frequency = require_positive("frequency", frequency)?;
    let length = require_positive("speaking_length_cm", speaking_length_cm)?;
    let diameter = require_positive("diameter_cm", diameter_cm)?;
    let k = conversion_factor(relative_density)?;

    let root = diameter * frequency * length;
    Ok(root * root / k)
}

/// One plain string: the note it sounds and its speaking length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PianoString {
    pub note: String,
    pub speaking_length_cm: f64,
}

impl PianoString {
    pub fn new(note: impl Into<String>, speaking_length_cm: f64) -> Result<Self> {
        Ok(Self {
            note: note.into(),
            speaking_length_cm: require_positive("speaking_length_cm", speaking_length_cm)?,
        })
    }

    /// Ideal diameter in cm of this string in the given tuning.
    pub fn ideal_diameter_cm(
        &self,
        notes: &NoteTable,
        tension_lbf: f64,
        relative_density: f64,
    ) -> Result<f64> {
        let frequency = notes.frequency(&self.note)?;
        ideal_diameter_cm(frequency, self.speaking_length_cm, tension_lbf, relative_density)
    }
}

impl fmt::Display for PianoString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PianoString({}, {:.4} cm)", self.note, self.speaking_length_cm)
    }
}

/// A position in the 88-key string layout.
#[derive(Debug, Clone, PartialEq)]
pub enum StringSlot {
    /// Wound bass string, not modeled.
    Covered,
    /// Plain wire string.
    Plain(PianoString),
}

impl StringSlot {
    pub fn as_plain(&self) -> Option<&PianoString> {
        match self {
            StringSlot::Plain(string) => Some(string),
            StringSlot::Covered => None,
        }
    }
}

/// The full keyboard of strings: covered slots below `plain_start`, plain above.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLayout {
    slots: Vec<StringSlot>,
    plain_start: usize,
}

impl StringLayout {
    /// Builds a layout whose plain strings start at `plain_start`.
    ///
    /// `speaking_lengths_cm[i]` belongs to key `plain_start + i`; there must
    /// be exactly one length per key from `plain_start` to the top of the
    /// keyboard.
    pub fn new(notes: &NoteTable, plain_start: usize, speaking_lengths_cm: &[f64]) -> Result<Self> {
        if plain_start > KEY_COUNT {
            return Err(Error::KeyOutOfRange(plain_start));
        }
        let expected = KEY_COUNT - plain_start;
        if speaking_lengths_cm.len() != expected {
            return Err(Error::InvalidParameter {
                name: "speaking_lengths_cm",
                value: format!("{} lengths", speaking_lengths_cm.len()),
                reason: format!("expected {expected} for plain strings from key {plain_start}"),
            });
        }

        let mut slots = vec![StringSlot::Covered; plain_start];
        for (offset, &length) in speaking_lengths_cm.iter().enumerate() {
            let note = notes.note(plain_start + offset)?;
            slots.push(StringSlot::Plain(PianoString::new(note.name.clone(), length)?));
        }

        Ok(Self { slots, plain_start })
    }

    /// The default layout: covered strings below B2, the built-in lengths above.
    pub fn standard(notes: &NoteTable) -> Result<Self> {
        Self::new(notes, DEFAULT_PLAIN_START, &DEFAULT_SPEAKING_LENGTHS_CM)
    }

    pub fn plain_start(&self) -> usize {
        self.plain_start
    }

    pub fn slot(&self, key_index: usize) -> Result<&StringSlot> {
        self.slots
            .get(key_index)
            .ok_or(Error::KeyOutOfRange(key_index))
    }

    /// The plain string at `key_index`.
    ///
    /// # Errors
    /// * `CoveredString` - the slot holds a covered string
    /// * `KeyOutOfRange` - the index is past the keyboard
    pub fn plain(&self, key_index: usize) -> Result<&PianoString> {
        self.slot(key_index)?
            .as_plain()
            .ok_or(Error::CoveredString(key_index))
    }

    /// Plain strings with their key indices, lowest first.
    pub fn plain_strings(&self) -> impl Iterator<Item = (usize, &PianoString)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_plain().map(|string| (i, string)))
    }

    /// Ideal diameter in cm of the plain string at `key_index`.
    pub fn ideal_diameter_cm(
        &self,
        key_index: usize,
        notes: &NoteTable,
        tension_lbf: f64,
        relative_density: f64,
    ) -> Result<f64> {
        self.plain(key_index)?
            .ideal_diameter_cm(notes, tension_lbf, relative_density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::STEEL_RELATIVE_DENSITY;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn standard() -> (NoteTable, StringLayout) {
        let notes = NoteTable::standard();
        let layout = StringLayout::standard(&notes).unwrap();
        (notes, layout)
    }

    #[test]
    fn conversion_factor_for_steel() {
        let k = conversion_factor(STEEL_RELATIVE_DENSITY).unwrap();
        assert_relative_eq!(k, 444_822.168 / (7.84 * PI), max_relative = 1e-15);
        assert!(conversion_factor(0.0).is_err());
    }

    #[test]
    fn first_plain_string_diameter() {
        let (notes, layout) = standard();
        let string = layout.plain(26).unwrap();
        assert_eq!(string.note, "B2");
        assert_eq!(string.speaking_length_cm, 113.9825);

        let d = layout
            .ideal_diameter_cm(26, &notes, DEFAULT_TENSION_LBF, STEEL_RELATIVE_DENSITY)
            .unwrap();
        assert!(d > 0.0);
        assert_relative_eq!(d, 0.12811, epsilon = 1e-4);
    }

    #[test]
    fn diameters_shrink_up_the_scale() {
        let (notes, layout) = standard();
        let diameters: Vec<f64> = layout
            .plain_strings()
            .map(|(_, s)| {
                s.ideal_diameter_cm(&notes, DEFAULT_TENSION_LBF, STEEL_RELATIVE_DENSITY)
                    .unwrap()
            })
            .collect();
        assert_eq!(diameters.len(), KEY_COUNT - DEFAULT_PLAIN_START);
        for pair in diameters.windows(2) {
            assert!(pair[1] < pair[0], "{} !< {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn covered_slots_cannot_be_dereferenced() {
        let (notes, layout) = standard();
        for key in 0..DEFAULT_PLAIN_START {
            assert_eq!(layout.slot(key).unwrap(), &StringSlot::Covered);
            assert!(matches!(
                layout.ideal_diameter_cm(key, &notes, DEFAULT_TENSION_LBF, STEEL_RELATIVE_DENSITY),
                Err(Error::CoveredString(k)) if k == key
            ));
        }
        assert!(matches!(layout.plain(88), Err(Error::KeyOutOfRange(88))));
    }

    #[test]
    fn tension_inverts_diameter() {
        let d = ideal_diameter_cm(440.0, 38.0, 160.0, STEEL_RELATIVE_DENSITY).unwrap();
        let t = tension_lbf(440.0, 38.0, d, STEEL_RELATIVE_DENSITY).unwrap();
        assert_relative_eq!(t, 160.0, max_relative = 1e-12);
    }

    #[test]
    fn heavier_tension_needs_thicker_wire() {
        let light = ideal_diameter_cm(261.63, 60.0, 150.0, STEEL_RELATIVE_DENSITY).unwrap();
        let heavy = ideal_diameter_cm(261.63, 60.0, 200.0, STEEL_RELATIVE_DENSITY).unwrap();
        assert!(heavy > light);
        assert_relative_eq!(heavy / light, (200.0_f64 / 150.0).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn formula_rejects_non_positive_inputs() {
        let d = STEEL_RELATIVE_DENSITY;
        assert!(ideal_diameter_cm(0.0, 50.0, 180.0, d).is_err());
        assert!(ideal_diameter_cm(440.0, 0.0, 180.0, d).is_err());
        assert!(ideal_diameter_cm(440.0, 50.0, -180.0, d).is_err());
        assert!(ideal_diameter_cm(440.0, 50.0, 180.0, 0.0).is_err());
        assert!(tension_lbf(440.0, 50.0, 0.0, d).is_err());
    }

    #[test]
    fn layout_validation() {
        let notes = NoteTable::standard();
        assert!(matches!(
            StringLayout::new(&notes, 26, &[100.0; 10]),
            Err(Error::InvalidParameter { name: "speaking_lengths_cm", .. })
        ));
        assert!(matches!(
            StringLayout::new(&notes, 89, &[]),
            Err(Error::KeyOutOfRange(89))
        ));
        assert!(StringLayout::new(&notes, 86, &[5.5, -5.0]).is_err());

        let top_only = StringLayout::new(&notes, 87, &[5.0]).unwrap();
        assert_eq!(top_only.plain(87).unwrap().note, "C8");
        assert_eq!(top_only.plain_strings().count(), 1);

        let all_covered = StringLayout::new(&notes, 88, &[]).unwrap();
        assert_eq!(all_covered.plain_strings().count(), 0);
    }

    #[test]
    fn display_shows_note_and_length() {
        let string = PianoString::new("A4", 38.5).unwrap();
        assert_eq!(string.to_string(), "PianoString(A4, 38.5000 cm)");
    }
}
