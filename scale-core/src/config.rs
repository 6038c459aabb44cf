//! # Scale Configuration
//!
//! Every constant the calculation depends on, with the standard values as
//! defaults. A config can be loaded from a JSON file; missing keys keep
//! their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, require_positive};
use crate::strings::{DEFAULT_PLAIN_START, DEFAULT_SPEAKING_LENGTHS_CM, DEFAULT_TENSION_LBF};
use crate::tuning::{DEFAULT_REFERENCE_FREQUENCY, DEFAULT_REFERENCE_NOTE};
use crate::wire::{ROESLAU, STEEL_RELATIVE_DENSITY, WireSpec};

/// Inputs to a scale design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleConfig {
    /// Frequency of `reference_note` in Hz.
    pub reference_frequency: f64,
    pub reference_note: String,
    /// Target tension of every plain string, pounds-force.
    pub tension_lbf: f64,
    /// Wire material density in g/cm³.
    pub relative_density: f64,
    /// First key index with a plain string; keys below are covered.
    pub plain_start_index: usize,
    /// One length per plain string, from `plain_start_index` upward.
    pub speaking_lengths_cm: Vec<f64>,
    pub catalog: Vec<WireSpec>,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            reference_frequency: DEFAULT_REFERENCE_FREQUENCY,
            reference_note: DEFAULT_REFERENCE_NOTE.to_string(),
            tension_lbf: DEFAULT_TENSION_LBF,
            relative_density: STEEL_RELATIVE_DENSITY,
            plain_start_index: DEFAULT_PLAIN_START,
            speaking_lengths_cm: DEFAULT_SPEAKING_LENGTHS_CM.to_vec(),
            catalog: ROESLAU.to_vec(),
        }
    }
}

impl ScaleConfig {
    /// Reads a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        debug!(path = %path.display(), "loaded scale config");
        Ok(config)
    }

    /// Parses and validates a JSON config.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the scalar parameters before any formula sees them.
    ///
    /// Layout and catalog shape are checked when they are built.
    pub fn validate(&self) -> Result<()> {
        require_positive("reference_frequency", self.reference_frequency)?;
        require_positive("tension_lbf", self.tension_lbf)?;
        require_positive("relative_density", self.relative_density)?;
        for &length in &self.speaking_lengths_cm {
            require_positive("speaking_lengths_cm", length)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_match_the_standard_scale() {
        let config = ScaleConfig::default();
        assert_eq!(config.reference_frequency, 440.0);
        assert_eq!(config.reference_note, "A4");
        assert_eq!(config.tension_lbf, 180.0);
        assert_eq!(config.relative_density, 7.84);
        assert_eq!(config.plain_start_index, 26);
        assert_eq!(config.speaking_lengths_cm.len(), 62);
        assert_eq!(config.catalog[0], WireSpec::new(12.0, 0.725, 3.24));
        config.validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ScaleConfig::from_json(r#"{ "tension_lbf": 165.5 }"#).unwrap();
        assert_eq!(
            config,
            ScaleConfig {
                tension_lbf: 165.5,
                ..ScaleConfig::default()
            }
        );
    }

    #[test]
    fn json_round_trip() {
        let original = ScaleConfig {
            reference_frequency: 442.0,
            plain_start_index: 86,
            speaking_lengths_cm: vec![5.4, 5.1],
            ..ScaleConfig::default()
        };
        let text = serde_json::to_string_pretty(&original).unwrap();
        assert_eq!(ScaleConfig::from_json(&text).unwrap(), original);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for field in ["reference_frequency", "tension_lbf", "relative_density"] {
            let text = format!(r#"{{ "{field}": 0.0 }}"#);
            let err = ScaleConfig::from_json(&text).unwrap_err();
            assert!(
                matches!(err, Error::InvalidParameter { name, .. } if name == field),
                "{field}: {err}"
            );
        }
        assert!(ScaleConfig::from_json(r#"{ "speaking_lengths_cm": [10.0, -1.0] }"#).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            ScaleConfig::from_json("{ tension_lbf: 180 }"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            ScaleConfig::from_json(r#"{ "tension": 180 }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "relative_density": 7.85, "reference_note": "C4" }}"#).unwrap();

        let config = ScaleConfig::load(file.path()).unwrap();
        assert_eq!(config.relative_density, 7.85);
        assert_eq!(config.reference_note, "C4");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(ScaleConfig::load(missing), Err(Error::Io(_))));
    }
}
