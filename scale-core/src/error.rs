//! Error types shared by every calculation in the crate.

/// Convenience alias used throughout `scale-core`.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error type for the scale calculations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter reaching a formula was out of its physical domain.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The note name is not one of the 88 piano keys.
    #[error("unknown note `{0}`")]
    UnknownNote(String),

    /// A key index past the end of the keyboard.
    #[error("key index {0} is outside the 88-key range")]
    KeyOutOfRange(usize),

    /// The layout slot holds a covered string, which has no plain-wire model.
    #[error("key index {0} is a covered string and has no plain-wire model")]
    CoveredString(usize),

    /// Configuration file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for a scale config.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &str) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Rejects values that are zero, negative, NaN or infinite.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(name, value, "must be a positive finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass_through() {
        assert_eq!(require_positive("x", 2.5).unwrap(), 2.5);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = require_positive("tension_lbf", bad).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "tension_lbf", .. }));
        }
    }

    #[test]
    fn messages_name_the_parameter() {
        let err = require_positive("relative_density", 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter `relative_density`: got 0, must be a positive finite number"
        );
    }
}
