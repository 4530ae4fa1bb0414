use thiserror::Error;

/// Errors raised at the boundary of the readout pipeline.
///
/// Everything past the boundary is total, so these never come out of the
/// arithmetic itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompassError {
    /// A sensor sample was NaN, infinite or outside its domain.
    #[error("malformed {field} sample: {value}")]
    MalformedInput { field: &'static str, value: f64 },

    /// A sample log line that is neither `azimuth <deg>` nor `pressure <hPa>`.
    #[error("unrecognized sample {0:?}")]
    UnrecognizedSample(String),

    /// Heading offset outside [-90, 90].
    #[error("heading offset {0}° is outside [-90, 90]")]
    OffsetOutOfRange(i32),

    /// Offset text that is not a number.
    #[error("heading offset {0:?} is not a number")]
    InvalidOffsetText(String),

    /// Sea-level pressure text that is not a positive number.
    #[error("sea-level pressure {0:?} is not a positive number of inHg")]
    InvalidSeaLevelPressure(String),
}

impl CompassError {
    /// True for the calibration-apply failures (offset or pressure).
    pub fn is_calibration(&self) -> bool {
        matches!(
            self,
            CompassError::OffsetOutOfRange(_)
                | CompassError::InvalidOffsetText(_)
                | CompassError::InvalidSeaLevelPressure(_)
        )
    }
}

pub type CompassResult<T> = Result<T, CompassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CompassError::OffsetOutOfRange(91).to_string(),
            "heading offset 91° is outside [-90, 90]"
        );
        assert_eq!(
            CompassError::MalformedInput {
                field: "pressure",
                value: -1.0
            }
            .to_string(),
            "malformed pressure sample: -1"
        );
    }

    #[test]
    fn test_calibration_grouping() {
        assert!(CompassError::OffsetOutOfRange(-91).is_calibration());
        assert!(CompassError::InvalidSeaLevelPressure("abc".into()).is_calibration());
        assert!(
            !CompassError::MalformedInput {
                field: "azimuth",
                value: f64::NAN
            }
            .is_calibration()
        );
    }
}
