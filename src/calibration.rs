//! User calibration: heading offset and sea-level reference pressure.
//!
//! The settings layer owns storage. It hands us the two persisted values
//! (`offset`, `pressureASL`) already deserialized and gets a [`Settings`]
//! back when it needs to save.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{
    DEFAULT_PRESSURE_ASL_IN_HG, DEFAULT_PRESSURE_ASL_TEXT, INHG_TO_HPA, MAX_OFFSET_DEGREES,
    MIN_OFFSET_DEGREES,
};
use crate::error::{CompassError, CompassResult};

/// Persisted calibration values, as the settings screen stores them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub offset: Option<i32>,
    #[serde(rename = "pressureASL")]
    pub pressure_asl: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    /// Offset as the user entered it.
    offset_degrees: i32,
    /// Sea-level pressure as the user entered it.
    pressure_in_hg: f64,
    reference_pressure_hpa: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self::from_persisted(None, None)
    }
}

impl Calibration {
    /// Builds the calibration from stored values, falling back to defaults
    /// for anything missing or unusable.
    pub fn from_persisted(stored_offset: Option<i32>, stored_pressure_text: Option<&str>) -> Self {
        let offset_degrees = match stored_offset {
            Some(offset) if validate_offset(offset).is_ok() => offset,
            Some(offset) => {
                warn!(offset, "stored heading offset out of range, using 0");
                0
            }
            None => 0,
        };

        let pressure_in_hg = match stored_pressure_text.map(parse_pressure_text) {
            Some(Ok(in_hg)) => in_hg,
            Some(Err(e)) => {
                warn!(error = %e, "stored sea-level pressure unusable, using {}", DEFAULT_PRESSURE_ASL_TEXT);
                default_pressure_in_hg()
            }
            None => default_pressure_in_hg(),
        };

        Self {
            offset_degrees,
            pressure_in_hg,
            reference_pressure_hpa: in_hg_to_hpa(pressure_in_hg),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::from_persisted(settings.offset, settings.pressure_asl.as_deref())
    }

    /// Validates a new offset and sea-level pressure.
    /// Out-of-range input is rejected, never clamped.
    pub fn apply(new_offset_degrees: i32, new_pressure_in_hg: f64) -> CompassResult<Self> {
        validate_offset(new_offset_degrees)?;
        validate_pressure(new_pressure_in_hg)?;

        info!(
            offset = new_offset_degrees,
            pressure_in_hg = new_pressure_in_hg,
            "calibration applied"
        );
        Ok(Self {
            offset_degrees: new_offset_degrees,
            pressure_in_hg: new_pressure_in_hg,
            reference_pressure_hpa: in_hg_to_hpa(new_pressure_in_hg),
        })
    }

    /// What the settings screen writes back to storage.
    pub fn to_persisted(&self) -> Settings {
        Settings {
            offset: Some(self.offset_degrees),
            pressure_asl: Some(self.pressure_in_hg.to_string()),
        }
    }

    pub fn offset_degrees(&self) -> i32 {
        self.offset_degrees
    }

    /// Offset added to raw azimuth samples. The stored value is negated:
    /// a user who sees north N degrees too far clockwise enters +N.
    pub fn effective_offset_degrees(&self) -> f64 {
        -f64::from(self.offset_degrees)
    }

    pub fn pressure_in_hg(&self) -> f64 {
        self.pressure_in_hg
    }

    pub fn reference_pressure_hpa(&self) -> f64 {
        self.reference_pressure_hpa
    }
}

pub fn in_hg_to_hpa(in_hg: f64) -> f64 {
    in_hg * INHG_TO_HPA
}

/// Parses the free-text offset field ("12", "-4.0"), rounding to whole degrees.
pub fn parse_offset_text(text: &str) -> CompassResult<i32> {
    let value = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CompassError::InvalidOffsetText(text.to_string()))?;

    if value < f64::from(MIN_OFFSET_DEGREES) {
        return Err(CompassError::OffsetOutOfRange(value.floor() as i32));
    }
    if value > f64::from(MAX_OFFSET_DEGREES) {
        return Err(CompassError::OffsetOutOfRange(value.ceil() as i32));
    }
    Ok(value.round() as i32)
}

/// Parses sea-level pressure text in inHg.
pub fn parse_pressure_text(text: &str) -> CompassResult<f64> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| CompassError::InvalidSeaLevelPressure(text.to_string()))?;
    validate_pressure(value)?;
    Ok(value)
}

fn validate_offset(offset: i32) -> CompassResult<()> {
    if (MIN_OFFSET_DEGREES..=MAX_OFFSET_DEGREES).contains(&offset) {
        Ok(())
    } else {
        Err(CompassError::OffsetOutOfRange(offset))
    }
}

fn validate_pressure(in_hg: f64) -> CompassResult<()> {
    if in_hg.is_finite() && in_hg > 0.0 {
        Ok(())
    } else {
        Err(CompassError::InvalidSeaLevelPressure(in_hg.to_string()))
    }
}

fn default_pressure_in_hg() -> f64 {
    DEFAULT_PRESSURE_ASL_IN_HG
}
