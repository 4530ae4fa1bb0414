//! Typed sensor samples and the boundary check that keeps NaN out of the pipeline.

use std::fmt;
use std::str::FromStr;

use crate::angle::normalize;
use crate::config::{MAX_RAW_AZIMUTH, MIN_RAW_AZIMUTH};
use crate::error::{CompassError, CompassResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SensorSample {
    /// Resolved azimuth from the platform's rotation-vector sensor (degrees).
    Orientation { azimuth_degrees: f64 },
    /// Barometer reading (hPa).
    Pressure { hpa: f64 },
}

impl fmt::Display for SensorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorSample::Orientation { azimuth_degrees } => write!(f, "azimuth {}", azimuth_degrees),
            SensorSample::Pressure { hpa } => write!(f, "pressure {}", hpa),
        }
    }
}

impl SensorSample {
    pub fn orientation(azimuth_degrees: f64) -> Self {
        SensorSample::Orientation { azimuth_degrees }
    }

    pub fn pressure(hpa: f64) -> Self {
        SensorSample::Pressure { hpa }
    }

    /// Azimuth from a yaw angle in radians (-pi..pi), shifted into 0-360.
    pub fn from_yaw_radians(yaw: f64) -> Self {
        Self::orientation(normalize(yaw.to_degrees()))
    }

    /// Rejects values the pipeline must never see.
    pub fn validate(self) -> CompassResult<Self> {
        match self {
            SensorSample::Orientation { azimuth_degrees } => {
                if !azimuth_degrees.is_finite()
                    || azimuth_degrees < MIN_RAW_AZIMUTH
                    || azimuth_degrees >= MAX_RAW_AZIMUTH
                {
                    return Err(CompassError::MalformedInput {
                        field: "azimuth",
                        value: azimuth_degrees,
                    });
                }
            }
            SensorSample::Pressure { hpa } => {
                if !hpa.is_finite() || hpa <= 0.0 {
                    return Err(CompassError::MalformedInput {
                        field: "pressure",
                        value: hpa,
                    });
                }
            }
        }
        Ok(self)
    }
}

/// Parses a sample log line: `azimuth <degrees>` or `pressure <hPa>`.
impl FromStr for SensorSample {
    type Err = CompassError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let kind = parts.next().unwrap_or_default();
        let value = parts.next().and_then(|v| v.parse::<f64>().ok());

        match (kind, value, parts.next()) {
            ("azimuth", Some(v), None) => Ok(Self::orientation(v)),
            ("pressure", Some(v), None) => Ok(Self::pressure(v)),
            _ => Err(CompassError::UnrecognizedSample(line.trim().to_string())),
        }
    }
}
