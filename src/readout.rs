use std::fmt;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::altitude;
use crate::calibration::{Calibration, Settings};
use crate::compass::Direction;
use crate::error::CompassResult;
use crate::heading::{self, Heading};
use crate::sample::SensorSample;

/// What the presentation layer renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadoutState {
    pub corrected_azimuth: f64,
    pub display_rotation: f64,
    pub rounded_azimuth: u16,
    pub direction: Direction,
    pub altitude_feet: f64,
}

impl Default for ReadoutState {
    fn default() -> Self {
        Self {
            corrected_azimuth: 0.0,
            display_rotation: 0.0,
            rounded_azimuth: 0,
            direction: Direction::N,
            altitude_feet: 0.0,
        }
    }
}

impl fmt::Display for ReadoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (needle {:.1}°), {:.0} ft",
            self.heading_text(),
            self.display_rotation,
            self.altitude_feet
        )
    }
}

impl ReadoutState {
    /// Main screen label, e.g. "274° W".
    pub fn heading_text(&self) -> String {
        format!("{}° {}", self.rounded_azimuth, self.direction)
    }

    fn set_heading(&mut self, heading: Heading) {
        self.corrected_azimuth = heading.corrected_azimuth;
        self.display_rotation = heading.display_rotation;
        self.rounded_azimuth = heading.rounded_azimuth;
        self.direction = heading.direction;
    }
}

/// Holds the calibration in effect and the latest readout.
///
/// Shared between the sample producer and the settings action. Calibration
/// changes take effect on the next sample; the readout is only ever read or
/// written whole.
pub struct ReadoutTracker {
    calibration: RwLock<Option<Calibration>>,
    state: RwLock<ReadoutState>,
}

impl Default for ReadoutTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadoutTracker {
    /// A tracker whose calibration has not been loaded yet.
    pub fn new() -> Self {
        Self {
            calibration: RwLock::new(None),
            state: RwLock::new(ReadoutState::default()),
        }
    }

    pub fn with_calibration(calibration: Calibration) -> Self {
        let tracker = Self::new();
        tracker.set_calibration(calibration);
        tracker
    }

    pub fn calibration(&self) -> Option<Calibration> {
        *self.calibration.read()
    }

    /// Loads the persisted calibration.
    pub fn load_calibration(&self, settings: &Settings) -> Calibration {
        let calibration = Calibration::from_settings(settings);
        self.set_calibration(calibration);
        calibration
    }

    /// Validates and installs a new calibration. On error the previous one stays.
    pub fn apply_calibration(
        &self,
        offset_degrees: i32,
        pressure_in_hg: f64,
    ) -> CompassResult<Calibration> {
        let calibration = Calibration::apply(offset_degrees, pressure_in_hg)?;
        self.set_calibration(calibration);
        Ok(calibration)
    }

    pub fn set_calibration(&self, calibration: Calibration) {
        *self.calibration.write() = Some(calibration);
        info!(
            offset = calibration.offset_degrees(),
            reference_hpa = calibration.reference_pressure_hpa(),
            "calibration in effect"
        );
    }

    /// Latest readout.
    pub fn snapshot(&self) -> ReadoutState {
        *self.state.read()
    }

    /// Recomputes the slice of the readout the sample feeds and returns the
    /// new snapshot. Malformed samples are refused and leave it untouched.
    pub fn process(&self, sample: SensorSample) -> CompassResult<ReadoutState> {
        let calibration = self.calibration();

        match sample.validate()? {
            SensorSample::Orientation { azimuth_degrees } => {
                let heading = heading::update(azimuth_degrees, &calibration.unwrap_or_default());
                debug!(
                    raw = azimuth_degrees,
                    corrected = heading.corrected_azimuth,
                    direction = %heading.direction,
                    "heading updated"
                );
                let mut state = self.state.write();
                state.set_heading(heading);
                Ok(*state)
            }
            SensorSample::Pressure { hpa } => {
                let feet = altitude::estimate_calibrated(hpa, calibration.as_ref());
                debug!(hpa, feet, "altitude updated");
                let mut state = self.state.write();
                state.altitude_feet = feet;
                Ok(*state)
            }
        }
    }
}
