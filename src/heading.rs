use crate::angle::{display_rotation, normalize, round_degrees};
use crate::calibration::Calibration;
use crate::compass::{Direction, classify};

/// Heading half of a readout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heading {
    /// Offset-corrected azimuth in [0, 360).
    pub corrected_azimuth: f64,
    /// Needle rotation in [0, 360).
    pub display_rotation: f64,
    /// Whole degrees shown on screen, in [0, 359].
    pub rounded_azimuth: u16,
    pub direction: Direction,
}

/// Turns a raw azimuth into a corrected heading.
///
/// `raw_azimuth` must already be checked at the sample boundary
/// (finite, within [-180, 360)).
pub fn update(raw_azimuth: f64, calibration: &Calibration) -> Heading {
    let corrected_azimuth = normalize(raw_azimuth + calibration.effective_offset_degrees());
    let rounded_azimuth = round_degrees(corrected_azimuth);

    Heading {
        corrected_azimuth,
        display_rotation: display_rotation(corrected_azimuth),
        rounded_azimuth,
        direction: classify(rounded_azimuth),
    }
}
