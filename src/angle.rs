//! Degree normalization and the rotation used to draw the compass needle.

use crate::config::FULL_CIRCLE;

/// Brings an angle in [-360, 720) into [0, 360) with a single wrap.
///
/// No modulo: values already in range come back bit-for-bit unchanged.
pub fn normalize(angle: f64) -> f64 {
    let wrapped = if angle < 0.0 {
        angle + FULL_CIRCLE
    } else if angle >= FULL_CIRCLE {
        angle - FULL_CIRCLE
    } else {
        angle
    };

    // -1e-15 + 360.0 rounds up to exactly 360.0
    if wrapped >= FULL_CIRCLE { 0.0 } else { wrapped }
}

/// Rotation that keeps the needle pointing north while the device turns.
/// `0` maps to `0`, never `360`.
pub fn display_rotation(angle: f64) -> f64 {
    let rotation = FULL_CIRCLE - angle;
    if rotation >= FULL_CIRCLE { 0.0 } else { rotation }
}

/// Rounds a normalized azimuth to whole degrees in [0, 359].
pub fn round_degrees(angle: f64) -> u16 {
    (angle.round() as u16) % 360
}
