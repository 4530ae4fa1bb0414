use tracing::debug;

use crate::calibration::Calibration;
use crate::config::{BAROMETRIC_EXPONENT, BAROMETRIC_SCALE_M, METERS_TO_FEET, STANDARD_PRESSURE_HPA};

/// Barometric altitude in feet for a measured pressure against a sea-level
/// reference, both in hPa.
pub fn estimate(pressure_hpa: f64, reference_pressure_hpa: f64) -> f64 {
    let meters =
        BAROMETRIC_SCALE_M * (1.0 - (pressure_hpa / reference_pressure_hpa).powf(BAROMETRIC_EXPONENT));
    meters * METERS_TO_FEET
}

/// Same as [`estimate`], using the calibrated reference when there is one.
///
/// Before calibration has been loaded the standard atmosphere (1013.25 hPa)
/// is used instead. This should almost never run.
pub fn estimate_calibrated(pressure_hpa: f64, calibration: Option<&Calibration>) -> f64 {
    let reference = match calibration {
        Some(cal) => cal.reference_pressure_hpa(),
        None => {
            debug!("no calibration loaded yet, using standard atmosphere");
            STANDARD_PRESSURE_HPA
        }
    };
    estimate(pressure_hpa, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_sea_level_is_zero() {
        assert_abs_diff_eq!(estimate(1013.25, 1013.25), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate(1000.0, 1000.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_known_altitude() {
        // 899 hPa is roughly 1000 m (3281 ft) in the standard atmosphere
        let feet = estimate(898.75, 1013.25);
        assert_relative_eq!(feet, 3281.0, max_relative = 0.01);
    }

    #[test]
    fn test_decreases_with_pressure() {
        let mut last = f64::INFINITY;
        for step in 0..60 {
            let pressure = 700.0 + step as f64 * 7.5;
            let feet = estimate(pressure, 1013.25);
            assert!(feet < last, "{} hPa gave {} ft, previous {}", pressure, feet, last);
            last = feet;
        }
    }

    #[test]
    fn test_above_reference_is_negative() {
        assert!(estimate(1030.0, 1013.25) < 0.0);
    }

    #[test]
    fn test_fallback_without_calibration() {
        assert_eq!(
            estimate_calibrated(950.0, None),
            estimate(950.0, STANDARD_PRESSURE_HPA)
        );
        assert_abs_diff_eq!(estimate_calibrated(1013.25, None), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_uses_calibrated_reference() {
        let cal = Calibration::apply(0, 30.50).unwrap();
        let feet = estimate_calibrated(cal.reference_pressure_hpa(), Some(&cal));
        assert_abs_diff_eq!(feet, 0.0, epsilon = 1e-9);
        assert!(estimate_calibrated(1013.25, Some(&cal)) > 0.0);
    }
}
