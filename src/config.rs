// ** HEADING CONFIGURATION ** //

/// Calibration offset limits (degrees). The settings slider enforces the same range.
pub const MIN_OFFSET_DEGREES: i32 = -90;
pub const MAX_OFFSET_DEGREES: i32 = 90;

/// Window accepted for raw azimuth samples.
/// Any value in here plus a legal offset stays within [-360, 720), which a
/// single wrap in `angle::normalize` can bring back to [0, 360).
pub const MIN_RAW_AZIMUTH: f64 = -180.0;
pub const MAX_RAW_AZIMUTH: f64 = 360.0; // exclusive

pub const FULL_CIRCLE: f64 = 360.0;

// ** PRESSURE CONFIGURATION ** //

/// hPa per inch of mercury.
pub const INHG_TO_HPA: f64 = 33.863888;
/// Sea-level pressure used until the user enters one (standard atmosphere, inHg).
pub const DEFAULT_PRESSURE_ASL_TEXT: &str = "29.92";
pub const DEFAULT_PRESSURE_ASL_IN_HG: f64 = 29.92;
/// Reference used when no calibration has been loaded yet.
pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

// ** ALTITUDE CONFIGURATION ** //

/// International barometric formula: h = 44330 * (1 - (p / p0)^(1 / 5.255))
pub const BAROMETRIC_SCALE_M: f64 = 44330.0;
pub const BAROMETRIC_EXPONENT: f64 = 1.0 / 5.255;
pub const METERS_TO_FEET: f64 = 3.28084;
