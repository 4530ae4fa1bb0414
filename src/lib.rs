pub mod altitude;
pub mod angle;
pub mod calibration;
pub mod compass;
pub mod config;
pub mod error;
pub mod heading;
pub mod readout;
pub mod sample;
pub mod stream;

// Re-export commonly used types
pub use calibration::{Calibration, Settings};
pub use compass::Direction;
pub use error::{CompassError, CompassResult};
pub use readout::{ReadoutState, ReadoutTracker};
pub use sample::SensorSample;
