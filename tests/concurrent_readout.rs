use std::sync::Arc;
use std::thread;

use compass_readout::angle::display_rotation;
use compass_readout::compass::classify;
use compass_readout::stream::{pump, sample_channel};
use compass_readout::{Calibration, ReadoutState, ReadoutTracker, SensorSample};

fn assert_consistent(state: &ReadoutState) {
    assert!((0.0..360.0).contains(&state.corrected_azimuth), "{:?}", state);
    assert_eq!(state.display_rotation, display_rotation(state.corrected_azimuth), "{:?}", state);
    assert_eq!(state.direction, classify(state.rounded_azimuth), "{:?}", state);
}

#[test]
fn test_snapshots_are_never_torn() {
    let tracker = Arc::new(ReadoutTracker::with_calibration(Calibration::default()));
    let (orientation_tx, samples) = sample_channel();
    let pressure_tx = orientation_tx.clone();

    let orientation = thread::spawn(move || {
        for i in 0..2000 {
            let azimuth = (i % 720) as f64 / 2.0;
            orientation_tx.send(SensorSample::orientation(azimuth)).unwrap();
        }
    });
    let pressure = thread::spawn(move || {
        for i in 0..2000 {
            pressure_tx.send(SensorSample::pressure(950.0 + (i % 100) as f64)).unwrap();
        }
    });

    let settings_tracker = Arc::clone(&tracker);
    let settings = thread::spawn(move || {
        for offset in -90..=90 {
            settings_tracker.apply_calibration(offset, 29.92).unwrap();
        }
    });

    let reader_tracker = Arc::clone(&tracker);
    let reader = thread::spawn(move || {
        for _ in 0..5000 {
            assert_consistent(&reader_tracker.snapshot());
        }
    });

    let pump_tracker = Arc::clone(&tracker);
    let pumper = thread::spawn(move || pump(&pump_tracker, &samples, None));

    orientation.join().unwrap();
    pressure.join().unwrap();
    settings.join().unwrap();
    reader.join().unwrap();

    let stats = pumper.join().unwrap();
    assert_eq!(stats.processed, 4000);
    assert_eq!(stats.rejected, 0);
    assert_consistent(&tracker.snapshot());
    assert_eq!(tracker.calibration().map(|c| c.offset_degrees()), Some(90));
}

#[test]
fn test_offset_round_trip_through_settings() {
    let tracker = ReadoutTracker::new();
    let applied = tracker.apply_calibration(-25, 30.12).unwrap();

    let reloaded = ReadoutTracker::new();
    reloaded.load_calibration(&applied.to_persisted());

    tracker.process(SensorSample::orientation(100.0)).unwrap();
    reloaded.process(SensorSample::orientation(100.0)).unwrap();
    tracker.process(SensorSample::pressure(1001.0)).unwrap();
    reloaded.process(SensorSample::pressure(1001.0)).unwrap();

    assert_eq!(tracker.snapshot(), reloaded.snapshot());
    assert_eq!(tracker.snapshot().heading_text(), "125° SE");
}
