//! Channel plumbing between the platform's sensor collaborator and the tracker.
//!
//! The producer pushes [`SensorSample`]s; [`pump`] drains them in order and
//! forwards each new [`ReadoutState`] to whoever subscribed.

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::{debug, warn};

use crate::readout::{ReadoutState, ReadoutTracker};
use crate::sample::SensorSample;

/// Counts from one run of [`pump`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpStats {
    pub processed: usize,
    pub rejected: usize,
}

/// Channel for the sample producer.
pub fn sample_channel() -> (Sender<SensorSample>, Receiver<SensorSample>) {
    unbounded()
}

/// Applies every sample from `samples` to `tracker` until the producer hangs up.
///
/// Malformed samples are logged and skipped. A subscriber that went away is
/// not an error; updates simply stop being forwarded.
pub fn pump(
    tracker: &ReadoutTracker,
    samples: &Receiver<SensorSample>,
    updates: Option<&Sender<ReadoutState>>,
) -> PumpStats {
    let mut stats = PumpStats::default();
    let mut subscriber = updates;

    for sample in samples.iter() {
        match tracker.process(sample) {
            Ok(state) => {
                stats.processed += 1;
                if let Some(tx) = subscriber
                    && tx.send(state).is_err()
                {
                    debug!("readout subscriber disconnected");
                    subscriber = None;
                }
            }
            Err(e) => {
                stats.rejected += 1;
                warn!(%sample, error = %e, "sample rejected");
            }
        }
    }

    debug!(processed = stats.processed, rejected = stats.rejected, "sample stream closed");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::Calibration;
    use crate::compass::Direction;

    #[test]
    fn test_pump_forwards_every_accepted_sample() {
        let tracker = ReadoutTracker::with_calibration(Calibration::default());
        let (tx, rx) = sample_channel();
        let (updates_tx, updates_rx) = unbounded();

        tx.send(SensorSample::orientation(45.0)).unwrap();
        tx.send(SensorSample::pressure(f64::NAN)).unwrap();
        tx.send(SensorSample::pressure(1000.0)).unwrap();
        drop(tx);

        let stats = pump(&tracker, &rx, Some(&updates_tx));
        assert_eq!(stats, PumpStats { processed: 2, rejected: 1 });

        let states: Vec<ReadoutState> = updates_rx.try_iter().collect();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].direction, Direction::NE);
        assert_eq!(states[1].direction, Direction::NE);
        assert!(states[1].altitude_feet > 0.0);
    }

    #[test]
    fn test_pump_survives_dropped_subscriber() {
        let tracker = ReadoutTracker::new();
        let (tx, rx) = sample_channel();
        let (updates_tx, updates_rx) = unbounded();
        drop(updates_rx);

        tx.send(SensorSample::orientation(180.0)).unwrap();
        tx.send(SensorSample::orientation(181.0)).unwrap();
        drop(tx);

        let stats = pump(&tracker, &rx, Some(&updates_tx));
        assert_eq!(stats.processed, 2);
        assert_eq!(tracker.snapshot().rounded_azimuth, 181);
    }
}
