use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::{Sender, unbounded};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use compass_readout::stream::{pump, sample_channel};
use compass_readout::{ReadoutTracker, SensorSample, Settings};

/// Replays a log of sensor samples through the readout pipeline.
///
/// Log lines look like `azimuth 271.4` or `pressure 1008.6`; blank lines and
/// lines starting with `#` are skipped.
#[derive(Parser, Debug)]
#[command(name = "compass-readout")]
#[command(about = "Compass heading and barometric altitude readout", long_about = None)]
struct Args {
    /// Sample log to replay (stdin when omitted)
    #[arg(value_name = "FILE")]
    log: Option<PathBuf>,

    /// Persisted calibration (TOML with `offset` and `pressureASL`)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let tracker = Arc::new(ReadoutTracker::new());

    // Without settings the tracker stays uncalibrated and altitude uses the
    // standard atmosphere.
    if let Some(path) = &args.settings {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&text)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        tracker.load_calibration(&settings);
    }

    let reader: Box<dyn BufRead + Send> = match &args.log {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let (sample_tx, sample_rx) = sample_channel();
    let (update_tx, update_rx) = unbounded();

    let producer = thread::spawn(move || feed_samples(reader, sample_tx));
    let printer = thread::spawn(move || {
        for state in update_rx.iter() {
            println!("{}", state);
        }
    });

    let stats = pump(&tracker, &sample_rx, Some(&update_tx));
    drop(update_tx);

    producer
        .join()
        .map_err(|_| anyhow::anyhow!("sample reader panicked"))??;
    printer
        .join()
        .map_err(|_| anyhow::anyhow!("readout printer panicked"))?;

    info!(
        processed = stats.processed,
        rejected = stats.rejected,
        "replay finished"
    );
    println!("Final: {}", tracker.snapshot());
    Ok(())
}

fn feed_samples(reader: Box<dyn BufRead + Send>, samples: Sender<SensorSample>) -> Result<()> {
    for (number, line) in reader.lines().enumerate() {
        let line = line.context("reading sample log")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match trimmed.parse::<SensorSample>() {
            Ok(sample) => {
                if samples.send(sample).is_err() {
                    break;
                }
            }
            Err(e) => warn!(line = number + 1, error = %e, "skipping log line"),
        }
    }
    Ok(())
}
