use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use compass_readout::calibration::{parse_offset_text, parse_pressure_text};
use compass_readout::{Calibration, SensorSample, heading};

/// Validates a heading offset and sea-level pressure and prints the settings
/// block to persist.
#[derive(Parser, Debug)]
#[command(name = "calibrate")]
#[command(about = "Check compass calibration values", long_about = None)]
struct Args {
    /// Heading offset in degrees, -90 to 90. Positive when north reads too far clockwise.
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    offset: String,

    /// Sea-level pressure in inHg
    #[arg(long, default_value = "29.92")]
    pressure: String,

    /// Raw azimuth to preview with the new calibration
    #[arg(long, allow_hyphen_values = true)]
    preview: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let offset = parse_offset_text(&args.offset).context("invalid heading offset")?;
    let pressure_in_hg = parse_pressure_text(&args.pressure).context("invalid sea-level pressure")?;
    let calibration = Calibration::apply(offset, pressure_in_hg)?;

    println!("Offset:             {:+}°", calibration.offset_degrees());
    println!(
        "Sea-level pressure: {} inHg ({:.2} hPa)",
        calibration.pressure_in_hg(),
        calibration.reference_pressure_hpa()
    );

    if let Some(raw) = args.preview {
        SensorSample::orientation(raw).validate()?;
        let preview = heading::update(raw, &calibration);
        println!(
            "Preview:            {:.1}° raw -> {}° {}",
            raw, preview.rounded_azimuth, preview.direction
        );
    }

    println!("\n# settings to persist");
    print!("{}", toml::to_string(&calibration.to_persisted())?);
    Ok(())
}
