use anyhow::Context;
use clap::{Parser, Subcommand};
use rolling_stats::Stats;
use std::path::{Path, PathBuf};

use rfgain::antenna::{AntennaPattern, BoresightLoader, EnvelopeModel, PatternKind};
use rfgain::config::AntennaCatalog;
use rfgain::geodesy::{EcefVector, ecef_to_geodetic, geodetic_to_ecef};
use rfgain::output::{GainRow, OutputFormat, create_formatter};

#[derive(Parser, Debug)]
#[command(name = "rfgain")]
#[command(about = "Geodetic transforms and antenna gain patterns", long_about = None)]
struct Args {
    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Geodetic latitude/longitude/height to ECEF
    ToEcef {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Height above the ellipsoid in km
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        height: f64,
    },

    /// ECEF (km) to geodetic latitude/longitude/height
    ToGeodetic {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, allow_hyphen_values = true)]
        z: f64,
    },

    /// Tabulate a standardized envelope pattern
    Mask {
        /// Envelope model
        #[arg(short = 'm', long, value_enum)]
        model: EnvelopeModel,
        /// Peak gain in dBi
        #[arg(short = 'g', long)]
        max_gain: f64,
        /// Frequency in Hz (F.1336 only)
        #[arg(long, default_value = "0")]
        frequency: f64,
        /// Angle step in degrees
        #[arg(long, default_value = "1")]
        step: f64,
        /// Output format: text, csv, json
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Load a boresight gain file and print the resampled tables
    Boresight {
        file: PathBuf,
        /// Angle step in degrees
        #[arg(long, default_value = "1")]
        step: f64,
        /// Print per-antenna statistics instead of tables
        #[arg(long)]
        summary: bool,
        /// Output format: text, csv, json
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Evaluate every antenna in a catalog toward one direction
    Catalog {
        file: PathBuf,
        /// Azimuth offset from boresight in degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        azimuth: f64,
        /// Elevation in degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        elevation: f64,
        /// Output format: text, csv, json
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn angle_grid(start: f64, end: f64, step: f64) -> anyhow::Result<Vec<f64>> {
    if step.is_nan() || step <= 0.0 {
        anyhow::bail!("step must be positive, got {}", step);
    }
    let count = ((end - start) / step).floor() as usize;
    Ok((0..=count).map(|k| start + k as f64 * step).collect())
}

fn print_rows<'a>(
    rows: impl IntoIterator<Item = GainRow<'a>>,
    format: OutputFormat,
    verbose: bool,
) {
    let formatter = create_formatter(format, verbose);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    for row in rows {
        println!("{}", formatter.format(&row));
    }
}

fn run_mask(
    model: EnvelopeModel,
    max_gain: f64,
    frequency: f64,
    step: f64,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let (start, end) = if model.is_elevation_pattern() {
        (-90.0, 90.0)
    } else {
        (0.0, 180.0)
    };
    let name = model.to_string();
    let angles = angle_grid(start, end, step)?;
    print_rows(
        angles.iter().map(|&angle_deg| GainRow {
            antenna: &name,
            source: "envelope",
            angle_deg,
            gain_db: model.gain_db(angle_deg, max_gain, frequency),
        }),
        format,
        verbose,
    );
    Ok(())
}

fn run_boresight(
    file: &Path,
    step: f64,
    summary: bool,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let patterns = BoresightLoader::new()
        .load_file(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    if summary {
        for pattern in &patterns {
            for (source, table) in pattern.tables() {
                let mut stats: Stats<f64> = Stats::new();
                for &g in table.gains() {
                    stats.update(g);
                }
                println!(
                    "{:<16} [{}] n={} min={:.2} mean={:.2} max={:.2} std={:.2}",
                    pattern.id(),
                    source,
                    stats.count,
                    stats.min,
                    stats.mean,
                    stats.max,
                    stats.std_dev
                );
            }
        }
        return Ok(());
    }

    let angles = angle_grid(0.0, 180.0, step)?;
    let mut rows = Vec::new();
    for pattern in &patterns {
        for &angle_deg in &angles {
            rows.push(GainRow {
                antenna: pattern.id(),
                source: "boresight",
                angle_deg,
                gain_db: pattern.gain_off_boresight(angle_deg.to_radians())?,
            });
        }
    }
    print_rows(rows, format, verbose);
    Ok(())
}

/// Gain of one pattern toward an azimuth offset / elevation pair.
/// Boresight patterns are read at the equivalent off-axis angle.
fn gain_toward(pattern: &AntennaPattern, phi: f64, theta: f64) -> rfgain::Result<f64> {
    match pattern.kind() {
        PatternKind::Boresight => {
            let off_axis = (phi.cos() * theta.cos()).clamp(-1.0, 1.0).acos();
            pattern.gain_off_boresight(off_axis)
        }
        _ => pattern.gain_at(phi, theta),
    }
}

fn run_catalog(
    file: &Path,
    azimuth: f64,
    elevation: f64,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = AntennaCatalog::load(file)
        .with_context(|| format!("Failed to read catalog {}", file.display()))?;
    let patterns = catalog
        .build_patterns(&BoresightLoader::new())
        .context("Failed to build antenna patterns")?;
    log::info!("built {} antenna pattern(s)", patterns.len());

    let phi = azimuth.to_radians();
    let theta = elevation.to_radians();
    let mut rows = Vec::with_capacity(patterns.len());
    for pattern in &patterns {
        rows.push(GainRow {
            antenna: pattern.id(),
            source: pattern.kind().as_str(),
            angle_deg: azimuth,
            gain_db: gain_toward(pattern, phi, theta)?,
        });
    }
    print_rows(rows, format, verbose);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    let verbose = args.verbose > 0;

    match args.command {
        Command::ToEcef { lat, lon, height } => {
            let p = geodetic_to_ecef(lat, lon, height);
            println!("x={:.6} y={:.6} z={:.6} km", p.x, p.y, p.z);
        }
        Command::ToGeodetic { x, y, z } => {
            let g = ecef_to_geodetic(&EcefVector::new(x, y, z));
            println!(
                "lat={:.9}° lon={:.9}° height={:.6} km",
                g.latitude_deg, g.longitude_deg, g.height_km
            );
        }
        Command::Mask {
            model,
            max_gain,
            frequency,
            step,
            format,
        } => run_mask(model, max_gain, frequency, step, format, verbose)?,
        Command::Boresight {
            file,
            step,
            summary,
            format,
        } => run_boresight(&file, step, summary, format, verbose)?,
        Command::Catalog {
            file,
            azimuth,
            elevation,
            format,
        } => run_catalog(&file, azimuth, elevation, format, verbose)?,
    }

    Ok(())
}
