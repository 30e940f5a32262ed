//! GRIB1 reporting tool.
//!
//! Decodes a GRIB1 file and prints a per-message summary, a JSON dump of
//! the decoded records, or a derived wind vector table.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use grib1_parser::Message;
use wind::WindCombiner;

#[derive(Parser, Debug)]
#[command(name = "grib-report")]
#[command(about = "Decode a GRIB1 file and report its contents")]
struct Args {
    /// GRIB1 file to decode
    file: String,

    /// Dump decoded messages as a JSON array
    #[arg(long)]
    json: bool,

    /// Derive and print wind vectors from U/V component pairs
    #[arg(long)]
    wind: bool,

    /// Sample every Nth grid point for the wind table
    #[arg(long, default_value_t = 1)]
    stride: usize,

    /// Maximum number of rows to print per table
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let messages = grib1_parser::parse_file(&args.file)
        .with_context(|| format!("Failed to decode {}", args.file))?;
    info!(count = messages.len(), file = %args.file, "Decoded messages");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    print_summary(&messages, args.limit);

    if args.wind {
        print_wind(&messages, args.stride, args.limit)?;
    }

    Ok(())
}

fn print_summary(messages: &[Message], limit: usize) {
    println!("{} message(s) decoded", messages.len());
    println!(
        "{:>4}  {:<8} {:<28} {:<20} {:>9} {:>12}",
        "#", "param", "level", "reference time", "grid", "mean"
    );

    for message in messages.iter().take(limit) {
        let grid = message
            .grid
            .as_ref()
            .map(|g| format!("{}x{}", g.ni, g.nj))
            .unwrap_or_else(|| "-".to_string());

        let mean = if message.values.is_empty() {
            "-".to_string()
        } else {
            let sum: f64 = message.values.iter().map(|&v| v as f64).sum();
            format!("{:.3}", sum / message.values.len() as f64)
        };

        println!(
            "{:>4}  {:<8} {:<28} {:<20} {:>9} {:>12}",
            message.sequence,
            message.parameter.abbrev,
            format!("{} {}", message.level.value, message.level.name),
            message.reference_time.format("%Y-%m-%d %H:%M"),
            grid,
            mean
        );
    }
    if messages.len() > limit {
        println!("... {} more", messages.len() - limit);
    }
}

fn print_wind(messages: &[Message], stride: usize, limit: usize) -> Result<()> {
    let points = WindCombiner::default()
        .derive(messages, stride)
        .context("Failed to derive wind vectors")?;

    println!();
    println!("{} wind sample(s), stride {}", points.len(), stride);
    println!(
        "{:>8} {:>9}  {:<17} {:>10} {:>8}",
        "lat", "lon", "time", "speed m/s", "from"
    );
    for point in points.iter().take(limit) {
        println!(
            "{:>8.3} {:>9.3}  {:<17} {:>10.2} {:>7.0}\u{00b0}",
            point.latitude,
            point.longitude,
            point.timestamp.format("%Y-%m-%d %H:%M"),
            point.speed,
            point.direction
        );
    }
    if points.len() > limit {
        println!("... {} more", points.len() - limit);
    }

    Ok(())
}
