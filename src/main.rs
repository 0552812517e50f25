//! # weather-forecast
//!
//! Command-line interface: read a daily observation table, forecast the
//! next cycle for every location, and write the forecast table.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use weather_forecast::config::Settings;
use weather_forecast::io::{load_table_with, write_table};
use weather_forecast::models::RegressionLine;
use weather_forecast::pipeline::forecast_table;

#[derive(Parser)]
#[command(name = "weather-forecast")]
#[command(about = "Seasonal trend forecasts from daily observations", long_about = None)]
struct Cli {
    /// Settings file (TOML); flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast the next 365 days for every location
    Forecast {
        /// Input CSV: date column followed by one reading column per location
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Window width in days around each seasonal occurrence
        #[arg(short, long)]
        width: Option<usize>,

        /// Per-year weight factor in (0, 1]
        #[arg(long)]
        weight_factor: Option<f64>,

        /// Decimal places in the output
        #[arg(long)]
        precision: Option<usize>,

        /// Input has a header row
        #[arg(long)]
        header: bool,

        /// Exit with an error if any location is skipped
        #[arg(long)]
        strict: bool,
    },

    /// Print the fitted trend line for every location
    Trend {
        /// Input CSV: date column followed by one reading column per location
        #[arg(short, long)]
        input: PathBuf,

        /// Input has a header row
        #[arg(long)]
        header: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "weather_forecast=debug"
    } else {
        "weather_forecast=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

fn run_forecast(
    settings: Settings,
    input: PathBuf,
    output: Option<PathBuf>,
    strict: bool,
) -> anyhow::Result<()> {
    settings.validate()?;

    let table = load_table_with(&input, &settings.loader)
        .with_context(|| format!("failed to load {}", input.display()))?;
    let report = forecast_table(&table, &settings.seasonal)?;

    if strict && !report.is_complete() {
        bail!("{} location(s) could not be forecast", report.failures.len());
    }

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_table(BufWriter::new(file), &report.forecasts, &settings.output)?;
            tracing::info!(path = %path.display(), "wrote forecast table");
        }
        None => {
            let stdout = io::stdout();
            write_table(stdout.lock(), &report.forecasts, &settings.output)?;
        }
    }
    Ok(())
}

fn run_trend(settings: Settings, input: PathBuf) -> anyhow::Result<()> {
    let table = load_table_with(&input, &settings.loader)
        .with_context(|| format!("failed to load {}", input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "location,slope,intercept,r_squared")?;
    for series in table.locations() {
        match RegressionLine::fit(series.values()) {
            Ok(line) => writeln!(
                out,
                "{},{:.6},{:.6},{:.4}",
                series.location(),
                line.slope,
                line.intercept,
                line.r_squared
            )?,
            Err(err) => {
                let err = err.with_location(series.location());
                tracing::warn!(location = series.location(), error = %err, "skipping location");
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = load_settings(cli.config.as_ref())?;

    match cli.command {
        Commands::Forecast {
            input,
            output,
            width,
            weight_factor,
            precision,
            header,
            strict,
        } => {
            if let Some(width) = width {
                settings.seasonal.width = width;
            }
            if let Some(weight_factor) = weight_factor {
                settings.seasonal.weight_factor = weight_factor;
            }
            if let Some(precision) = precision {
                settings.output.precision = precision;
            }
            if header {
                settings.loader.has_header = true;
            }
            run_forecast(settings, input, output, strict)
        }
        Commands::Trend { input, header } => {
            if header {
                settings.loader.has_header = true;
            }
            run_trend(settings, input)
        }
    }
}
