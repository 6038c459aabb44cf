//! # Piano Scale - Plain String Calculator
//!
//! Command-line front end for `scale-core`. Prints the equal-tempered note
//! table, checks the wire catalog density and lists the ideal diameter and
//! nearest gauge of every plain string.
//!
//! ## Configuration
//! - Defaults: A4 = 440 Hz, 180 lbf, 7.84 g/cm³, Röslau catalog
//! - `--config` loads a JSON file; missing keys keep their defaults
//! - Individual flags override both

mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use scale_core::{ScaleConfig, design_scale};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Computes equal-tempered frequencies and plain-string wire diameters.
#[derive(Debug, Parser)]
#[command(name = "piano-scale", version, about)]
struct Args {
    /// JSON scale configuration
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Target tension in pounds-force
    #[arg(long, value_name = "LBF")]
    tension: Option<f64>,

    /// Wire material density in g/cm³
    #[arg(long, value_name = "G_CM3")]
    density: Option<f64>,

    /// Frequency of the reference note in Hz
    #[arg(long, value_name = "HZ")]
    reference: Option<f64>,

    /// Emit the full report as JSON
    #[arg(long)]
    json: bool,

    /// Do not print the 88-key note table
    #[arg(long)]
    skip_notes: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    fn scale_config(&self) -> Result<ScaleConfig> {
        let mut config = match &self.config {
            Some(path) => ScaleConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ScaleConfig::default(),
        };

        if let Some(tension) = self.tension {
            config.tension_lbf = tension;
        }
        if let Some(density) = self.density {
            config.relative_density = density;
        }
        if let Some(reference) = self.reference {
            config.reference_frequency = reference;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args, "parsed arguments");

    let config = args.scale_config()?;
    let report = design_scale(&config).context("scale design failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).context("failed to write JSON report")?;
        writeln!(out)?;
    } else {
        if !args.skip_notes {
            ui::notes::write_note_table(&mut out, &report)?;
            writeln!(out)?;
        }
        ui::catalog::write_density_check(&mut out, &report)?;
        writeln!(out)?;
        ui::strings::write_string_table(&mut out, &report)?;
    }

    info!(strings = report.strings.len(), "done");
    Ok(())
}
