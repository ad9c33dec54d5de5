//! # Path Planner CLI
//!
//! Command-line front end for the path planner settings: shows the current
//! path configuration, applies a settings update through the validated
//! workflow, writes the persistent defaults store, and checks field-map
//! files against the recognized image extensions.
//!
//! # Usage
//!
//! ```bash
//! # Show the startup configuration
//! planner show
//!
//! # Apply new settings (ft, ft, ft/s, in, in, in)
//! planner apply 52.4375 26.9375 15 1 12 100
//!
//! # Write the defaults store
//! planner write-defaults --out vars/settings.toml
//!
//! # Check a field drawing
//! planner check-map "field drawings/2020.png"
//! ```

#![deny(warnings)]

use clap::{Parser, Subcommand};
use planner_common::config::{ConfigError, ConfigLoader, PlannerConfig};
use planner_common::path::{PathConfig, SettingsField, SharedPathConfig};
use planner_common::store::{self, EmbeddedSettings};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

/// Path Planner - field and robot settings
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(version)]
#[command(about = "Validate and apply path planner settings")]
struct Args {
    /// Path to the application configuration (planner.toml).
    /// Built-in defaults are used if the file does not exist.
    #[arg(short, long, default_value = planner_common::consts::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs and results in JSON format.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current path configuration.
    Show,

    /// Validate six settings and commit them if all are valid.
    #[command(allow_negative_numbers = true)]
    Apply {
        /// Field length [ft].
        field_length: String,
        /// Field width [ft].
        field_width: String,
        /// Maximum robot velocity [ft/s].
        max_velocity: String,
        /// Path step size [in].
        step_size: String,
        /// Minimum turn radius [in].
        min_turn_radius: String,
        /// Maximum turn radius [in].
        max_turn_radius: String,
    },

    /// Write the persistent defaults store.
    WriteDefaults {
        /// Output path (defaults to `settings_store` from the configuration).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check whether a field-map file is a recognized image.
    CheckMap {
        /// Field drawing to check.
        file: PathBuf,
    },
}

/// Row of `show` / `apply` output.
#[derive(Debug, Serialize)]
struct FieldRow {
    key: &'static str,
    label: &'static str,
    entered: f64,
    stored: f64,
}

fn main() {
    let args = Args::parse();

    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            setup_tracing(&args, &PlannerConfig::default());
            error!("FATAL: {e}");
            process::exit(1);
        }
    };
    setup_tracing(&args, &config);

    info!("Path Planner v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(&args, &config) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Load and validate `planner.toml`; a missing file means built-in defaults.
fn load_config(path: &Path) -> Result<PlannerConfig, ConfigError> {
    let config = match PlannerConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => PlannerConfig::default(),
        Err(e) => return Err(e),
    };
    config.validate()?;
    Ok(config)
}

/// Returns `Ok(false)` when the command ran but reported a failure.
fn run(args: &Args, config: &PlannerConfig) -> Result<bool, Box<dyn std::error::Error>> {
    let path = SharedPathConfig::new(config.initial_path_config()?);

    match &args.command {
        Command::Show => {
            print_config(&path.snapshot(), args.json)?;
            Ok(true)
        }
        Command::Apply {
            field_length,
            field_width,
            max_velocity,
            step_size,
            min_turn_radius,
            max_turn_radius,
        } => {
            let raw = [
                field_length,
                field_width,
                max_velocity,
                step_size,
                min_turn_radius,
                max_turn_radius,
            ];
            match path.apply_settings(&raw) {
                Ok(()) => {
                    print_config(&path.snapshot(), args.json)?;
                    Ok(true)
                }
                Err(e) => {
                    for failure in &e.failures {
                        eprintln!("{failure}");
                    }
                    warn!("{e}");
                    Ok(false)
                }
            }
        }
        Command::WriteDefaults { out } => {
            let out = out.as_deref().unwrap_or(config.settings_store.as_path());
            store::write_store(out, &EmbeddedSettings::current())?;
            println!("Embedded settings saved to {}", out.display());
            Ok(true)
        }
        Command::CheckMap { file } => {
            let settings = store::load_store(&config.settings_store)?;
            let recognized = settings.is_recognized_image(file);
            if recognized {
                println!("{}: recognized field map", file.display());
            } else {
                let accepted: Vec<_> = settings
                    .recognized_image_extensions
                    .iter()
                    .map(|f| format!("{} ({})", f.label, f.patterns))
                    .collect();
                println!(
                    "{}: not a recognized image, expected {}",
                    file.display(),
                    accepted.join(", ")
                );
            }
            Ok(recognized)
        }
    }
}

fn print_config(path: &PathConfig, json: bool) -> Result<(), serde_json::Error> {
    let entered = path.entry_values();
    let rows: Vec<FieldRow> = SettingsField::ALL
        .iter()
        .map(|&f| FieldRow {
            key: f.key(),
            label: f.label(),
            entered: entered[f.index()],
            stored: path.get(f),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{:<32} {:>10}   ({} stored)", row.label, row.entered, row.stored);
        }
    }
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and configured level.
fn setup_tracing(args: &Args, config: &PlannerConfig) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.shared.log_level.into()
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
