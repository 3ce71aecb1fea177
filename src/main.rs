//! device-specs - Normalized hardware facts for settings surfaces
//!
//! Reads raw, noisy system measurements (block counts, kernel memory
//! totals, display state, power profile entries) and reports them as the
//! stable, human-presentable values a settings screen shows: storage tier,
//! whole-gigabyte RAM, model strings, a display descriptor, and battery
//! capacity. Probing is best-effort by design: a missing source degrades
//! its field to a sentinel instead of failing the command.

mod config;
mod providers;
mod specs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::specs::DeviceSpecs;

/// device-specs - Report normalized device hardware facts
#[derive(Parser)]
#[command(name = "device-specs")]
#[command(author = "ForgeMyPC")]
#[command(version)]
#[command(about = "Report your device's normalized hardware specs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the device and print the specs panel (default)
    Show,

    /// Probe the device and print the specs as JSON
    Json,

    /// Print the configuration file location
    ConfigPath,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::init() {
        Ok(config) => config,
        Err(err) => {
            eprintln!(
                "{} {}",
                "Could not load config, using defaults:".bright_yellow(),
                err
            );
            Config::default()
        }
    };

    match cli.command {
        Some(Commands::Show) | None => {
            let specs = DeviceSpecs::probe_live(&config.probe);
            println!("{}", specs.display());
        }
        Some(Commands::Json) => {
            let specs = DeviceSpecs::probe_live(&config.probe);
            println!("{}", serde_json::to_string_pretty(&specs)?);
        }
        Some(Commands::ConfigPath) => {
            println!("{}", Config::config_path()?.display());
        }
    }

    Ok(())
}
