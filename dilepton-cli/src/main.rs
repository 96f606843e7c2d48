//! Dilepton CLI — run the di-lepton pair selection over a batch of events.
//!
//! Commands:
//! - `select` — read a JSON array of event records, print one JSON line per event
//! - `cuts` — print the default run configuration as TOML
//! - `check-config` — validate a run configuration and print its cut fingerprint

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use dilepton_core::domain::EventRecord;
use dilepton_core::selection::Channel;
use dilepton_runner::{run_events, EventSelection, RunConfig};

#[derive(Parser)]
#[command(
    name = "dilepton",
    about = "Dilepton CLI — best ee / mumu / emu pair selection per event"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the best lepton pair per channel for every event in a JSON file.
    Select {
        /// JSON file holding an array of event records.
        #[arg(long)]
        events: PathBuf,

        /// Run configuration (TOML). Defaults to the standard cuts.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Restrict to these channels (ee, mumu, emu). Repeatable.
        #[arg(long = "channel")]
        channels: Vec<Channel>,

        /// Process events on the current thread only.
        #[arg(long, default_value_t = false)]
        serial: bool,

        /// Print only the single best pair across channels per event.
        #[arg(long, default_value_t = false)]
        best: bool,

        /// Write JSON lines here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the default run configuration as TOML.
    Cuts,
    /// Validate a run configuration and print its cut fingerprint.
    CheckConfig {
        /// Path to a TOML run configuration.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Select {
            events,
            config,
            channels,
            serial,
            best,
            output,
        } => run_select(&events, config.as_deref(), channels, serial, best, output.as_deref()),
        Commands::Cuts => run_cuts(),
        Commands::CheckConfig { path } => run_check_config(&path),
    }
}

fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    match path {
        Some(p) => RunConfig::from_file(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(RunConfig::default()),
    }
}

fn run_select(
    events_path: &Path,
    config_path: Option<&Path>,
    channels: Vec<Channel>,
    serial: bool,
    best: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if !channels.is_empty() {
        config = config.with_channels(channels);
    }
    if serial {
        config = config.with_parallelism(false);
    }

    let file = File::open(events_path)
        .with_context(|| format!("opening events file {}", events_path.display()))?;
    let records: Vec<EventRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing events file {}", events_path.display()))?;
    info!("read {} events from {}", records.len(), events_path.display());

    let selections = run_events(&records, &config)?;

    let mut out: Box<dyn Write> = match output {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("creating {}", p.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    for sel in &selections {
        if best {
            serde_json::to_writer(&mut out, &best_line(sel))?;
        } else {
            serde_json::to_writer(&mut out, sel)?;
        }
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}

fn best_line(sel: &EventSelection) -> serde_json::Value {
    match sel.best() {
        Some((channel, result)) => json!({
            "event": sel.event,
            "channel": channel,
            "result": result,
        }),
        None => json!({ "event": sel.event, "channel": null, "result": null }),
    }
}

fn run_cuts() -> Result<()> {
    print!("{}", RunConfig::default().to_toml()?);
    Ok(())
}

fn run_check_config(path: &Path) -> Result<()> {
    let config = load_config(Some(path))?;
    config
        .validate()
        .with_context(|| format!("validating {}", path.display()))?;
    println!("config OK: {}", path.display());
    println!(
        "channels: {}",
        config
            .channels
            .iter()
            .map(|ch| ch.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("cut fingerprint: {}", config.selection.fingerprint()?);
    Ok(())
}
