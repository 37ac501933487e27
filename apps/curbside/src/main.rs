//! curbside: replay a street parking survey through the contention model.
//!
//! Vehicles from the survey arrive one at a time, take one of the street's
//! service slots, draw their goods from a shared parking budget, unload,
//! and leave.  A monitor warns whenever the budget falls below a threshold.
//!
//! ```text
//! curbside --data survey.csv --config run.toml --until 5000 --output out/ -v
//! ```

mod sample;

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use pk_core::{SimConfig, Spacing};
use pk_output::{CsvWriter, TraceObserver};
use pk_records::{load_records_csv, load_records_reader};
use pk_street::ScenarioBuilder;

use sample::SAMPLE_CSV;

#[derive(Parser)]
#[command(name = "curbside")]
#[command(about = "Discrete-event simulation of delivery parking contention on a street")]
struct Cli {
    /// Survey CSV to replay.  Runs the built-in sample when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// TOML run configuration.  Missing keys take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop the run at this virtual time (overrides `horizon`).
    #[arg(long)]
    until: Option<f64>,

    /// RNG seed (overrides `seed`).
    #[arg(long)]
    seed: Option<u64>,

    /// Concurrent street slots (overrides `street_capacity`).
    #[arg(long)]
    street: Option<u32>,

    /// Space arrivals by the survey's own timestamps instead of random draws.
    #[arg(long)]
    replay_spacing: bool,

    /// Directory for `vehicles.csv` and `alerts.csv`.
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::Warn,
            (false, 0) => LevelFilter::Info,
            (false, 1) => LevelFilter::Debug,
            (false, _) => LevelFilter::Trace,
        }
    }

    /// File config (or defaults) with command-line overrides applied.
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => SimConfig::default(),
        };
        if let Some(until) = self.until {
            config.horizon = until;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(street) = self.street {
            config.street_capacity = street;
        }
        if self.replay_spacing {
            config.spacing = Spacing::Records;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = cli.sim_config()?;

    // 1. Load the survey.
    let records = match &cli.data {
        Some(path) => load_records_csv(path)
            .with_context(|| format!("reading survey {}", path.display()))?,
        None => {
            info!("no --data given, using the built-in sample survey");
            load_records_reader(Cursor::new(SAMPLE_CSV))?
        }
    };
    info!("loaded {} street events", records.len());

    // 2. Build the scenario.
    let mut scenario = ScenarioBuilder::new(config, records).build()?;

    // 3. Run with the CSV trace attached.
    let writer = CsvWriter::new(&cli.output)
        .with_context(|| format!("opening output directory {}", cli.output.display()))?;
    let mut obs = TraceObserver::new(writer).ignoring([scenario.monitor(), scenario.generator()]);

    let wall = Instant::now();
    let summary = scenario.run(&mut obs)?;
    let elapsed = wall.elapsed();

    obs.finish()?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing trace output");
    }

    // 4. Report.
    let config = scenario.config();
    let (level, capacity, fill) = scenario
        .parking_state()
        .map(|c| (c.level(), c.capacity(), c.fill_pct()))
        .unwrap_or((0, config.parking_capacity, 0.0));

    println!();
    println!("=== curbside ===");
    println!("Street events loaded : {}", scenario.record_count());
    println!("Vehicles spawned     : {}", obs.vehicles_started());
    println!("Vehicles finished    : {}", obs.vehicles_finished());
    println!("Vehicles in street   : {}", obs.vehicles_started() - obs.vehicles_finished());
    println!("Low-level alerts     : {}", obs.alerts());
    println!("Parking level        : {level}/{capacity} ({fill:.1}%)");
    println!(
        "Final time           : {:.1}{}",
        summary.final_time.units(),
        if summary.horizon_reached { " (horizon reached)" } else { "" }
    );
    println!("Events dispatched    : {} in {elapsed:.2?}", summary.dispatched);
    println!("Trace written to     : {}", cli.output.display());

    Ok(())
}
