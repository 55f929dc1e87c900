//! ddsim: destination-dispatch elevator simulation from the command line.
//!
//! Reads call requests from a CSV file (`time,id,source,dest`) or generates
//! a seeded workload, runs the simulation to completion, writes the
//! elevator snapshot stream, request log, rejections and metrics summary,
//! and prints the summary.
//!
//! ```text
//! ddsim --input calls.csv --floors 25 --elevators 4 --output out/
//! ddsim --requests 5000 --seed 7 --format sqlite
//! ```

mod observer;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};

use dd_core::BuildingConfig;
use dd_output::{CsvWriter, OutputWriter, SimOutputObserver};
use dd_requests::{CallRequest, WorkloadSpec, load_requests_csv, write_requests};
use dd_sim::{MetricsSummary, SimBuilder, SimObserver, Stats};

use observer::CountingObserver;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Sqlite,
    Parquet,
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Request CSV with columns time,id,source,dest.  Without it a workload
    /// is generated.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// JSON building config; flags below override its fields.
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[arg(long)]
    floors: Option<u32>,

    #[arg(long)]
    elevators: Option<u32>,

    #[arg(long)]
    capacity: Option<u32>,

    /// Abort if the run has not finished by this tick.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Number of requests to generate when no input is given.
    #[arg(long, default_value_t = 1_000)]
    requests: u32,

    /// Generated arrivals fall in [0, horizon).
    #[arg(long, default_value_t = 3_600)]
    horizon: u64,

    /// Share of generated requests that start at the ground floor.
    #[arg(long, default_value_t = 0.3)]
    lobby_share: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Save the generated workload as CSV so the run can be replayed.
    #[arg(long)]
    save_workload: Option<PathBuf>,

    /// Output directory.
    #[arg(long, short, default_value = "output/ddsim")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write elevator snapshots every N ticks (0 = never).
    #[arg(long, default_value_t = 1)]
    snapshot_interval: u64,

    /// Increase log verbosity (-v debug, -vv trace).  Overrides RUST_LOG.
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Setup helpers ─────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn building_config(args: &Args) -> Result<BuildingConfig> {
    let mut config: BuildingConfig = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))?
        }
        None => BuildingConfig::default(),
    };
    if let Some(n) = args.floors {
        config.floor_count = n;
    }
    if let Some(n) = args.elevators {
        config.elevator_count = n;
    }
    if let Some(n) = args.capacity {
        config.capacity = n;
    }
    if args.max_ticks.is_some() {
        config.max_ticks = args.max_ticks;
    }
    Ok(config)
}

fn call_requests(args: &Args, config: &BuildingConfig) -> Result<Vec<CallRequest>> {
    if let Some(path) = &args.input {
        let requests =
            load_requests_csv(path).with_context(|| format!("loading {}", path.display()))?;
        info!("loaded {} requests from {}", requests.len(), path.display());
        return Ok(requests);
    }

    let spec = WorkloadSpec {
        requests:    args.requests,
        floor_count: config.floor_count,
        horizon:     args.horizon,
        lobby_share: args.lobby_share,
    };
    let requests = spec.generate(args.seed);
    info!("generated {} requests (seed {})", requests.len(), args.seed);

    if let Some(path) = &args.save_workload {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_requests(file, &requests)?;
        info!("saved workload to {}", path.display());
    }
    Ok(requests)
}

// ── Run ───────────────────────────────────────────────────────────────────────

/// Build and run the simulation, writing through `writer`.
fn simulate<W: OutputWriter>(
    args:     &Args,
    config:   BuildingConfig,
    requests: Vec<CallRequest>,
    writer:   W,
) -> Result<()> {
    let mut sim = SimBuilder::new(config)
        .requests(requests)
        .snapshot_interval(args.snapshot_interval)
        .build()?;

    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));
    let t0 = Instant::now();
    let summary = match sim.run(&mut obs) {
        Ok(summary) => summary,
        Err(e) => {
            // Keep what completed before the failure.
            let partial = sim.metrics().summary();
            obs.on_sim_end(sim.clock.current_tick, &partial);
            if let Some(out) = obs.inner.take_error() {
                eprintln!("output error: {out}");
            }
            eprintln!(
                "run stopped at {}: {} requests served, {} not yet arrived",
                sim.clock.current_tick,
                partial.served,
                sim.pending_arrivals()
            );
            return Err(e.into());
        }
    };
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  total time taken   : {} ticks", sim.clock.current_tick.0);
    println!("  requests served    : {}", summary.served);
    println!("  requests rejected  : {}", summary.rejected);
    println!("  fallback appends   : {}", obs.fallbacks);
    println!("  snapshot rows      : {}", obs.snapshot_rows);
    println!();
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &MetricsSummary) {
    println!("{:<8} {:>8} {:>8} {:>10} {:>10}", "Metric", "Min", "Max", "Mean", "Median");
    println!("{}", "-".repeat(48));
    let rows: [(&str, &Stats); 3] = [
        ("wait", &summary.wait),
        ("travel", &summary.travel),
        ("total", &summary.total),
    ];
    for (name, s) in rows {
        println!(
            "{:<8} {:>8} {:>8} {:>10.2} {:>10.1}",
            name, s.min, s.max, s.mean, s.median
        );
    }
}

fn run_with_format(args: &Args, config: BuildingConfig, requests: Vec<CallRequest>) -> Result<()> {
    let dir: &Path = &args.output;
    match args.format {
        Format::Csv => simulate(args, config, requests, CsvWriter::new(dir)?),
        #[cfg(feature = "sqlite")]
        Format::Sqlite => simulate(args, config, requests, dd_output::SqliteWriter::new(dir)?),
        #[cfg(feature = "parquet")]
        Format::Parquet => simulate(args, config, requests, dd_output::ParquetWriter::new(dir)?),
        #[allow(unreachable_patterns)]
        other => bail!("output format {other:?} requires building ddsim with the matching feature"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = building_config(&args)?;
    config.validate()?;
    println!("=== ddsim: destination dispatch ===");
    println!(
        "Floors: {}  |  Elevators: {}  |  Capacity: {}",
        config.floor_count, config.elevator_count, config.capacity
    );

    let requests = call_requests(&args, &config)?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    run_with_format(&args, config, requests)
}
