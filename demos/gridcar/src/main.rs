//! gridcar — command-line driver for the gridcar simulator.
//!
//! ```text
//! gridcar list                          # built-in scenarios
//! gridcar run crossing                  # run one of them
//! gridcar random --cars 6 --seed 7      # seeded random scenario
//! gridcar --json --output out/ run pile-up
//! ```
//!
//! The report goes to stdout; logs go to stderr (`RUST_LOG`, or `-v`).

mod scenarios;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use gc_output::{CsvWriter, SimOutputObserver};
use gc_sim::{NoopObserver, Sim, SimObserver, SimReport};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use scenarios::{RandomParams, SCENARIOS};

#[derive(Parser)]
#[command(name = "gridcar")]
#[command(about = "Simulate cars on a grid and report where they end up", version)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the report as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Write car_snapshots.csv, collisions.csv and report.csv to this directory
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in scenarios
    List,

    /// Run a built-in scenario
    Run {
        /// Scenario name (see `gridcar list`)
        scenario: String,
    },

    /// Generate and run a seeded random scenario
    Random {
        #[arg(long, default_value_t = 10)]
        width: u32,

        #[arg(long, default_value_t = 10)]
        height: u32,

        /// Number of cars (at most 10000)
        #[arg(long, default_value_t = 4)]
        cars: usize,

        /// Maximum commands per car (at most 10000)
        #[arg(long, default_value_t = 10)]
        commands: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Snapshots are only worth collecting when they are written somewhere.
    let snapshot_interval = u64::from(cli.output.is_some());

    let sim = match cli.command {
        Commands::List => {
            for s in SCENARIOS {
                println!("{:<10} {}", s.name, s.description);
            }
            return Ok(());
        }
        Commands::Run { scenario } => {
            let Some(s) = scenarios::find(&scenario) else {
                bail!("unknown scenario {scenario:?}; try `gridcar list`");
            };
            info!(scenario = s.name, "running built-in scenario");
            s.build(snapshot_interval)?
        }
        Commands::Random { width, height, cars, commands, seed } => {
            let params = RandomParams { width, height, cars, max_commands: commands, seed };
            info!(width, height, cars, seed, "running random scenario");
            scenarios::build_random(&params, snapshot_interval)?
        }
    };

    let report = match &cli.output {
        Some(dir) => run_with_csv(sim, dir, cli.json)?,
        None => run_and_print(sim, &mut NoopObserver, cli.json),
    };
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn run_with_csv(sim: Sim, dir: &Path, quiet: bool) -> Result<SimReport> {
    let writer = CsvWriter::new(dir)
        .with_context(|| format!("cannot create output files in {}", dir.display()))?;
    let mut obs = SimOutputObserver::new(writer);
    let report = run_and_print(sim, &mut obs, quiet);
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }
    info!(dir = %dir.display(), "output written");
    Ok(report)
}

/// Print the car listing, run, print the results.  `quiet` skips the text.
fn run_and_print<O: SimObserver>(mut sim: Sim, observer: &mut O, quiet: bool) -> SimReport {
    if !quiet {
        println!("Your current list of cars are:");
        for car in &sim.cars {
            println!("{car}");
        }
        println!();
    }

    let report = sim.run_with(observer);

    if !quiet {
        println!("After simulation, the result is:");
        println!("{report}");
    }
    report
}
