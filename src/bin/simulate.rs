//! Spacecraft reliability simulator CLI.
//!
//! Runs the Monte Carlo estimator and the analytical formula on the same
//! mission and prints a comparison report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                              # Reference 5-subsystem mission
//!   cargo run --bin simulate -- -p 0.1,0.05 -n 1000000    # Custom mission
//!   cargo run --bin simulate -- --seed 42 --runs 10       # Reproducible repeated runs

use clap::Parser;
use simplelog::LevelFilter;

use reliability::constants::{
    DEFAULT_FAILURE_PROBS, DEFAULT_RUNS, DEFAULT_SAMPLES, VERIFICATION_TOLERANCE,
};
use reliability::simulator::{run_simulation, SimConfig};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Failure probability per subsystem, comma-separated.
    #[arg(short, long, value_name = "P,...", value_delimiter = ',')]
    probs: Option<Vec<f64>>,

    /// Monte Carlo samples per run.
    #[arg(short = 'n', long, value_name = "INT", default_value_t = DEFAULT_SAMPLES)]
    samples: u64,

    /// Number of independent runs.
    #[arg(short, long, value_name = "INT", default_value_t = DEFAULT_RUNS)]
    runs: u32,

    /// Base seed; run `i` is seeded with `seed + i`.
    #[arg(short, long, value_name = "INT")]
    seed: Option<u64>,

    /// Absolute error threshold for verification.
    #[arg(short, long, value_name = "FLOAT", default_value_t = VERIFICATION_TOLERANCE)]
    tolerance: f64,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// More log output (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn to_config(&self) -> SimConfig {
        SimConfig {
            failure_probs: self
                .probs
                .clone()
                .unwrap_or_else(|| DEFAULT_FAILURE_PROBS.to_vec()),
            n_samples: self.samples,
            num_runs: self.runs,
            seed: self.seed,
            tolerance: self.tolerance,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let config = args.to_config();
    log::debug!("config = {:?}", config);

    let report = run_simulation(&config)?;

    if args.json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }

    Ok(())
}
