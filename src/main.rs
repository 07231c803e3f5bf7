//! 8-queens annealing CLI.
//!
//! Commands:
//! - solve: anneal one random board and print the start and end boards
//! - sweep: run a (temperature x decay) grid and print the averages table

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use queens_anneal::anneal::{Acceptance, AnnealConfig, Annealer, DEFAULT_FLOOR_TEMPERATURE};
use queens_anneal::board::BoardState;
use queens_anneal::sweep::{SweepConfig, SweepRunner};

#[derive(Parser)]
#[command(name = "queens-anneal")]
#[command(version)]
#[command(about = "Simulated annealing for the 8-queens problem")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Anneal a single random board
    Solve {
        /// Initial temperature
        #[arg(long, default_value = "10000")]
        temperature: f64,

        /// Per-step cooling multiplier in (0, 1)
        #[arg(long, default_value = "0.999")]
        decay: f64,

        /// Stop once the temperature drops to this value
        #[arg(long, default_value_t = DEFAULT_FLOOR_TEMPERATURE)]
        floor: f64,

        /// Acceptance rule for non-improving moves
        #[arg(long, value_enum, default_value = "metropolis")]
        acceptance: AcceptanceArg,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a parameter sweep
    Sweep {
        /// Initial temperatures (comma-separated)
        #[arg(long, default_value = "100,1000,10000", value_delimiter = ',')]
        temperatures: Vec<f64>,

        /// Decays (comma-separated)
        #[arg(long, default_value = "0.9,0.99,0.999", value_delimiter = ',')]
        decays: Vec<f64>,

        /// Runs per (temperature, decay) pair
        #[arg(long, default_value = "100")]
        trials: usize,

        /// Floor temperature
        #[arg(long, default_value_t = DEFAULT_FLOOR_TEMPERATURE)]
        floor: f64,

        /// Acceptance rule for non-improving moves
        #[arg(long, value_enum, default_value = "metropolis")]
        acceptance: AcceptanceArg,

        /// Base random seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AcceptanceArg {
    Metropolis,
    NonWorsening,
}

impl From<AcceptanceArg> for Acceptance {
    fn from(arg: AcceptanceArg) -> Self {
        match arg {
            AcceptanceArg::Metropolis => Acceptance::Metropolis,
            AcceptanceArg::NonWorsening => Acceptance::NonWorsening,
        }
    }
}

fn setup_logging(verbosity: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Solve {
            temperature,
            decay,
            floor,
            acceptance,
            seed,
        } => {
            let config = AnnealConfig::new(temperature, decay)
                .with_floor_temperature(floor)
                .with_acceptance(acceptance.into());
            config.validate().context("invalid annealing parameters")?;

            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, "seeding rng");
            let mut rng = StdRng::seed_from_u64(seed);

            let start = BoardState::generate_random(&mut rng);
            println!("Starting state:");
            print!("{start}");
            println!("Cost: {}\n", start.cost());

            let result = Annealer::run_with_stats(
                &queens_anneal::anneal::QueensProblem,
                start,
                &config,
                &mut rng,
            )?;
            println!("Finishing state:");
            print!("{}", result.state);
            println!("Cost: {}", result.cost);
            info!(steps = result.steps, accepted = result.accepted_moves, "run complete");
        }

        Commands::Sweep {
            temperatures,
            decays,
            trials,
            floor,
            acceptance,
            seed,
        } => {
            let mut config = SweepConfig::default()
                .with_temperatures(temperatures)
                .with_decays(decays)
                .with_trials(trials)
                .with_floor_temperature(floor)
                .with_acceptance(acceptance.into());
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let report = SweepRunner::run(&config).context("invalid sweep parameters")?;
            print!("{report}");
        }
    }

    Ok(())
}
