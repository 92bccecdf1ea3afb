//! Mastermind Solver - CLI
//!
//! Plays Mastermind against a TCP game server, or offline against the
//! built-in simulator.

use anyhow::Result;
use clap::{Parser, Subcommand, error::ErrorKind};
use mastermind_solver::{
    core::Guess,
    commands::{
        PlayConfig, SimulateConfig, play_server, print_test_all_statistics, random_secrets,
        run_benchmark, run_test_all, simulate_secret,
    },
    output::{print_benchmark_result, print_outcome, print_simulate_result},
    session::{EXIT_FAILURE, EXIT_SUCCESS, GameError, MAX_ROUNDS, SessionConfig},
};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code-breaker for a 5-slot, 8-color game server",
    version,
    author,
    args_conflicts_with_subcommands = true,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game server hostname or IPv4 address
    #[arg(requires = "port")]
    host: Option<String>,

    /// Game server port
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,

    /// Give up before sending more than this many guesses
    #[arg(long, global = true)]
    max_rounds: Option<u32>,

    /// Log phase changes and results
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log every round
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the built-in simulator holding SECRET
    Simulate {
        /// The secret, 5 symbols from bdgorsvw
        secret: String,

        /// Simulator's round budget
        #[arg(long, default_value_t = MAX_ROUNDS)]
        server_rounds: u32,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play every possible secret
    TestAll {
        /// Limit number of secrets to play
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// Exit code for an error, using the server-flag codes where they apply
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<GameError>()
        .map_or(EXIT_FAILURE, GameError::exit_code)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(EXIT_SUCCESS),
                // Code 2 is reserved for the server's parity error
                _ => ExitCode::from(EXIT_FAILURE),
            };
        }
    };

    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("mastermind_solver: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let session = SessionConfig {
        max_rounds: cli.max_rounds,
    };

    let Some(command) = cli.command else {
        let (Some(host), Some(port)) = (cli.host, cli.port) else {
            anyhow::bail!("expected <HOST> <PORT> or a subcommand");
        };
        return run_play_command(host, port, session);
    };

    match command {
        Commands::Simulate {
            secret,
            server_rounds,
        } => run_simulate_command(secret, server_rounds, session),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, session);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(limit, session);
            Ok(())
        }
    }
}

fn run_play_command(host: String, port: u16, session: SessionConfig) -> Result<()> {
    let config = PlayConfig {
        host,
        port,
        session,
    };
    let outcome = play_server(&config)?;
    print_outcome(&outcome);
    Ok(())
}

fn run_simulate_command(secret: String, server_rounds: u32, session: SessionConfig) -> Result<()> {
    let mut config = SimulateConfig::new(secret);
    config.server_rounds = server_rounds;
    config.session = session;

    let result = simulate_secret(&config)?;
    print_simulate_result(&result);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: Option<u64>, session: SessionConfig) {
    println!("Running benchmark on {count} random secrets...");

    let secrets = random_secrets(count, seed);
    let result = run_benchmark(&secrets, session);
    print_benchmark_result(&result);
}

fn run_test_all_command(limit: Option<usize>, session: SessionConfig) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    let total = Guess::all().count();
    println!(
        "\nTesting against {} possible secrets\n",
        limit.map_or(total, |n| n.min(total))
    );

    let stats = run_test_all(session, limit, true);
    print_test_all_statistics(&stats);
}
