use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use enumerable::Pipeline;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "enumerable", about = "Evaluate lazy sequence pipelines over integers")]
struct Cli {
    /// Log pipeline construction and materialization to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a pipeline against whitespace-separated integers.
    Run {
        /// Input file (reads stdin when omitted).
        #[arg(long)]
        input: Option<PathBuf>,
        /// Stage, applied in order (e.g. `filter:even`, `map:mul:3`, `sort:asc`, `save`).
        #[arg(long = "stage")]
        stages: Vec<String>,
        /// Terminal operation (e.g. `to-vec`, `len`, `max`, `nth:2`, `find:gt:10`).
        #[arg(long)]
        terminal: String,
    },
    /// Validate a pipeline and print its normalized form.
    Check {
        /// Stage, applied in order.
        #[arg(long = "stage")]
        stages: Vec<String>,
        /// Terminal operation.
        #[arg(long)]
        terminal: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            input,
            stages,
            terminal,
        } => run_pipeline(input.as_deref(), &stages, &terminal)?,
        Commands::Check { stages, terminal } => check_pipeline(&stages, &terminal)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_pipeline(input: Option<&Path>, stages: &[String], terminal: &str) -> Result<()> {
    let pipeline = Pipeline::parse(stages, terminal).context("invalid pipeline")?;
    let values = read_integers(input)?;
    let outcome = pipeline.run(&values);
    println!("{outcome}");
    Ok(())
}

fn check_pipeline(stages: &[String], terminal: &str) -> Result<()> {
    let pipeline = Pipeline::parse(stages, terminal).context("invalid pipeline")?;
    println!("{pipeline}");
    Ok(())
}

fn read_integers(input: Option<&Path>) -> Result<Vec<i64>> {
    let contents = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    contents
        .split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid integer '{}' at position {}", token, idx + 1))
        })
        .collect()
}
