use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use closest_pair::{
    app::{format_error_report, solve_input, Config, ExitPolicy},
    experiment::{Experiment, ExperimentMode},
    generator::{PointGenerator, DEFAULT_BOUND, DEFAULT_SEED},
    output::DEFAULT_SIGNIFICANT_DIGITS,
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Minimum distance between any two points of a planar point set
#[derive(Parser)]
#[command(name = "closest-pair")]
#[command(version)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Defaults to `solve` reading stdin
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a point file and print the closest-pair distance
    Solve(SolveArgs),
    /// Print a random point file
    Generate(GenerateArgs),
    /// Time the solver over a range of input sizes and print `n,nanos` rows
    Experiment(ExperimentArgs),
}

#[derive(Parser)]
struct SolveArgs {
    /// Point file; stdin when omitted
    input: Option<PathBuf>,

    /// Significant figures in the printed distance
    #[arg(long, default_value_t = DEFAULT_SIGNIFICANT_DIGITS)]
    digits: usize,

    /// Exit status used when the input is rejected
    #[arg(long, value_enum, default_value = "success", env = "CLOSEST_PAIR_FORMAT_ERROR_EXIT")]
    format_error_exit: ExitArg,
}

#[derive(Parser)]
struct GenerateArgs {
    /// Number of points
    n: usize,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Coordinates are drawn from [0, bound)
    #[arg(long, default_value_t = DEFAULT_BOUND)]
    bound: f64,

    /// Sort the points by (y, x)
    #[arg(long, default_value = "false")]
    worst_case: bool,
}

#[derive(Parser)]
struct ExperimentArgs {
    /// Largest input size; sizes run from 2 up to this
    max_n: usize,

    #[arg(long, value_enum, default_value = "random")]
    mode: ModeArg,

    /// Runs per input size
    #[arg(long, default_value = "10")]
    trials: usize,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExitArg {
    Success,
    Failure,
}

impl From<ExitArg> for ExitPolicy {
    fn from(arg: ExitArg) -> Self {
        match arg {
            ExitArg::Success => ExitPolicy::Success,
            ExitArg::Failure => ExitPolicy::Failure,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Random,
    WorstCase,
}

impl From<ModeArg> for ExperimentMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Random => ExperimentMode::Random,
            ModeArg::WorstCase => ExperimentMode::WorstCase,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // stdout carries results only
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Solve(SolveArgs::parse_from(["closest-pair"])));
    let result = match command {
        Commands::Solve(args) => solve(args),
        Commands::Generate(args) => generate(args).map(|_| ExitCode::SUCCESS),
        Commands::Experiment(args) => experiment(args).map(|_| ExitCode::SUCCESS),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            // the subscriber may be filtered off entirely
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn solve(args: SolveArgs) -> Result<ExitCode> {
    let config = Config {
        significant_digits: args.digits,
        format_error_exit: args.format_error_exit.into(),
    };
    let input = match &args.input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf).context("failed to read stdin")?;
            buf
        }
    };

    let mut stdout = io::stdout().lock();
    match solve_input(&input, &config) {
        Ok(line) => {
            writeln!(stdout, "{line}").context("failed to write result")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            warn!(error = %e, "rejected input");
            writeln!(stdout, "{}", format_error_report()).context("failed to write result")?;
            Ok(ExitCode::from(config.format_error_exit.code()))
        }
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let generator = PointGenerator::new(args.bound, args.seed)?;
    let points = if args.worst_case {
        generator.generate_worst_case(args.n)
    } else {
        generator.generate(args.n)
    };
    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(out, "{}", points.len())?;
    for p in &points {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    out.flush()?;
    Ok(())
}

fn experiment(args: ExperimentArgs) -> Result<()> {
    let experiment = Experiment {
        trials: args.trials,
        seed: args.seed,
        ..Experiment::new(args.max_n, args.mode.into())
    };
    let mut out = BufWriter::new(io::stdout().lock());
    let samples = experiment.run(&mut out).context("experiment failed")?;
    out.flush()?;
    info!(samples = samples.len(), "experiment finished");
    Ok(())
}
