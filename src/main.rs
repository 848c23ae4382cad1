mod config;
mod report;
mod stroke_io;
mod synth;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{Level, info};

use canvas::config::ConfigError;

use crate::config::{ConfigArgs, LoadError};
use crate::stroke_io::StrokeError;
use crate::synth::SynthParams;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Stroke(#[from] StrokeError),
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "circle-game", about = "Score freehand circle strokes")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log level; overrides -v.
    #[arg(long, env = "CIRCLE_LOG", global = true)]
    log: Option<Level>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a recorded stroke.
    Score(ScoreArgs),
    /// Write a synthetic circle stroke to stdout.
    Sample(SynthParams),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Stroke JSON file; `-` or omitted reads stdin.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Print the result as JSON instead of a report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.log, cli.verbose);

    match cli.command {
        Command::Score(args) => run_score(&cli.config, args),
        Command::Sample(params) => run_sample(&params),
    }
}

fn init_tracing(log: Option<Level>, verbose: u8) {
    let level = log.unwrap_or(match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    });
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
}

fn run_score(config: &ConfigArgs, args: ScoreArgs) -> Result<(), CliError> {
    let scoring = config.load()?;
    let samples = match args.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(&path).map_err(|source| CliError::Open { path, source })?;
            stroke_io::read_stroke(BufReader::new(file))?
        }
        _ => stroke_io::read_stroke(io::stdin().lock())?,
    };

    let result = stroke_io::replay(&samples, scoring)?;
    info!(samples = samples.len(), tier = result.tier.as_str(), score = ?result.score, "stroke evaluated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report::human(&result, samples.len()));
    }
    Ok(())
}

fn run_sample(params: &SynthParams) -> Result<(), CliError> {
    let samples = synth::generate(params);
    info!(points = samples.len(), seed = ?params.seed, "generated stroke");
    println!("{}", stroke_io::write_stroke(&samples)?);
    Ok(())
}
