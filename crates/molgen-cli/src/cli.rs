use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molgen CLI - Synthesizes ranked batches of plausible mock small-molecule records for tooling that expects realistic molecule metadata.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a batch of mock compound records ranked by drug-likeness.
    Generate(GenerateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of records to generate.
    #[arg(short = 'n', long, default_value_t = 5, value_name = "INT")]
    pub count: usize,

    /// Seed for the random source, for reproducible batches.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Use this mechanism-of-action text for every record instead of sampling one.
    #[arg(long, value_name = "TEXT")]
    pub mechanism: Option<String>,

    /// Emit the batch as pretty-printed JSON instead of the human-readable report.
    #[arg(long)]
    pub json: bool,
}
