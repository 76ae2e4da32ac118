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
    author = "ProFlex Developers",
    version,
    about = "ProFlex CLI - A command-line interface for ProFlex, a per-residue protein flexibility predictor driven by random-forest regression.",
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
    /// Predict per-residue flexibility for a sequence, a structure, or a FASTA batch.
    Predict(PredictArgs),
    /// Inspect or generate random-forest model artifacts.
    Model(ModelArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// The input to score; exactly one form must be given.
    #[command(flatten)]
    pub input: PredictInput,

    /// Path to a random-forest model artifact.
    /// When omitted, the built-in baseline matching the input is used.
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write results as CSV to this path instead of printing a table.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Override the sliding-window half-width from the config file.
    #[arg(short, long, value_name = "INT")]
    pub window: Option<usize>,

    /// Override the contact radius in angstroms from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub contact_radius: Option<f64>,
}

/// A group enforcing that exactly one input form is supplied.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct PredictInput {
    /// An amino-acid sequence in one-letter codes.
    #[arg(short, long, value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Path to a structure file in PDB format.
    #[arg(short = 't', long, value_name = "PATH")]
    pub structure: Option<PathBuf>,

    /// Path to a FASTA file; every record is scored.
    #[arg(short, long, value_name = "PATH")]
    pub fasta: Option<PathBuf>,
}

/// Arguments for the `model` subcommand.
#[derive(Args, Debug)]
pub struct ModelArgs {
    #[command(subcommand)]
    pub command: ModelCommands,
}

/// Available commands for model artifact management.
#[derive(Subcommand, Debug)]
pub enum ModelCommands {
    /// Print the identity and shape of a model artifact.
    Inspect {
        /// Path to the model artifact to inspect.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Write one of the built-in baseline models to an artifact file.
    WriteBaseline {
        /// The feature kind: 'sequence-profile', 'structure-profile' or 'structure-means'.
        #[arg(short, long, value_name = "KIND")]
        kind: String,

        /// Path for the output artifact file.
        #[arg(short, long, required = true, value_name = "PATH")]
        path: PathBuf,
    },
}
