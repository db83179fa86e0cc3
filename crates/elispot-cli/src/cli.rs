//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "elispot-features",
    version,
    about = "Build a numeric ELISPOT feature table from sample manifests and IGS1 results",
    long_about = "Merge two clinical sample manifests with an IGS1 ELISPOT results file,\n\
                  filter to the PBMC matrix and the requested stimulus/cell type, derive\n\
                  turn-around time, bin spot counts into a binary label, and write the\n\
                  numeric feature table as CSV."
)]
pub struct Cli {
    /// First sample manifest CSV.
    #[arg(value_name = "MANIFEST1")]
    pub manifest1: PathBuf,

    /// Second sample manifest CSV.
    #[arg(value_name = "MANIFEST2")]
    pub manifest2: PathBuf,

    /// IGS1 assay results CSV.
    #[arg(value_name = "IGS1")]
    pub igs1: PathBuf,

    /// Output CSV path.
    #[arg(value_name = "OUTFILE")]
    pub outfile: PathBuf,

    /// Stimulus marker used to locate and filter the assay subset.
    #[arg(long = "stimulus", value_name = "VALUE")]
    pub stimulus: Option<String>,

    /// Cell type kept from the assay file.
    #[arg(long = "cell-type", value_name = "VALUE")]
    pub cell_type: Option<String>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
