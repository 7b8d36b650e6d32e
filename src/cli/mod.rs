pub mod config_builder;
pub mod setup;

use clap::Parser;
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "ftn")]
#[command(
    about = "Classify an integer as Fibonacci-like (F), triangular (T), power of ten (P) or none (N)",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Integer to classify (read from stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Classify every non-empty line of stdin
    #[arg(long, conflicts_with = "value")]
    pub batch: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// TOML file with a [bounds] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search bound of the Fibonacci-like rule
    #[arg(long, env = "FTN_FIBONACCI_BOUND")]
    pub fibonacci_bound: Option<i64>,

    /// Search bound of the triangular rule
    #[arg(long, env = "FTN_TRIANGULAR_BOUND")]
    pub triangular_bound: Option<i64>,

    /// Search bound of the power-of-ten rule
    #[arg(long, env = "FTN_POWER_BOUND")]
    pub power_bound: Option<i64>,

    /// Print the rule table and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
