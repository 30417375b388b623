//! CLI argument definitions for the `pbp` binary.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pbp_model::StrengthState;

#[derive(Parser)]
#[command(
    name = "pbp",
    version,
    about = "Play-by-play shot features and strength-filtered player statistics",
    long_about = "Derive per-event shot features (distance, angle, rebound, rush, zone, \n\
                  score differential) from a play-by-play CSV export, and aggregate \n\
                  individual player-game counting statistics for one strength state."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Append derived shot features to an event table.
    Enrich(EnrichArgs),

    /// Compute individual player-game statistics for one strength state.
    Aggregate(AggregateArgs),

    /// List the supported strength labels and their scraper counts.
    Strengths,
}

#[derive(Parser)]
pub struct EnrichArgs {
    /// Play-by-play CSV, in game order.
    #[arg(value_name = "EVENTS_CSV")]
    pub input: PathBuf,

    /// Where to write the enriched table.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// JSON file overriding feature thresholds.
    #[arg(long = "config", value_name = "JSON")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
#[command(group(
    ArgGroup::new("state")
        .required(true)
        .args(["strength", "skaters_for"])
))]
pub struct AggregateArgs {
    /// Play-by-play CSV, enriched unless `--enrich` is given.
    #[arg(value_name = "EVENTS_CSV")]
    pub input: PathBuf,

    /// On-ice strength such as `5v4` (power play) or `4v5` (penalty kill).
    #[arg(long = "strength", value_name = "LABEL")]
    pub strength: Option<String>,

    /// Raw scraper count for the credited team (goalie included).
    #[arg(long = "skaters-for", value_name = "N", requires = "skaters_against")]
    pub skaters_for: Option<i64>,

    /// Raw scraper count for the opponent (goalie included).
    #[arg(long = "skaters-against", value_name = "N", requires = "skaters_for")]
    pub skaters_against: Option<i64>,

    /// Where to write the player-game table.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Derive features first when the input is a raw export.
    #[arg(long = "enrich")]
    pub enrich: bool,

    /// JSON file overriding feature thresholds (with `--enrich`).
    #[arg(long = "config", value_name = "JSON", requires = "enrich")]
    pub config: Option<PathBuf>,
}

impl AggregateArgs {
    pub fn strength_state(&self) -> Result<StrengthState> {
        match (&self.strength, self.skaters_for, self.skaters_against) {
            (Some(label), _, _) => Ok(StrengthState::from_label(label)?),
            (None, Some(skaters_for), Some(skaters_against)) => {
                Ok(StrengthState::new(skaters_for, skaters_against))
            }
            _ => bail!("pass --strength or both --skaters-for and --skaters-against"),
        }
    }
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
