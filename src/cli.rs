use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::criteria::{Criterion, InputError, Rating, parse_rating_pair};
use crate::report::ReportFormat;

pub const DEFAULT_MODEL_PATH: &str = "model/employability.json";

#[derive(Debug, Parser)]
#[command(
    name = "employability-predict",
    version,
    about = "Predict student employability from eight soft-skill ratings"
)]
struct Cli {
    /// Trained artifact (columns, scaler and classifier) in JSON form.
    #[arg(long, env = "EMPLOYABILITY_MODEL", default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// JSON object mapping criterion keys to trained column names.
    #[arg(long)]
    column_map: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report errors on stderr.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Fill in the ratings interactively.
    Form,
    /// Predict from ratings given on the command line or in a file.
    Predict {
        /// A single rating, e.g. --rating spr=4. Repeatable.
        #[arg(long = "rating", value_name = "KEY=N", value_parser = parse_rating_arg)]
        ratings: Vec<(Criterion, Rating)>,

        /// JSON object of criterion key to rating (or null when unanswered).
        #[arg(long)]
        ratings_file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Show the artifact and how its columns bind to criteria.
    Inspect,
}

fn parse_rating_arg(raw: &str) -> Result<(Criterion, Rating), InputError> {
    parse_rating_pair(raw)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Form,
    Predict {
        ratings: Vec<(Criterion, Rating)>,
        ratings_file: Option<PathBuf>,
        format: ReportFormat,
    },
    Inspect,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub model_path: PathBuf,
    pub column_map: Option<PathBuf>,
    pub log_level: LogLevel,
    pub command: Command,
}

pub fn parse_args<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;

    let log_level = if cli.quiet {
        LogLevel::Error
    } else {
        match cli.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    };

    let command = match cli.command {
        CliCommand::Form => Command::Form,
        CliCommand::Predict {
            ratings,
            ratings_file,
            format,
        } => Command::Predict {
            ratings,
            ratings_file,
            format,
        },
        CliCommand::Inspect => Command::Inspect,
    };

    Ok(RunConfig {
        model_path: cli.model,
        column_map: cli.column_map,
        log_level,
        command,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
