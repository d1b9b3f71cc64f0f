//! Command parsing and execution for the `cardiolog` binary

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use thiserror::Error;

use cardio_log_domain::entities::NewReading;
use cardio_log_domain::repository::JournalRepositoryTrait;
use cardio_log_domain::services::classify_reading;
use cardio_log_domain::services::{JournalService, JournalServiceError, DEFAULT_TREND_LIMIT};

use crate::config::AppConfig;
use crate::render;

/// Usage text printed by `help` and on usage errors
pub const USAGE: &str = "\
Usage:
  cardiolog status [--window DAYS]
  cardiolog history
  cardiolog trend [--limit N]
  cardiolog add SYS [DIA|-] [PULSE|-] [NOTE...] [--at TIME]
  cardiolog delete ID --yes
  cardiolog clear --yes
  cardiolog rename NAME

TIME is RFC 3339 (2026-10-01T08:00:00+02:00) or local YYYY-MM-DDTHH:MM.
";

/// Command errors
#[derive(Debug, Error)]
pub enum CommandError {
    /// The arguments do not form a command
    #[error("{0}")]
    Usage(String),

    /// A numeric argument did not parse
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A timestamp argument did not parse
    #[error("Invalid time: {0:?} (expected RFC 3339 or YYYY-MM-DDTHH:MM)")]
    InvalidTimestamp(String),

    /// The journal rejected the operation
    #[error(transparent)]
    Journal(#[from] JournalServiceError),
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Status { window_days: Option<u32> },
    History,
    Trend { limit: usize },
    Add(NewReadingArgs),
    Delete { id: String },
    Clear,
    Rename { name: String },
}

/// Arguments of `add`; `None` means not recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReadingArgs {
    pub systolic: i32,
    pub diastolic: Option<i32>,
    pub pulse: Option<i32>,
    pub note: Option<String>,
    /// When the reading was taken; now when absent
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<NewReadingArgs> for NewReading {
    fn from(args: NewReadingArgs) -> Self {
        NewReading {
            systolic: args.systolic,
            diastolic: args.diastolic,
            pulse: args.pulse,
            note: args.note,
            timestamp: args.timestamp,
        }
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, CommandError> {
    value.trim().parse::<T>().map_err(|_| CommandError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parse an optional measurement; `-` or a missing argument means not recorded
fn parse_optional(field: &'static str, value: Option<&String>) -> Result<Option<i32>, CommandError> {
    match value.map(|v| v.as_str()) {
        None | Some("-") => Ok(None),
        Some(v) => parse_number(field, v).map(Some),
    }
}

/// Local formats accepted by `--at` besides RFC 3339
const LOCAL_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse a reading time; local formats are read in the host's time zone
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, CommandError> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    LOCAL_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| CommandError::InvalidTimestamp(value.to_string()))
}

/// Remove `--flag VALUE` from anywhere in the arguments
fn take_option(args: &[String], flag: &str) -> Result<(Vec<String>, Option<String>), CommandError> {
    let Some(index) = args.iter().position(|arg| arg == flag) else {
        return Ok((args.to_vec(), None));
    };

    let value = args
        .get(index + 1)
        .cloned()
        .ok_or_else(|| CommandError::Usage(format!("{} needs a value", flag)))?;
    let mut remaining = args.to_vec();
    remaining.drain(index..=index + 1);
    Ok((remaining, Some(value)))
}

/// Parse `--flag VALUE` out of the remaining arguments
fn parse_flag<T: std::str::FromStr>(
    args: &[String],
    flag: &str,
    field: &'static str,
) -> Result<Option<T>, CommandError> {
    match args {
        [] => Ok(None),
        [name, value] if name == flag => parse_number(field, value).map(Some),
        _ => Err(CommandError::Usage(format!("Unexpected arguments: {}", args.join(" ")))),
    }
}

impl Command {
    /// Parse command-line arguments, without the program name
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Status { window_days: None });
        };

        match name.as_str() {
            "help" | "--help" | "-h" => Ok(Command::Help),
            "status" => Ok(Command::Status {
                window_days: parse_flag(rest, "--window", "window")?,
            }),
            "history" => match rest {
                [] => Ok(Command::History),
                _ => Err(CommandError::Usage("history takes no arguments".to_string())),
            },
            "trend" => Ok(Command::Trend {
                limit: parse_flag(rest, "--limit", "limit")?.unwrap_or(DEFAULT_TREND_LIMIT),
            }),
            "add" => {
                let (values, at) = take_option(rest, "--at")?;
                let systolic = values
                    .first()
                    .ok_or_else(|| CommandError::Usage("add needs a systolic value".to_string()))?;
                let note = values.get(3..).map(|words| words.join(" ")).filter(|n| !n.is_empty());

                Ok(Command::Add(NewReadingArgs {
                    systolic: parse_number("systolic", systolic)?,
                    diastolic: parse_optional("diastolic", values.get(1))?,
                    pulse: parse_optional("pulse", values.get(2))?,
                    note,
                    timestamp: at.as_deref().map(parse_timestamp).transpose()?,
                }))
            }
            "delete" => match rest {
                [id, flag] | [flag, id] if flag == "--yes" && id != "--yes" => {
                    Ok(Command::Delete { id: id.clone() })
                }
                [_] => Err(CommandError::Usage(
                    "delete removes the reading for good; confirm with --yes".to_string(),
                )),
                _ => Err(CommandError::Usage("delete needs exactly one reading id".to_string())),
            },
            "clear" => match rest {
                [flag] if flag == "--yes" => Ok(Command::Clear),
                _ => Err(CommandError::Usage(
                    "clear deletes every reading; confirm with --yes".to_string(),
                )),
            },
            "rename" => match rest {
                [] => Err(CommandError::Usage("rename needs a name".to_string())),
                words => Ok(Command::Rename { name: words.join(" ") }),
            },
            other => Err(CommandError::Usage(format!("Unknown command: {}", other))),
        }
    }
}

/// Run a command against the journal and return the text to print
pub fn execute<R: JournalRepositoryTrait>(
    command: Command,
    journal: &mut JournalService<R>,
    config: &AppConfig,
) -> Result<String, CommandError> {
    match command {
        Command::Help => Ok(USAGE.to_string()),
        Command::Status { window_days } => {
            let status = journal.dashboard(window_days.unwrap_or(config.window_days));
            Ok(render::render_dashboard(journal.user_name(), &status))
        }
        Command::History => Ok(render::render_history(&journal.history())),
        Command::Trend { limit } => Ok(render::render_trend(&journal.trend(limit))),
        Command::Add(args) => {
            let reading = journal.add_reading(args.into())?;
            let category = classify_reading(&reading);
            Ok(format!("Recorded {}\n", render::render_reading(&reading, category)))
        }
        Command::Delete { id } => {
            let removed = journal.delete_reading(&id)?;
            Ok(format!("Deleted {}\n", removed.id))
        }
        Command::Clear => {
            let count = journal.clear_all()?;
            Ok(format!("Deleted {} readings\n", count))
        }
        Command::Rename { name } => {
            journal.rename(&name)?;
            Ok(format!("Profile name set to {}\n", journal.user_name()))
        }
    }
}
