//! Command grammar.
//!
//! # Responsibility
//! - Split a raw line into keyword and argument tail.
//! - Validate the tail per keyword and build a typed `Command`.
//!
//! # Invariants
//! - Parsing never touches the task list; range checks happen on execution.
//! - Task-creating commands yield fully constructed, validated tasks.
//! - Unknown keywords are a normal `Unsupported` command, not an error.

use crate::error::TrackerError;
use crate::model::datetime::parse_datetime;
use crate::model::task::Task;
use chrono::NaiveDateTime;

pub mod help;

/// Keywords that end the session.
pub const EXIT_KEYWORDS: &[&str] = &["bye", "exit"];

const BY_MARKER: &str = "/by";
const FROM_MARKER: &str = "/from";
const TO_MARKER: &str = "/to";
const ON_MARKER: &str = "/on";

/// Typed operation produced from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Find { keyword: String },
    Mark { index: usize },
    Unmark { index: usize },
    Delete { index: usize },
    Add(Task),
    Upcoming { on: NaiveDateTime },
    Help,
    Exit,
    Unsupported { keyword: String },
}

impl Command {
    /// Whether executing this command changes the task list.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Mark { .. } | Self::Unmark { .. } | Self::Delete { .. } | Self::Add(_)
        )
    }

    /// Short stable label for log events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Find { .. } => "find",
            Self::Mark { .. } => "mark",
            Self::Unmark { .. } => "unmark",
            Self::Delete { .. } => "delete",
            Self::Add(_) => "add",
            Self::Upcoming { .. } => "upcoming",
            Self::Help => "help",
            Self::Exit => "exit",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}

/// Parses one raw input line.
///
/// The keyword is the first whitespace-delimited token; everything after the
/// first whitespace character is the tail. A tail that is only whitespace is
/// still present, so `todo   ` fails with `NoName` just like `todo`.
pub fn parse_command(line: &str) -> Result<Command, TrackerError> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (keyword, tail) = match line.split_once(char::is_whitespace) {
        Some((keyword, tail)) => (keyword, Some(tail)),
        None => (line, None),
    };

    match keyword {
        "list" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "find" => parse_find(tail),
        "mark" => Ok(Command::Mark {
            index: parse_index(tail)?,
        }),
        "unmark" => Ok(Command::Unmark {
            index: parse_index(tail)?,
        }),
        "delete" => Ok(Command::Delete {
            index: parse_index(tail)?,
        }),
        "todo" => {
            let name = parse_name(tail.unwrap_or_default())?;
            Ok(Command::Add(Task::todo(name)?))
        }
        "deadline" => parse_deadline(tail),
        "event" => parse_event(tail),
        "upcoming" => {
            let tail = tail.ok_or(TrackerError::NoUpcomingOnDate)?;
            let (_, date) = tail
                .split_once(ON_MARKER)
                .ok_or(TrackerError::NoUpcomingOnDate)?;
            parse_upcoming_date(date)
        }
        "upcomingOn" => parse_upcoming_date(tail.unwrap_or_default()),
        keyword if EXIT_KEYWORDS.contains(&keyword) => Ok(Command::Exit),
        other => Ok(Command::Unsupported {
            keyword: other.to_string(),
        }),
    }
}

fn parse_find(tail: Option<&str>) -> Result<Command, TrackerError> {
    let tail = tail.ok_or(TrackerError::SearchFailed)?;
    let keyword = parse_name(tail)?;
    Ok(Command::Find { keyword })
}

/// Non-numeric input is reported as `TaskNotFound`, the same as a bad index.
fn parse_index(tail: Option<&str>) -> Result<usize, TrackerError> {
    let raw = tail
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(TrackerError::NoIndex)?;
    raw.parse::<usize>().map_err(|_| TrackerError::TaskNotFound)
}

fn parse_name(raw: &str) -> Result<String, TrackerError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(TrackerError::NoName);
    }
    Ok(name.to_string())
}

fn non_blank(tail: Option<&str>) -> Option<&str> {
    tail.filter(|value| !value.trim().is_empty())
}

fn parse_deadline(tail: Option<&str>) -> Result<Command, TrackerError> {
    let tail = non_blank(tail).ok_or(TrackerError::NoName)?;
    let (name, due) = tail
        .split_once(BY_MARKER)
        .ok_or(TrackerError::InvalidDeadlineFormat)?;
    let name = parse_name(name)?;
    let due_at = parse_datetime(due.trim()).ok_or(TrackerError::InvalidDeadlineFormat)?;
    Ok(Command::Add(Task::deadline(name, due_at)?))
}

fn parse_event(tail: Option<&str>) -> Result<Command, TrackerError> {
    let tail = non_blank(tail).ok_or(TrackerError::NoName)?;
    let (name, window) = tail
        .split_once(FROM_MARKER)
        .ok_or(TrackerError::EventNoTimeStart)?;
    let (start, end) = window
        .split_once(TO_MARKER)
        .ok_or(TrackerError::EventNoTimeEnd)?;
    let name = parse_name(name)?;
    let start_at = parse_datetime(start.trim()).ok_or(TrackerError::EventNoTimeStart)?;
    let end_at = parse_datetime(end.trim()).ok_or(TrackerError::EventNoTimeEnd)?;
    Ok(Command::Add(Task::event(name, start_at, end_at)?))
}

fn parse_upcoming_date(raw: &str) -> Result<Command, TrackerError> {
    let on = parse_datetime(raw.trim()).ok_or(TrackerError::NoUpcomingOnDate)?;
    Ok(Command::Upcoming { on })
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use crate::error::TrackerError;

    #[test]
    fn keyword_is_case_sensitive() {
        assert_eq!(
            parse_command("LIST").unwrap(),
            Command::Unsupported {
                keyword: "LIST".to_string()
            }
        );
    }

    #[test]
    fn missing_and_blank_tails_are_distinguished_for_find() {
        assert_eq!(parse_command("find").unwrap_err(), TrackerError::SearchFailed);
        assert_eq!(parse_command("find   ").unwrap_err(), TrackerError::NoName);
    }

    #[test]
    fn index_errors() {
        assert_eq!(parse_command("mark").unwrap_err(), TrackerError::NoIndex);
        assert_eq!(parse_command("mark  ").unwrap_err(), TrackerError::NoIndex);
        assert_eq!(parse_command("delete two").unwrap_err(), TrackerError::TaskNotFound);
        assert_eq!(parse_command("unmark -1").unwrap_err(), TrackerError::TaskNotFound);
        assert_eq!(parse_command("mark 3").unwrap(), Command::Mark { index: 3 });
    }

    #[test]
    fn blank_tail_for_dated_commands_is_no_name() {
        assert_eq!(parse_command("deadline").unwrap_err(), TrackerError::NoName);
        assert_eq!(parse_command("deadline   ").unwrap_err(), TrackerError::NoName);
        assert_eq!(parse_command("event").unwrap_err(), TrackerError::NoName);
    }

    #[test]
    fn exit_aliases() {
        assert_eq!(parse_command("bye").unwrap(), Command::Exit);
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn trailing_newline_is_ignored() {
        assert_eq!(parse_command("list\r\n").unwrap(), Command::List);
    }
}
