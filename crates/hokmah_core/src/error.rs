//! User-facing error taxonomy.
//!
//! # Responsibility
//! - Enumerate every way a command or startup load can be refused.
//! - Attach one fixed message and one stable code to each kind.
//!
//! # Invariants
//! - Messages carry no dynamic input; the only embedded value is the date hint.
//! - Codes are snake_case and never change once published.

use crate::model::datetime::DATE_INPUT_HINT;
use crate::model::task::TaskValidationError;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error kind reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerError {
    /// Save file could not be opened or created at startup.
    NoSaveFile,
    /// Task name or search keyword is blank.
    NoName,
    /// Index argument is missing.
    NoIndex,
    /// `/by` marker missing or due date unparseable.
    InvalidDeadlineFormat,
    /// `/from` marker missing or start date unparseable.
    EventNoTimeStart,
    /// `/to` marker missing or end date unparseable.
    EventNoTimeEnd,
    /// Event end is not after its start.
    EventEndBeforeStart,
    /// Index is not a number or is out of range.
    TaskNotFound,
    /// `upcoming` date missing or unparseable.
    NoUpcomingOnDate,
    /// `find` issued without any search term.
    SearchFailed,
}

impl TrackerError {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Self::NoSaveFile => "no_save_file",
            Self::NoName => "no_name",
            Self::NoIndex => "no_index",
            Self::InvalidDeadlineFormat => "invalid_deadline_format",
            Self::EventNoTimeStart => "event_no_time_start",
            Self::EventNoTimeEnd => "event_no_time_end",
            Self::EventEndBeforeStart => "event_end_before_start",
            Self::TaskNotFound => "task_not_found",
            Self::NoUpcomingOnDate => "no_upcoming_on_date",
            Self::SearchFailed => "search_failed",
        }
    }
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSaveFile => write!(
                f,
                "I couldn't open or create your save file, so we're starting with an empty list."
            ),
            Self::NoName => write!(
                f,
                "Just what are you going to do? Can you at least tell me the name?"
            ),
            Self::NoIndex => write!(
                f,
                "Which task? Give me its number from the list, like: mark 2"
            ),
            Self::InvalidDeadlineFormat => write!(
                f,
                "Ok so? When is the deadline by? Try again by adding /by {DATE_INPUT_HINT}"
            ),
            Self::EventNoTimeStart => write!(
                f,
                "When does your event start? Try again by adding /from {DATE_INPUT_HINT} /to {DATE_INPUT_HINT}"
            ),
            Self::EventNoTimeEnd => write!(
                f,
                "When does your event end? Try again by adding /to {DATE_INPUT_HINT}"
            ),
            Self::EventEndBeforeStart => write!(
                f,
                "Your event ends before it even starts. The /to time must be after the /from time."
            ),
            Self::TaskNotFound => write!(
                f,
                "The task you are trying to perform an action on cannot be found. Are you sure you put the right task number?"
            ),
            Self::NoUpcomingOnDate => write!(
                f,
                "I don't know which date you want to check. Try again by adding /on {DATE_INPUT_HINT}"
            ),
            Self::SearchFailed => write!(
                f,
                "Can you specify a search term? Something like this: find [keyword]"
            ),
        }
    }
}

impl Error for TrackerError {}

/// Wire form of an error: stable code plus rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl From<TrackerError> for ErrorBody {
    fn from(value: TrackerError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}

impl From<TaskValidationError> for TrackerError {
    fn from(value: TaskValidationError) -> Self {
        match value {
            TaskValidationError::EmptyName => Self::NoName,
            TaskValidationError::InvalidEventWindow { .. } => Self::EventEndBeforeStart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrackerError;

    #[test]
    fn date_hint_is_embedded_in_date_messages() {
        for kind in [
            TrackerError::InvalidDeadlineFormat,
            TrackerError::EventNoTimeStart,
            TrackerError::EventNoTimeEnd,
            TrackerError::NoUpcomingOnDate,
        ] {
            assert!(
                kind.to_string().contains("yyyy-MM-dd HHmm"),
                "missing hint for {}",
                kind.code()
            );
        }
    }

    #[test]
    fn serialized_kind_matches_code() {
        let json = serde_json::to_value(TrackerError::EventEndBeforeStart).unwrap();
        assert_eq!(json, TrackerError::EventEndBeforeStart.code());
    }
}
