//! Save-file record codec.
//!
//! Layout per kind (no escaping of the delimiter inside names):
//! - `T|<0|1>|<name>`
//! - `D|<0|1>|<name>|<due>`
//! - `E|<0|1>|<name>|<start>|<end>`

use crate::model::datetime::{format_machine, parse_datetime};
use crate::model::task::{Task, TaskDetail, TaskKind, TaskValidationError};
use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const FIELD_DELIMITER: char = '|';

/// Why one record line could not be turned into a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// First field is not `T`, `D` or `E`.
    UnknownKind(String),
    /// Field count does not match the kind's layout.
    FieldCount {
        kind: TaskKind,
        expected: usize,
        found: usize,
    },
    /// A timestamp field does not match the strict pattern.
    InvalidDate { field: &'static str },
    /// Fields parsed but the task invariants reject them.
    Invalid(TaskValidationError),
}

impl RecordError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownKind(_) => "unknown_kind",
            Self::FieldCount { .. } => "field_count",
            Self::InvalidDate { .. } => "invalid_date",
            Self::Invalid(_) => "invalid_task",
        }
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKind(tag) => write!(f, "unknown task kind `{tag}`"),
            Self::FieldCount {
                kind,
                expected,
                found,
            } => write!(
                f,
                "`{}` record needs {expected} fields, found {found}",
                kind.tag()
            ),
            Self::InvalidDate { field } => write!(f, "invalid timestamp in `{field}` field"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for RecordError {
    fn from(value: TaskValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Encodes one task as a record line (without the trailing newline).
pub fn encode_record(task: &Task) -> String {
    let done = if task.is_done() { "1" } else { "0" };
    let mut fields = vec![
        task.kind().tag().to_string(),
        done.to_string(),
        task.name().to_string(),
    ];
    match task.detail() {
        TaskDetail::ToDo => {}
        TaskDetail::Deadline { due_at } => fields.push(format_machine(due_at)),
        TaskDetail::Event { start_at, end_at } => {
            fields.push(format_machine(start_at));
            fields.push(format_machine(end_at));
        }
    }
    let delimiter = FIELD_DELIMITER.to_string();
    fields.join(delimiter.as_str())
}

/// Decodes one record line.
///
/// The done flag is set only for a literal `1`; every other value reads as
/// not done.
pub fn decode_record(line: &str) -> Result<Task, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let kind =
        TaskKind::from_tag(fields[0]).ok_or_else(|| RecordError::UnknownKind(fields[0].into()))?;

    let expected = match kind {
        TaskKind::ToDo => 3,
        TaskKind::Deadline => 4,
        TaskKind::Event => 5,
    };
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            kind,
            expected,
            found: fields.len(),
        });
    }

    let name = fields[2];
    let mut task = match kind {
        TaskKind::ToDo => Task::todo(name)?,
        TaskKind::Deadline => Task::deadline(name, date_field(fields[3], "due")?)?,
        TaskKind::Event => Task::event(
            name,
            date_field(fields[3], "start")?,
            date_field(fields[4], "end")?,
        )?,
    };

    if fields[1] == "1" {
        task.mark_done();
    }
    Ok(task)
}

fn date_field(value: &str, field: &'static str) -> Result<NaiveDateTime, RecordError> {
    parse_datetime(value).ok_or(RecordError::InvalidDate { field })
}
