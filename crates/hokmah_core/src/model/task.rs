//! Task domain model.
//!
//! # Responsibility
//! - Define the closed set of task variants (todo, deadline, event).
//! - Produce the canonical display line and the save-file record.
//!
//! # Invariants
//! - `name` is fixed at construction and never blank.
//! - Event `end_at` is strictly later than `start_at`.
//! - Capability calls (`mark_done`, `describe`, `to_record`) never fail.

use crate::model::datetime::format_display;
use crate::storage::record::encode_record;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Task variant discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// No associated time.
    #[serde(rename = "todo")]
    ToDo,
    /// Single due timestamp.
    Deadline,
    /// Start and end timestamps.
    Event,
}

impl TaskKind {
    /// One-letter tag used in descriptions and records.
    pub fn tag(self) -> &'static str {
        match self {
            Self::ToDo => "T",
            Self::Deadline => "D",
            Self::Event => "E",
        }
    }

    /// Resolves a record tag back to a kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "T" => Some(Self::ToDo),
            "D" => Some(Self::Deadline),
            "E" => Some(Self::Event),
            _ => None,
        }
    }
}

/// Variant-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskDetail {
    #[serde(rename = "todo")]
    ToDo,
    Deadline {
        due_at: NaiveDateTime,
    },
    Event {
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
    },
}

/// Construction-time validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Name is empty or whitespace only.
    EmptyName,
    /// Event end is not strictly after its start.
    InvalidEventWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name must not be blank"),
            Self::InvalidEventWindow { start, end } => {
                write!(f, "event end ({end}) must be after event start ({start})")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// One tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    name: String,
    done: bool,
    #[serde(flatten)]
    detail: TaskDetail,
}

impl Task {
    /// Creates an undated task.
    pub fn todo(name: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::build(name.into(), TaskDetail::ToDo)
    }

    /// Creates a task due at `due_at`.
    pub fn deadline(
        name: impl Into<String>,
        due_at: NaiveDateTime,
    ) -> Result<Self, TaskValidationError> {
        Self::build(name.into(), TaskDetail::Deadline { due_at })
    }

    /// Creates a task spanning `start_at..end_at`.
    ///
    /// # Errors
    /// - `InvalidEventWindow` when `end_at <= start_at`.
    pub fn event(
        name: impl Into<String>,
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
    ) -> Result<Self, TaskValidationError> {
        if end_at <= start_at {
            return Err(TaskValidationError::InvalidEventWindow {
                start: start_at,
                end: end_at,
            });
        }
        Self::build(name.into(), TaskDetail::Event { start_at, end_at })
    }

    fn build(name: String, detail: TaskDetail) -> Result<Self, TaskValidationError> {
        if name.trim().is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        Ok(Self {
            name,
            done: false,
            detail,
        })
    }

    /// Trimmed, non-empty task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the task is marked done.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Kind tag derived from the detail variant.
    pub fn kind(&self) -> TaskKind {
        match self.detail {
            TaskDetail::ToDo => TaskKind::ToDo,
            TaskDetail::Deadline { .. } => TaskKind::Deadline,
            TaskDetail::Event { .. } => TaskKind::Event,
        }
    }

    /// Kind-specific timestamps.
    pub fn detail(&self) -> &TaskDetail {
        &self.detail
    }

    /// Timestamp the task finishes at: deadline due time or event end.
    ///
    /// Undated tasks return `None`.
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        match self.detail {
            TaskDetail::ToDo => None,
            TaskDetail::Deadline { due_at } => Some(due_at),
            TaskDetail::Event { end_at, .. } => Some(end_at),
        }
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn unmark_done(&mut self) {
        self.done = false;
    }

    /// Canonical display line, e.g. `[D][X] file taxes (by: Apr 15 2024 23:59)`.
    pub fn describe(&self) -> String {
        let marker = if self.done { "X" } else { " " };
        let head = format!("[{}][{}] {}", self.kind().tag(), marker, self.name);
        match &self.detail {
            TaskDetail::ToDo => head,
            TaskDetail::Deadline { due_at } => {
                format!("{head} (by: {})", format_display(due_at))
            }
            TaskDetail::Event { start_at, end_at } => format!(
                "{head} (from: {} to: {})",
                format_display(start_at),
                format_display(end_at)
            ),
        }
    }

    /// Save-file record for this task.
    pub fn to_record(&self) -> String {
        encode_record(self)
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
