//! Task tracker service: the single entry point for raw command lines.
//!
//! # Responsibility
//! - Own the task list and its save-file configuration.
//! - Route each line through the command grammar and execute it.
//! - Rewrite the save file after every successful mutation.
//!
//! # Invariants
//! - A rejected command leaves the task list untouched.
//! - A failed save never rolls back the in-memory mutation; it is reported
//!   next to the outcome instead.
//! - The tracker never terminates the process; `Farewell` is only a reply.

use crate::command::help::{help_catalog, CommandHelp};
use crate::command::{parse_command, Command};
use crate::config::TrackerConfig;
use crate::error::{ErrorBody, TrackerError};
use crate::model::task::Task;
use crate::model::task_list::{IndexedTask, TaskList};
use crate::storage::{load_tasks, save_tasks, StorageError, StorageResult};
use chrono::NaiveDateTime;
use log::{debug, error, info};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Success payload for one processed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    Listed {
        tasks: Vec<IndexedTask>,
    },
    Found {
        keyword: String,
        tasks: Vec<IndexedTask>,
    },
    Marked {
        task: Task,
    },
    Unmarked {
        task: Task,
    },
    Deleted {
        task: Task,
        remaining: usize,
    },
    Added {
        task: Task,
        total: usize,
    },
    Upcoming {
        on: NaiveDateTime,
        tasks: Vec<IndexedTask>,
    },
    Help {
        commands: Vec<CommandHelp>,
    },
    Farewell,
    Unsupported {
        keyword: String,
    },
}

impl Reply {
    /// Whether this reply ends the session.
    pub fn is_farewell(&self) -> bool {
        matches!(self, Self::Farewell)
    }
}

/// Structured result of one processed line.
///
/// Serializes as `{"ok": <reply>}` or `{"error": {"code", "message"}}`, plus a
/// `save_error` object when the post-mutation save failed.
#[derive(Debug)]
pub struct Outcome {
    pub result: Result<Reply, TrackerError>,
    /// Set when a mutation succeeded but rewriting the save file failed.
    pub save_error: Option<StorageError>,
}

impl Outcome {
    /// Whether the command was `bye`/`exit`.
    pub fn is_farewell(&self) -> bool {
        matches!(&self.result, Ok(reply) if reply.is_farewell())
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match &self.result {
            Ok(reply) => map.serialize_entry("ok", reply)?,
            Err(err) => map.serialize_entry("error", &ErrorBody::from(*err))?,
        }
        if let Some(err) = &self.save_error {
            map.serialize_entry(
                "save_error",
                &ErrorBody {
                    code: err.code(),
                    message: err.to_string(),
                },
            )?;
        }
        map.end()
    }
}

/// Command executor over an owned task list.
pub struct Tracker {
    tasks: TaskList,
    config: TrackerConfig,
}

impl Tracker {
    /// Creates a tracker over an existing list without touching disk.
    pub fn new(tasks: TaskList, config: TrackerConfig) -> Self {
        Self { tasks, config }
    }

    /// Loads the configured save file and builds a tracker over it.
    ///
    /// When the save file cannot be opened or created the tracker still
    /// starts, with an empty list, and `NoSaveFile` is returned alongside it.
    pub fn open(config: TrackerConfig) -> (Self, Option<TrackerError>) {
        match load_tasks(config.data_file()) {
            Ok(loaded) => {
                info!(
                    "event=tracker_open module=service status=ok tasks={} skipped={}",
                    loaded.tasks.len(),
                    loaded.skipped_lines
                );
                (Self::new(loaded.tasks, config), None)
            }
            Err(err) => {
                error!(
                    "event=tracker_open module=service status=error error_code={} cause={}",
                    TrackerError::NoSaveFile.code(),
                    err.code()
                );
                (
                    Self::new(TaskList::new(), config),
                    Some(TrackerError::NoSaveFile),
                )
            }
        }
    }

    /// Current task list, in display order.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Configuration the tracker was opened with.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Parses and executes one raw input line.
    pub fn process(&mut self, line: &str) -> Outcome {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                debug!(
                    "event=command module=service status=rejected stage=parse error_code={}",
                    err.code()
                );
                return Outcome {
                    result: Err(err),
                    save_error: None,
                };
            }
        };

        let label = command.label();
        let mutates = command.mutates();
        let result = self.execute(command);

        let save_error = match (&result, mutates) {
            (Ok(_), true) => self.persist().err(),
            _ => None,
        };

        match &result {
            Ok(_) => debug!(
                "event=command module=service status=ok command={} tasks={} saved={}",
                label,
                self.tasks.len(),
                mutates && save_error.is_none()
            ),
            Err(err) => debug!(
                "event=command module=service status=rejected stage=execute command={} error_code={}",
                label,
                err.code()
            ),
        }

        Outcome { result, save_error }
    }

    fn execute(&mut self, command: Command) -> Result<Reply, TrackerError> {
        match command {
            Command::List => Ok(Reply::Listed {
                tasks: self.tasks.indexed(),
            }),
            Command::Find { keyword } => {
                let tasks = self.tasks.find(&keyword);
                Ok(Reply::Found { keyword, tasks })
            }
            Command::Mark { index } => {
                let task = self.tasks.get_mut(index)?;
                task.mark_done();
                Ok(Reply::Marked { task: task.clone() })
            }
            Command::Unmark { index } => {
                let task = self.tasks.get_mut(index)?;
                task.unmark_done();
                Ok(Reply::Unmarked { task: task.clone() })
            }
            Command::Delete { index } => {
                let task = self.tasks.remove(index)?;
                Ok(Reply::Deleted {
                    task,
                    remaining: self.tasks.len(),
                })
            }
            Command::Add(task) => {
                self.tasks.append(task.clone());
                Ok(Reply::Added {
                    task,
                    total: self.tasks.len(),
                })
            }
            Command::Upcoming { on } => Ok(Reply::Upcoming {
                on,
                tasks: self.tasks.ending_at(on),
            }),
            Command::Help => Ok(Reply::Help {
                commands: help_catalog(),
            }),
            Command::Exit => Ok(Reply::Farewell),
            Command::Unsupported { keyword } => Ok(Reply::Unsupported { keyword }),
        }
    }

    fn persist(&self) -> StorageResult<()> {
        save_tasks(&self.tasks, self.config.data_file())
    }
}
