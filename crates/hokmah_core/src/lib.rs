//! Core engine for the Hokmah task tracker.
//! Parses command lines, owns the task list and keeps the save file in sync.

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use command::help::{help_catalog, CommandHelp};
pub use command::{parse_command, Command, EXIT_KEYWORDS};
pub use config::{default_log_dir, TrackerConfig};
pub use error::{ErrorBody, TrackerError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::datetime::{
    format_display, format_machine, parse_datetime, DATE_DISPLAY_FORMAT, DATE_INPUT_FORMAT,
    DATE_INPUT_HINT,
};
pub use model::task::{Task, TaskDetail, TaskKind, TaskValidationError};
pub use model::task_list::{IndexedTask, TaskList};
pub use service::tracker::{Outcome, Reply, Tracker};
pub use storage::{
    decode_record, encode_record, load_tasks, save_tasks, LoadedTasks, RecordError, StorageError,
    StorageResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
