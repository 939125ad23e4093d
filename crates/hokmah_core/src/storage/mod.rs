//! Flat-file persistence for the task list.
//!
//! # Responsibility
//! - Encode/decode one task per pipe-delimited line.
//! - Load the save file tolerantly and rewrite it in full after mutations.
//!
//! # Invariants
//! - A malformed record never aborts a load; it is dropped and counted.
//! - Saves never append; every save replaces the whole file.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod file;
pub mod record;

pub use file::{load_tasks, save_tasks, LoadedTasks};
pub use record::{decode_record, encode_record, RecordError, FIELD_DELIMITER};

pub type StorageResult<T> = Result<T, StorageError>;

/// File-system failure while reading or writing the save file.
#[derive(Debug)]
pub enum StorageError {
    CreateDir { path: PathBuf, source: io::Error },
    Open { path: PathBuf, source: io::Error },
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl StorageError {
    /// Stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CreateDir { .. } => "save_dir_create_failed",
            Self::Open { .. } => "save_file_open_failed",
            Self::Read { .. } => "save_file_read_failed",
            Self::Write { .. } => "save_file_write_failed",
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(f, "failed to create directory `{}`: {source}", path.display())
            }
            Self::Open { path, source } => {
                write!(f, "failed to open save file `{}`: {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read save file `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write save file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. }
            | Self::Open { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. } => Some(source),
        }
    }
}
