//! Save-file load and rewrite.
//!
//! # Responsibility
//! - Create the save file (and parent directories) on first use.
//! - Decode records line by line, dropping malformed ones.
//! - Rewrite the whole file through a staging file and rename.
//!
//! # Invariants
//! - A line that is not valid UTF-8 is skipped whole; bytes are never
//!   replaced, so a kept task name is exactly what was saved.
//! - Log events carry counts and line numbers only, never task names.

use super::record::decode_record;
use super::{StorageError, StorageResult};
use crate::model::task_list::TaskList;
use log::{error, info, warn};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

const STAGING_SUFFIX: &str = ".tmp";
const INVALID_UTF8_REASON: &str = "invalid_utf8";

/// Result of a tolerant load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedTasks {
    pub tasks: TaskList,
    /// Non-blank lines that could not be decoded.
    pub skipped_lines: usize,
}

/// Loads the task list stored at `path`, creating an empty file if absent.
///
/// # Errors
/// - Returns `StorageError` only when the path cannot be created, opened or
///   read at all. Bad records are skipped, not reported as errors.
pub fn load_tasks(path: impl AsRef<Path>) -> StorageResult<LoadedTasks> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=save_file_load module=storage status=start");

    let bytes = match read_or_create(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(
                "event=save_file_load module=storage status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            return Err(err);
        }
    };

    let mut loaded = LoadedTasks::default();
    for (line_index, raw) in bytes.split(|byte| *byte == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let decoded = match std::str::from_utf8(raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => decode_record(line).map_err(|err| err.code()),
            Err(_) => Err(INVALID_UTF8_REASON),
        };
        match decoded {
            Ok(task) => loaded.tasks.append(task),
            Err(reason) => {
                loaded.skipped_lines += 1;
                warn!(
                    "event=record_skipped module=storage status=skipped line={} reason={}",
                    line_index + 1,
                    reason
                );
            }
        }
    }

    info!(
        "event=save_file_load module=storage status=ok tasks={} skipped={} duration_ms={}",
        loaded.tasks.len(),
        loaded.skipped_lines,
        started_at.elapsed().as_millis()
    );
    Ok(loaded)
}

/// Rewrites the save file at `path` with every task in list order.
///
/// # Side effects
/// - Creates missing parent directories.
/// - Writes `<file>.tmp` next to the target, then renames it into place.
pub fn save_tasks(tasks: &TaskList, path: impl AsRef<Path>) -> StorageResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = write_all(tasks, path);
    match &result {
        Ok(()) => info!(
            "event=save_file_write module=storage status=ok tasks={} duration_ms={}",
            tasks.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=save_file_write module=storage status=error duration_ms={} error_code={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }
    result
}

fn write_all(tasks: &TaskList, path: &Path) -> StorageResult<()> {
    ensure_parent_dir(path)?;

    let mut content = String::new();
    for task in tasks {
        content.push_str(&task.to_record());
        content.push('\n');
    }

    let staging = staging_path(path);
    fs::write(&staging, content).map_err(|source| StorageError::Write {
        path: staging.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(StorageError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn read_or_create(path: &Path) -> StorageResult<Vec<u8>> {
    ensure_parent_dir(path)?;

    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)
                .map_err(|source| StorageError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("event=save_file_create module=storage status=ok");
            Ok(Vec::new())
        }
        Err(source) => Err(StorageError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn ensure_parent_dir(path: &Path) -> StorageResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from("tasks"));
    file_name.push(STAGING_SUFFIX);
    path.with_file_name(file_name)
}
