//! Tracker configuration.
//!
//! The save-file path is the only setting the core accepts. The default
//! lives under the platform data directory for `hokmah`.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const APPLICATION: &str = "hokmah";
const DATA_FILE_NAME: &str = "tasks.txt";
const FALLBACK_DATA_DIR: &str = "data";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    data_file: PathBuf,
}

impl TrackerConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for TrackerConfig {
    /// Resolves `<data dir>/hokmah/tasks.txt`, or `data/tasks.txt` relative
    /// to the working directory when no home directory is known.
    fn default() -> Self {
        let data_file = project_dirs()
            .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
            .unwrap_or_else(|| Path::new(FALLBACK_DATA_DIR).join(DATA_FILE_NAME));
        Self::new(data_file)
    }
}

/// Default absolute directory for rolling log files, if one can be resolved.
pub fn default_log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_DIR_NAME))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APPLICATION)
}

#[cfg(test)]
mod tests {
    use super::TrackerConfig;

    #[test]
    fn default_data_file_is_named_tasks_txt() {
        let config = TrackerConfig::default();
        assert_eq!(
            config.data_file().file_name().and_then(|name| name.to_str()),
            Some("tasks.txt")
        );
    }

    #[test]
    fn explicit_path_is_kept_verbatim() {
        let config = TrackerConfig::new("/tmp/custom/list.txt");
        assert_eq!(config.data_file().to_str(), Some("/tmp/custom/list.txt"));
    }
}
