//! App data directory layout.
//!
//! # Responsibility
//! - Resolve the per-user app data directory (`<home>/.manifest`).
//! - Compute fixed file locations inside it without touching the disk.
//!
//! # Invariants
//! - `AppPaths` performs no I/O; callers create directories on write.

use crate::config::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};

/// Directory name created under the user's home directory.
pub const APP_DIR_NAME: &str = ".manifest";
/// Account config file name inside the app data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Avatar storage subdirectory inside the app data directory.
pub const AVATARS_DIR_NAME: &str = "avatars";
/// Annual/task database file name inside the app data directory.
pub const DB_FILE_NAME: &str = "manifest.sqlite3";
/// Log subdirectory inside the app data directory.
pub const LOGS_DIR_NAME: &str = "logs";
/// Environment variable overriding the app data directory.
pub const DATA_DIR_ENV: &str = "MANIFEST_DATA_DIR";

/// Resolved locations of every file the backend owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    /// Uses `data_dir` as the app data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves `<home>/.manifest`.
    ///
    /// # Errors
    /// - `ConfigError::HomeDirUnresolved` when the platform reports no home.
    pub fn from_home() -> ConfigResult<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnresolved)?;
        Ok(Self::new(home.join(APP_DIR_NAME)))
    }

    /// Resolves from `MANIFEST_DATA_DIR` when set and non-blank, otherwise
    /// falls back to [`AppPaths::from_home`].
    pub fn from_env() -> ConfigResult<Self> {
        if let Ok(raw) = std::env::var(DATA_DIR_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Ok(Self::new(trimmed));
            }
        }
        Self::from_home()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn avatars_dir(&self) -> PathBuf {
        self.data_dir.join(AVATARS_DIR_NAME)
    }

    pub fn db_file(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join(LOGS_DIR_NAME)
    }

    /// Returns `path` unchanged when absolute, otherwise joins it onto the
    /// app data directory.
    pub fn resolve_absolute(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppPaths;
    use std::path::{Path, PathBuf};

    #[test]
    fn fixed_locations_live_under_data_dir() {
        let paths = AppPaths::new("/data/.manifest");
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/data/.manifest/config.json")
        );
        assert_eq!(paths.avatars_dir(), PathBuf::from("/data/.manifest/avatars"));
        assert_eq!(
            paths.db_file(),
            PathBuf::from("/data/.manifest/manifest.sqlite3")
        );
    }

    #[test]
    fn resolve_absolute_joins_relative_paths() {
        let paths = AppPaths::new("/data/.manifest");
        assert_eq!(
            paths.resolve_absolute("avatars/a.png"),
            PathBuf::from("/data/.manifest/avatars/a.png")
        );
    }

    #[cfg(unix)]
    #[test]
    fn resolve_absolute_keeps_absolute_paths() {
        let paths = AppPaths::new("/data/.manifest");
        assert_eq!(
            paths.resolve_absolute("/elsewhere/me.jpg"),
            Path::new("/elsewhere/me.jpg")
        );
    }

    #[test]
    fn from_home_ends_with_app_dir_name() {
        if let Ok(paths) = AppPaths::from_home() {
            assert!(paths.data_dir().ends_with(".manifest"));
        }
    }
}
