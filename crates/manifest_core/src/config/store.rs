use super::{ConfigError, ConfigResult};
use crate::model::account::Config;
use crate::paths::AppPaths;
use log::{debug, error};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads and writes `config.json`.
///
/// Holds only the file location; every call goes back to disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(paths: &AppPaths) -> Self {
        Self::at(paths.config_file())
    }

    /// Uses an explicit config file location.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config, returning an empty one when the file is absent.
    ///
    /// # Errors
    /// - `ConfigError::Read` when the file exists but cannot be read.
    /// - `ConfigError::Parse` when the content is not a valid config document.
    pub fn load(&self) -> ConfigResult<Config> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("event=config_load module=config status=ok source=default");
                return Ok(Config::default());
            }
            Err(source) => {
                error!(
                    "event=config_load module=config status=error error_code=read_failed error={}",
                    source
                );
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let config: Config = serde_json::from_slice(&raw).map_err(|source| {
            error!(
                "event=config_load module=config status=error error_code=parse_failed error={}",
                source
            );
            ConfigError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(
            "event=config_load module=config status=ok source=file accounts={}",
            config.accounts.len()
        );
        Ok(config)
    }

    /// Serializes `config` as indented JSON and overwrites the file,
    /// creating parent directories first.
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = serde_json::to_vec_pretty(config).map_err(ConfigError::Serialize)?;
        fs::write(&self.path, data).map_err(|source| {
            error!(
                "event=config_save module=config status=error error_code=write_failed error={}",
                source
            );
            ConfigError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(
            "event=config_save module=config status=ok accounts={}",
            config.accounts.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigStore;
    use crate::config::ConfigError;
    use crate::model::account::{Account, Config};

    #[test]
    fn load_without_file_returns_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));

        let config = store.load().unwrap();
        assert!(config.accounts.is_empty());
        assert!(config.last_used_id.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_creates_parent_dirs_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("nested").join("config.json"));
        let config = Config {
            last_used_id: "id-2".to_string(),
            accounts: vec![
                Account {
                    id: "id-1".to_string(),
                    username: "alice".to_string(),
                    avatar_path: "avatars/a.png".to_string(),
                },
                Account {
                    id: "id-2".to_string(),
                    username: "bob".to_string(),
                    avatar_path: "/abs/b.jpg".to_string(),
                },
            ],
        };

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn save_writes_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));
        store.save(&Config::default()).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\n  \"lastUsedID\": \"\""));
        assert!(text.contains("\"accounts\": []"));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));
        std::fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn directory_in_place_of_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::create_dir(&path).unwrap();

        let err = ConfigStore::at(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn file_in_place_of_parent_dir_reports_create_dir_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let store = ConfigStore::at(blocker.join("config.json"));
        let err = store.save(&Config::default()).unwrap_err();
        assert!(matches!(err, ConfigError::CreateDir { .. }));
    }
}
