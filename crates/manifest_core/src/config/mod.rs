//! Account config persistence.
//!
//! # Responsibility
//! - Read and write the single `config.json` document in the app data
//!   directory.
//! - Report each failing step as its own error variant.
//!
//! # Invariants
//! - A missing config file loads as an empty `Config`; first run is not an error.
//! - Every save rewrites the whole file. No locking, no atomic rename.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod store;

pub use store::ConfigStore;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    HomeDirUnresolved,
    CreateDir {
        path: PathBuf,
        source: io::Error,
    },
    Read {
        path: PathBuf,
        source: io::Error,
    },
    Write {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Serialize(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeDirUnresolved => write!(f, "failed to resolve user home directory"),
            Self::CreateDir { path, source } => write!(
                f,
                "failed to create config directory `{}`: {source}",
                path.display()
            ),
            Self::Read { path, source } => {
                write!(f, "failed to read config file `{}`: {source}", path.display())
            }
            Self::Write { path, source } => write!(
                f,
                "failed to write config file `{}`: {source}",
                path.display()
            ),
            Self::Parse { path, source } => write!(
                f,
                "failed to parse config file `{}`: {source}",
                path.display()
            ),
            Self::Serialize(err) => write!(f, "failed to serialize config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::HomeDirUnresolved => None,
            Self::CreateDir { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}
