//! Avatar image import into the app data directory.
//!
//! # Responsibility
//! - Copy a user-chosen image under a generated name into `avatars/`.
//! - Hand back a path relative to the app data directory.
//!
//! # Invariants
//! - File bytes are copied verbatim; the source extension is preserved.
//! - Imported files are never cleaned up, even when unreferenced.

use crate::paths::{AppPaths, AVATARS_DIR_NAME};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub type AvatarResult<T> = Result<T, AvatarError>;

#[derive(Debug)]
pub enum AvatarError {
    CreateDir { path: PathBuf, source: io::Error },
    ReadSource { path: PathBuf, source: io::Error },
    WriteTarget { path: PathBuf, source: io::Error },
}

impl Display for AvatarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir { path, source } => write!(
                f,
                "failed to create avatars directory `{}`: {source}",
                path.display()
            ),
            Self::ReadSource { path, source } => write!(
                f,
                "failed to read avatar source `{}`: {source}",
                path.display()
            ),
            Self::WriteTarget { path, source } => write!(
                f,
                "failed to write avatar file `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for AvatarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. }
            | Self::ReadSource { source, .. }
            | Self::WriteTarget { source, .. } => Some(source),
        }
    }
}

/// Imports avatar images into `<data_dir>/avatars`.
#[derive(Debug, Clone)]
pub struct AvatarStore {
    paths: AppPaths,
}

impl AvatarStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    /// Copies `source` into the avatars directory under a unique name.
    ///
    /// Returns the new file's path relative to the app data directory,
    /// e.g. `avatars/3f0c...e1.png`.
    pub fn import_avatar(&self, source: impl AsRef<Path>) -> AvatarResult<String> {
        let source = source.as_ref();
        let avatars_dir = self.paths.avatars_dir();
        fs::create_dir_all(&avatars_dir).map_err(|err| AvatarError::CreateDir {
            path: avatars_dir.clone(),
            source: err,
        })?;

        let file_name = unique_file_name(source);
        let target = avatars_dir.join(&file_name);

        let bytes = fs::read(source).map_err(|err| {
            error!(
                "event=avatar_import module=avatar status=error error_code=read_failed error={}",
                err
            );
            AvatarError::ReadSource {
                path: source.to_path_buf(),
                source: err,
            }
        })?;
        fs::write(&target, &bytes).map_err(|err| {
            error!(
                "event=avatar_import module=avatar status=error error_code=write_failed error={}",
                err
            );
            AvatarError::WriteTarget {
                path: target.clone(),
                source: err,
            }
        })?;

        info!(
            "event=avatar_import module=avatar status=ok file={} bytes={}",
            file_name,
            bytes.len()
        );
        Ok(Path::new(AVATARS_DIR_NAME)
            .join(file_name)
            .to_string_lossy()
            .into_owned())
    }

    /// Returns `path` unchanged when absolute, otherwise anchored at the app
    /// data directory. Pure path computation.
    pub fn resolve_absolute_path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.paths.resolve_absolute(path)
    }
}

fn unique_file_name(source: &Path) -> String {
    let stem = Uuid::new_v4().to_string();
    match source.extension() {
        Some(ext) => format!("{stem}.{}", ext.to_string_lossy()),
        None => stem,
    }
}
