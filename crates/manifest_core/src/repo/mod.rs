//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for planning data.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `AlreadyExists`)
//!   in addition to DB transport errors.
//! - Read paths reject undecodable persisted rows instead of masking them.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod annual_repo;
pub mod task_repo;

pub use annual_repo::{AnnualRepository, SqliteAnnualRepository};
pub use task_repo::{SqliteTaskRepository, TaskRepository};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { entity: &'static str, id: String },
    AlreadyExists { entity: &'static str, id: String },
    InvalidData(String),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::AlreadyExists { entity, id } => write!(f, "{entity} already exists: {id}"),
            Self::InvalidData(message) => write!(f, "invalid planning data: {message}"),
            Self::Encode(err) => write!(f, "failed to encode planning data: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::NotFound { .. } | Self::AlreadyExists { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Deletes every annual document and task in one transaction.
///
/// The account config file is not touched.
pub fn reset_all_data(conn: &rusqlite::Connection) -> RepoResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM annual_data;", [])?;
    tx.execute("DELETE FROM tasks;", [])?;
    tx.commit()?;
    Ok(())
}
