//! Annual planning documents keyed by year.
//!
//! Each year is stored as one JSON payload row; the document shape is owned
//! by `model::annual` and never interpreted in SQL.

use super::{RepoError, RepoResult};
use crate::model::annual::{AnnualData, SystemData};
use rusqlite::{params, Connection, OptionalExtension};

const ENTITY: &str = "annual data";

/// Repository interface for yearly planning documents.
pub trait AnnualRepository {
    fn list_annual_data(&self) -> RepoResult<SystemData>;
    fn get_annual_data(&self, year: &str) -> RepoResult<Option<AnnualData>>;
    /// Inserts or fully replaces the document for `data.year`.
    fn save_annual_data(&self, data: &AnnualData) -> RepoResult<()>;
    fn delete_annual_data(&self, year: &str) -> RepoResult<()>;
}

/// SQLite-backed annual data repository.
pub struct SqliteAnnualRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAnnualRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AnnualRepository for SqliteAnnualRepository<'_> {
    fn list_annual_data(&self) -> RepoResult<SystemData> {
        let mut stmt = self
            .conn
            .prepare("SELECT year, payload FROM annual_data ORDER BY year ASC;")?;
        let mut rows = stmt.query([])?;
        let mut all = SystemData::new();

        while let Some(row) = rows.next()? {
            let year: String = row.get(0)?;
            let payload: String = row.get(1)?;
            let data = decode_payload(&year, &payload)?;
            all.insert(year, data);
        }

        Ok(all)
    }

    fn get_annual_data(&self, year: &str) -> RepoResult<Option<AnnualData>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM annual_data WHERE year = ?1;",
                [year],
                |row| row.get(0),
            )
            .optional()?;

        payload
            .map(|payload| decode_payload(year, &payload))
            .transpose()
    }

    fn save_annual_data(&self, data: &AnnualData) -> RepoResult<()> {
        validate_year(&data.year)?;
        let payload = serde_json::to_string(data).map_err(RepoError::Encode)?;

        self.conn.execute(
            "INSERT INTO annual_data (year, payload) VALUES (?1, ?2)
             ON CONFLICT(year) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![data.year.as_str(), payload],
        )?;

        Ok(())
    }

    fn delete_annual_data(&self, year: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM annual_data WHERE year = ?1;", [year])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: ENTITY,
                id: year.to_string(),
            });
        }

        Ok(())
    }
}

fn validate_year(year: &str) -> RepoResult<()> {
    if year.trim().is_empty() {
        return Err(RepoError::InvalidData(
            "annual data year cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn decode_payload(year: &str, payload: &str) -> RepoResult<AnnualData> {
    let data: AnnualData = serde_json::from_str(payload).map_err(|err| {
        RepoError::InvalidData(format!("annual_data.payload for `{year}`: {err}"))
    })?;
    if data.year != year {
        return Err(RepoError::InvalidData(format!(
            "annual_data row `{year}` holds document for `{}`",
            data.year
        )));
    }
    Ok(data)
}
