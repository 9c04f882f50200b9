//! SQLite-backed history store.
//!
//! One `HistoryStore` owns the single database connection for the
//! process lifetime. Every write runs in autocommit mode, so each
//! save/delete is durable before the call returns. Not designed for
//! concurrent multi-process access.

use crate::{BmiRecord, Error, Result};
use rusqlite::{params, Connection, ErrorCode};
use std::path::Path;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS bmi_data (
    user_name TEXT NOT NULL,
    weight    REAL NOT NULL,
    height    REAL NOT NULL,
    bmi       REAL NOT NULL,
    PRIMARY KEY (user_name, weight, height)
)";

/// Persistent per-user BMI history, keyed by (user_name, weight, height)
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Open a database file (creates it and its parent directory if needed)
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        tracing::debug!("Opened history store at {:?}", path);
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(SCHEMA, [])?;
        Ok(())
    }

    /// Insert a record; a natural-key collision fails with `DuplicateEntry`
    ///
    /// Duplicate triples are rejected, never overwritten. The insert is
    /// committed before this returns.
    pub fn save(&self, record: &BmiRecord) -> Result<()> {
        require_user(&record.user_name)?;

        let result = self.conn.execute(
            "INSERT INTO bmi_data (user_name, weight, height, bmi) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.user_name,
                record.weight_kg,
                record.height_m,
                record.bmi
            ],
        );

        match result {
            Ok(_) => {
                tracing::debug!("Saved entry for '{}'", record.user_name);
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Err(Error::DuplicateEntry {
                    user: record.user_name.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete every record for the user, returning how many were removed
    ///
    /// A user with no records is a no-op (count 0), not an error.
    /// Confirmation is the caller's concern.
    pub fn delete_all(&self, user_name: &str) -> Result<usize> {
        require_user(user_name)?;

        let count = self
            .conn
            .execute("DELETE FROM bmi_data WHERE user_name = ?1", [user_name])?;
        tracing::info!("Deleted {} entries for '{}'", count, user_name);
        Ok(count)
    }

    /// All records for the user in insertion order
    ///
    /// Returns an empty vec (not an error) when the user has none.
    pub fn list_all(&self, user_name: &str) -> Result<Vec<BmiRecord>> {
        require_user(user_name)?;

        let mut stmt = self.conn.prepare(
            "SELECT user_name, weight, height, bmi FROM bmi_data
             WHERE user_name = ?1 ORDER BY rowid",
        )?;

        let records = stmt
            .query_map([user_name], |row| {
                Ok(BmiRecord {
                    user_name: row.get(0)?,
                    weight_kg: row.get(1)?,
                    height_m: row.get(2)?,
                    bmi: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// (weight_kg, bmi) pairs for the user, same ordering as `list_all`
    pub fn for_visualization(&self, user_name: &str) -> Result<Vec<(f64, f64)>> {
        require_user(user_name)?;

        let mut stmt = self.conn.prepare(
            "SELECT weight, bmi FROM bmi_data WHERE user_name = ?1 ORDER BY rowid",
        )?;

        let points = stmt
            .query_map([user_name], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(points)
    }
}

/// Every store operation requires a non-empty user name
fn require_user(user_name: &str) -> Result<()> {
    if user_name.trim().is_empty() {
        return Err(Error::MissingUser);
    }
    Ok(())
}
