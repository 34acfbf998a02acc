//! SQLite-backed knowledge-base loader.
//!
//! Uses `rusqlite` against an `ingredients` table. Rows are read in id
//! order so the resulting snapshot iterates deterministically. Rows
//! with an unrecognized category string are a loader error, never a
//! pipeline concern.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{Connection, params};
use tokio::sync::Mutex;
use tracing::{debug, info};

use nutriscan_core::{Category, IngredientRecord, ScanError};

use crate::loader::KbLoader;
use crate::snapshot::KnowledgeBase;

pub struct SqliteKbLoader {
    conn: Mutex<Connection>,
}

impl SqliteKbLoader {
    /// Create or open a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let conn = Connection::open(path.as_ref())
            .context("Failed to open SQLite ingredient database")?;
        init_schema(&conn)?;
        info!("SqliteKbLoader opened at {:?}", path.as_ref());
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Open an in-memory database (for tests).
    pub fn in_memory() -> Result<Self, ScanError> {
        let conn = Connection::open_in_memory()
            .context("Failed to open in-memory ingredient database")?;
        init_schema(&conn)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Insert records, skipping names that already exist.
    pub async fn seed(&self, records: &[IngredientRecord]) -> Result<(), ScanError> {
        let conn = self.conn.lock().await;
        for record in records {
            conn.execute(
                "INSERT OR IGNORE INTO ingredients (name, impact, category, description)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    record.name.to_lowercase(),
                    record.impact,
                    record.category.as_str(),
                    record.description,
                ],
            )
            .context("Failed to seed ingredient row")?;
        }
        debug!("seeded {} ingredient rows", records.len());
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> Result<(), ScanError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS ingredients (
             id          INTEGER PRIMARY KEY AUTOINCREMENT,
             name        TEXT NOT NULL UNIQUE,
             impact      TEXT NOT NULL,
             category    TEXT NOT NULL,
             description TEXT
         );",
    )
    .context("Failed to initialize ingredients schema")?;
    Ok(())
}

#[async_trait]
impl KbLoader for SqliteKbLoader {
    async fn load(&self) -> Result<KnowledgeBase, ScanError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT name, impact, category, description FROM ingredients ORDER BY id")
            .context("Failed to query ingredients")?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                ))
            })
            .context("Failed to read ingredient rows")?;

        let mut records = Vec::new();
        for row in rows {
            let (name, impact, category, description) =
                row.context("Failed to decode ingredient row")?;
            let category = Category::from_str(&category).map_err(|_| {
                ScanError::MalformedRecord {
                    name: name.clone(),
                    reason: format!("unknown category '{category}'"),
                }
            })?;
            records.push(IngredientRecord { name, impact, category, description });
        }

        let kb = KnowledgeBase::from_records(records);
        info!("loaded {} ingredient records from SQLite", kb.len());
        Ok(kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::static_records;

    #[tokio::test]
    async fn sqlite_loader_roundtrip() {
        let loader = SqliteKbLoader::in_memory().expect("in-memory db");
        loader.seed(&static_records()).await.unwrap();

        let kb = loader.load().await.unwrap();
        assert_eq!(kb.len(), static_records().len());
        assert_eq!(kb.get("msg").unwrap().category, Category::Danger);
    }

    #[tokio::test]
    async fn malformed_category_is_a_loader_error() {
        let loader = SqliteKbLoader::in_memory().expect("in-memory db");
        {
            let conn = loader.conn.lock().await;
            conn.execute(
                "INSERT INTO ingredients (name, impact, category) VALUES ('sugar', 'x', 'harmless')",
                [],
            )
            .unwrap();
        }

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, ScanError::MalformedRecord { .. }));
    }
}
