use super::{DatasetKind, DatasetStore, PersistenceResult};
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

/// Disk-backed dataset store: one keyed text blob per schema.
pub struct SqliteDatasetStore {
    connection: Mutex<Connection>,
}

impl SqliteDatasetStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS datasets (
                storage_key TEXT PRIMARY KEY,
                csv_text TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl DatasetStore for SqliteDatasetStore {
    fn save(&self, kind: DatasetKind, text: &str) -> PersistenceResult<()> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        conn.execute(
            "INSERT INTO datasets (storage_key, csv_text) VALUES (?1, ?2)
             ON CONFLICT(storage_key) DO UPDATE SET csv_text = excluded.csv_text",
            params![kind.storage_key(), text],
        )?;
        Ok(())
    }

    fn load(&self, kind: DatasetKind) -> PersistenceResult<Option<String>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare("SELECT csv_text FROM datasets WHERE storage_key = ?1")?;
        let text: Option<String> = stmt
            .query_row(params![kind.storage_key()], |row| row.get(0))
            .optional()?;
        Ok(text)
    }

    fn clear(&self, kind: DatasetKind) -> PersistenceResult<()> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        conn.execute(
            "DELETE FROM datasets WHERE storage_key = ?1",
            params![kind.storage_key()],
        )?;
        Ok(())
    }
}
