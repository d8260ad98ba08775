use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Mutex;

#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    Csv(csv::Error),
    InvalidData(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// The three independently-stored roster schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Rotations,
    Call,
    Vacation,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Rotations,
        DatasetKind::Call,
        DatasetKind::Vacation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Rotations => "rotations",
            DatasetKind::Call => "call",
            DatasetKind::Vacation => "vacation",
        }
    }

    /// Storage key for the schema's raw CSV blob.
    pub fn storage_key(&self) -> &'static str {
        match self {
            DatasetKind::Rotations => "ophtho_rotations_csv",
            DatasetKind::Call => "ophtho_call_csv",
            DatasetKind::Vacation => "ophtho_vacation_csv",
        }
    }

    pub fn from_str(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "rotations" | "rotation" => Some(DatasetKind::Rotations),
            "call" => Some(DatasetKind::Call),
            "vacation" | "leave" => Some(DatasetKind::Vacation),
            _ => None,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a loaded collection came from, so callers can tell "defaults because
/// nothing was uploaded" apart from "defaults because the upload was unusable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSource {
    Custom,
    Default,
}

impl DatasetSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSource::Custom => "custom",
            DatasetSource::Default => "default",
        }
    }
}

/// A parsed collection tagged with its source.
#[derive(Debug, Clone)]
pub struct LoadedDataset<T> {
    pub records: Vec<T>,
    pub source: DatasetSource,
}

/// Key-value store for raw CSV text, one blob per schema. A single writer is
/// assumed; last write wins.
pub trait DatasetStore {
    fn save(&self, kind: DatasetKind, text: &str) -> PersistenceResult<()>;
    fn load(&self, kind: DatasetKind) -> PersistenceResult<Option<String>>;
    fn clear(&self, kind: DatasetKind) -> PersistenceResult<()>;
}

/// In-memory store, used in tests and as the non-persistent server fallback.
#[derive(Default)]
pub struct MemoryDatasetStore {
    blobs: Mutex<HashMap<DatasetKind, String>>,
}

impl MemoryDatasetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatasetStore for MemoryDatasetStore {
    fn save(&self, kind: DatasetKind, text: &str) -> PersistenceResult<()> {
        let mut blobs = self.blobs.lock().expect("dataset mutex poisoned");
        blobs.insert(kind, text.to_string());
        Ok(())
    }

    fn load(&self, kind: DatasetKind) -> PersistenceResult<Option<String>> {
        let blobs = self.blobs.lock().expect("dataset mutex poisoned");
        Ok(blobs.get(&kind).cloned())
    }

    fn clear(&self, kind: DatasetKind) -> PersistenceResult<()> {
        let mut blobs = self.blobs.lock().expect("dataset mutex poisoned");
        blobs.remove(&kind);
        Ok(())
    }
}

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatasetStore;
