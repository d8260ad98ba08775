pub mod dates;
pub mod defaults;
pub mod derive;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod import;
pub mod persistence;
pub mod roster;
pub mod rotation;
pub mod store;

pub use dates::{DateInterval, parse_date, parse_range, parse_single_date};
pub use derive::DerivationEngine;
#[cfg(feature = "sqlite")]
pub use persistence::SqliteDatasetStore;
pub use persistence::{
    DatasetKind, DatasetSource, DatasetStore, LoadedDataset, MemoryDatasetStore, PersistenceError,
    PersistenceResult,
};
pub use roster::{
    CallAssignment, LeaveCategory, LeaveRequest, LeaveStatus, RotationAssignment, UNASSIGNED,
};
pub use rotation::{Location, canonicalize, classify_location};
pub use store::{DailyStats, DatasetSources, LeaveStats, ScheduleStore};
