use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored (submission, rendered report) pair, kept for later offline
/// retraining of the report classifier. The scoring core never reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub stored_at: DateTime<Utc>,
    pub submission: serde_json::Value,
    pub report_text: String,
}

/// Archive failure. Requests are never failed over archive errors; the
/// handler logs and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction owned by the request handler, so the scoring core
/// stays free of persistence concerns and tests can swap implementations.
pub trait ScreeningArchive: Send + Sync {
    fn store(&self, record: ScreeningRecord) -> Result<(), ArchiveError>;
    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, ArchiveError>;
}

/// Process-local archive backing the default deployment and tests.
#[derive(Default)]
pub struct InMemoryArchive {
    records: Mutex<Vec<ScreeningRecord>>,
}

impl InMemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .map(|records| records.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScreeningArchive for InMemoryArchive {
    fn store(&self, record: ScreeningRecord) -> Result<(), ArchiveError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| ArchiveError::Unavailable("archive mutex poisoned".to_string()))?;
        records.push(record);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, ArchiveError> {
        let records = self
            .records
            .lock()
            .map_err(|_| ArchiveError::Unavailable("archive mutex poisoned".to_string()))?;
        let start = records.len().saturating_sub(limit);
        Ok(records[start..].to_vec())
    }
}
