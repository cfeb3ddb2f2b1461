//! Sync job bookkeeping models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted bookkeeping for the trade-history sync job.
///
/// Read at run start, written at run end. A missing record (or a record
/// without `last_run`) marks a first-ever run, which triggers a
/// full-history fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRunMetadata {
    /// When the job last completed successfully.
    pub last_run: Option<DateTime<Utc>>,
}

impl SyncRunMetadata {
    /// Creates metadata recording a completed run at the given instant.
    pub fn new(last_run: DateTime<Utc>) -> Self {
        Self {
            last_run: Some(last_run),
        }
    }
}
