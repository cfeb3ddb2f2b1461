use async_trait::async_trait;
use chrono::NaiveDate;

use super::{AccountNegotiations, AccountRawHistory, Negotiation};
use crate::sync::SyncRunMetadata;
use crate::Result;

/// Trait defining the contract for the external trade-history provider.
#[async_trait]
pub trait NegotiationSourceTrait: Send + Sync {
    /// Fetches raw trade history grouped by account.
    ///
    /// Passing `None` for both bounds requests the entire available
    /// history. Bounds are inclusive calendar days.
    async fn fetch_history(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<AccountRawHistory>>;
}

/// Trait defining the contract for the negotiation store and its job
/// bookkeeping.
#[async_trait]
pub trait NegotiationRepositoryTrait: Send + Sync {
    /// Returns the sync job's run metadata, or `None` before the first run.
    fn get_job_metadata(&self) -> Result<Option<SyncRunMetadata>>;

    /// Returns all stored negotiations across accounts.
    fn get_negotiations(&self) -> Result<Vec<Negotiation>>;

    /// Persists the merged per-account batches.
    async fn save_batches(&self, batches: Vec<AccountNegotiations>) -> Result<()>;

    /// Sets the job's last-run timestamp to now.
    async fn update_job_metadata(&self) -> Result<()>;
}
