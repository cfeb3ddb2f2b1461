use async_trait::async_trait;

use crate::Result;

/// Trait defining the contract for recomputing the derived portfolio view.
///
/// The sync job invokes this once after new negotiations are persisted so
/// aggregate positions reflect the updated trade ledger.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Rebuilds portfolio positions from the stored trade history.
    async fn refresh_from_history(&self) -> Result<()>;
}
