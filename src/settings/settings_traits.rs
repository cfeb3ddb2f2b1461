use async_trait::async_trait;

use crate::Result;

/// Trait defining the contract for settings repository operations.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Returns the value for a key, or `None` if the key was never set.
    fn get_setting(&self, key: &str) -> Result<Option<String>>;

    /// Sets the value for a key.
    async fn update_setting(&self, key: &str, value: &str) -> Result<()>;
}
