use std::sync::Arc;

use super::SettingsRepositoryTrait;
use crate::Result;

/// Settings key gating the trade-history sync job.
const TRADE_HISTORY_SYNC_ENABLED_KEY: &str = "trade_history_sync_enabled";

/// Trait for settings consumed by the sync job.
pub trait SettingsServiceTrait: Send + Sync {
    fn is_trade_history_sync_enabled(&self) -> Result<bool>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

impl SettingsServiceTrait for SettingsService {
    fn is_trade_history_sync_enabled(&self) -> Result<bool> {
        match self
            .settings_repository
            .get_setting(TRADE_HISTORY_SYNC_ENABLED_KEY)?
        {
            Some(value) => Ok(value.parse().unwrap_or(false)),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockSettingsRepository {
        values: Mutex<HashMap<String, String>>,
    }

    impl MockSettingsRepository {
        fn with(key: &str, value: &str) -> Self {
            let mut values = HashMap::new();
            values.insert(key.to_string(), value.to_string());
            Self {
                values: Mutex::new(values),
            }
        }

        fn empty() -> Self {
            Self {
                values: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl SettingsRepositoryTrait for MockSettingsRepository {
        fn get_setting(&self, key: &str) -> Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn update_setting(&self, key: &str, value: &str) -> Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_enabled_when_set_true() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::with(
            "trade_history_sync_enabled",
            "true",
        )));
        assert!(service.is_trade_history_sync_enabled().unwrap());
    }

    #[test]
    fn test_disabled_when_unset() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::empty()));
        assert!(!service.is_trade_history_sync_enabled().unwrap());
    }

    #[test]
    fn test_disabled_when_unparsable() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::with(
            "trade_history_sync_enabled",
            "yes please",
        )));
        assert!(!service.is_trade_history_sync_enabled().unwrap());
    }
}
