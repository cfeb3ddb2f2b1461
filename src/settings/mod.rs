//! Settings module - configuration read by the sync job.

mod settings_service;
mod settings_traits;

pub use settings_service::{SettingsService, SettingsServiceTrait};
pub use settings_traits::SettingsRepositoryTrait;
