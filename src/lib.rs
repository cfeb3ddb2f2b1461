//! CEI Sync Core - incremental trade-history synchronization.
//!
//! This crate contains the domain logic for syncing a user's negotiations
//! from the CEI provider: planning the incremental fetch window, normalizing
//! raw entries into records with a deterministic identity, merging
//! duplicates, and sequencing one sync run. It is storage- and UI-agnostic:
//! the data source, store, portfolio refresh, settings, and notifier are
//! traits implemented by the host application.

pub mod constants;
pub mod errors;
pub mod events;
pub mod negotiations;
pub mod portfolio;
pub mod settings;
pub mod sync;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
