//! Sync module - window planning, run metadata, and the orchestrator.

mod sync_run_model;
mod sync_service;
mod window;


pub use sync_run_model::SyncRunMetadata;
pub use sync_service::{SyncOutcome, TradeHistorySyncService};
pub use window::{earliest_history_date, plan_fetch, FetchPlan};
