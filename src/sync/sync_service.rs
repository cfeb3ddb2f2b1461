//! The sync orchestrator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, error, info};

use crate::constants::{NOTIFICATION_ICON, NOTIFICATION_TITLE, RESULT_VIEW, SYNC_EVENT_TOPIC};
use crate::events::{SyncEvent, SyncEventSink};
use crate::negotiations::{
    merge_duplicates, AccountNegotiations, Negotiation, NegotiationRepositoryTrait,
    NegotiationSourceTrait,
};
use crate::portfolio::PortfolioServiceTrait;
use crate::settings::SettingsServiceTrait;
use crate::utils::time_utils::market_date_from_utc;
use crate::Result;

use super::window::{plan_fetch, FetchPlan};

/// Outcome of one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Another run was still in flight; nothing was done.
    Skipped,
    /// The job is disabled in configuration.
    Disabled,
    /// A run already completed today; nothing to fetch.
    AlreadyCurrent,
    /// The run fetched, merged, and persisted new history.
    Completed { new_negotiations: usize },
    /// The run failed; the error was reported through the event sink.
    Failed { error: String },
}

/// Orchestrates one incremental trade-history sync run.
///
/// A run is a single sequential flow: check enablement, plan the window,
/// fetch, normalize, merge per account, persist, update run metadata, and
/// refresh the derived portfolio. Failures anywhere past planning are
/// caught here and surfaced only through the event sink; the next
/// scheduled trigger simply tries again.
pub struct TradeHistorySyncService {
    source: Arc<dyn NegotiationSourceTrait>,
    repository: Arc<dyn NegotiationRepositoryTrait>,
    portfolio_service: Arc<dyn PortfolioServiceTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
    event_sink: Arc<dyn SyncEventSink>,
    in_flight: AtomicBool,
}

impl TradeHistorySyncService {
    /// Creates a new sync service with injected collaborators.
    pub fn new(
        source: Arc<dyn NegotiationSourceTrait>,
        repository: Arc<dyn NegotiationRepositoryTrait>,
        portfolio_service: Arc<dyn PortfolioServiceTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
        event_sink: Arc<dyn SyncEventSink>,
    ) -> Self {
        Self {
            source,
            repository,
            portfolio_service,
            settings_service,
            event_sink,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Runs the job once, as of the current instant.
    pub async fn run(&self) -> SyncOutcome {
        self.run_as_of(Utc::now()).await
    }

    /// Runs the job once, treating `now` as the current instant.
    ///
    /// Never propagates errors: failures are reported through the event
    /// sink and folded into the outcome. Loading-finished is emitted on
    /// every branch; navigation only after a full run (completed or
    /// failed), not on the disabled/already-current early exits.
    pub async fn run_as_of(&self, now: DateTime<Utc>) -> SyncOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Trade history sync already in flight, skipping trigger");
            return SyncOutcome::Skipped;
        }

        info!("Running trade history sync...");
        self.emit(SyncEvent::loading_started(
            SYNC_EVENT_TOPIC.to_string(),
            "Fetching negotiations from CEI".to_string(),
        ));

        let outcome = match self.execute(now).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Trade history sync failed: {}", e);
                self.notify(format!("Failed to sync with CEI: {}", e));
                SyncOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        self.emit(SyncEvent::loading_finished(SYNC_EVENT_TOPIC.to_string()));
        if matches!(
            outcome,
            SyncOutcome::Completed { .. } | SyncOutcome::Failed { .. }
        ) {
            self.emit(SyncEvent::navigate(RESULT_VIEW.to_string()));
        }

        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    async fn execute(&self, now: DateTime<Utc>) -> Result<SyncOutcome> {
        if !self.settings_service.is_trade_history_sync_enabled()? {
            self.notify("Trade history sync with CEI is turned off".to_string());
            return Ok(SyncOutcome::Disabled);
        }

        let metadata = self.repository.get_job_metadata()?;
        let last_run_date = metadata
            .and_then(|m| m.last_run)
            .map(market_date_from_utc);
        // The stored max date only matters once a previous run exists
        let latest_stored = match last_run_date {
            Some(_) => self
                .repository
                .get_negotiations()?
                .iter()
                .map(|n| n.trade_date)
                .max(),
            None => None,
        };
        let today = market_date_from_utc(now);

        let history = match plan_fetch(last_run_date, latest_stored, today) {
            FetchPlan::AlreadyCurrent => {
                self.notify("Negotiations are already up to date with CEI".to_string());
                return Ok(SyncOutcome::AlreadyCurrent);
            }
            FetchPlan::FullHistory => {
                debug!("No previous run recorded, fetching full history");
                self.source.fetch_history(None, None).await?
            }
            FetchPlan::Window { start, end } => {
                debug!("Fetching negotiations from {} to {}", start, end);
                self.source.fetch_history(Some(start), Some(end)).await?
            }
        };

        let mut new_negotiations = 0;
        let mut batches = Vec::with_capacity(history.len());
        for account_history in history {
            let records: Vec<Negotiation> = account_history
                .entries
                .iter()
                .map(|raw| Negotiation::from_raw(raw, &account_history.account))
                .collect();
            // Reported count is pre-merge: every entry added this run,
            // not the post-merge distinct-identity total.
            new_negotiations += records.len();
            batches.push(AccountNegotiations {
                account: account_history.account,
                negotiations: merge_duplicates(records),
            });
        }

        self.repository.save_batches(batches).await?;
        self.repository.update_job_metadata().await?;
        self.portfolio_service.refresh_from_history().await?;

        info!(
            "Trade history sync added {} new negotiations",
            new_negotiations
        );
        self.notify(format!("{} new negotiations added", new_negotiations));
        Ok(SyncOutcome::Completed { new_negotiations })
    }

    fn emit(&self, event: SyncEvent) {
        self.event_sink.emit(event);
    }

    fn notify(&self, body: String) {
        self.emit(SyncEvent::message(
            NOTIFICATION_TITLE.to_string(),
            body,
            NOTIFICATION_ICON.to_string(),
        ));
    }
}
