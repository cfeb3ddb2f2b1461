//! Incremental fetch window planning.

use chrono::{Days, NaiveDate};

/// Sentinel start date used when no stored record can anchor the window.
/// Far enough in the past to cover any plausible trading history.
pub fn earliest_history_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid calendar date")
}

/// Outcome of window planning for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPlan {
    /// First-ever run: request the entire available history.
    FullHistory,
    /// A run already completed today; nothing to request.
    AlreadyCurrent,
    /// Request the closed date range [start, end].
    Window { start: NaiveDate, end: NaiveDate },
}

/// Decides whether a fetch is needed and which date range to request.
///
/// Pure decision: reads of metadata and stored records belong to the
/// caller, and the fetch itself to the data source.
///
/// - No previous run recorded: [`FetchPlan::FullHistory`].
/// - Previous run on the same calendar day as `today`:
///   [`FetchPlan::AlreadyCurrent`].
/// - Otherwise a window from the day after the newest stored record
///   through yesterday. An empty store with a recorded run is an
///   inconsistent state; the window falls back to
///   [`earliest_history_date`] so the run still makes progress.
///
/// An inverted window (start past end) is returned as computed; the data
/// source treats it as an empty range.
pub fn plan_fetch(
    last_run_date: Option<NaiveDate>,
    latest_stored: Option<NaiveDate>,
    today: NaiveDate,
) -> FetchPlan {
    let last_run_date = match last_run_date {
        None => return FetchPlan::FullHistory,
        Some(date) => date,
    };

    if last_run_date == today {
        return FetchPlan::AlreadyCurrent;
    }

    let start = latest_stored
        .and_then(|date| date.checked_add_days(Days::new(1)))
        .map_or_else(earliest_history_date, |date| {
            date.max(earliest_history_date())
        });
    let end = today.pred_opt().unwrap_or_else(earliest_history_date);

    FetchPlan::Window { start, end }
}
