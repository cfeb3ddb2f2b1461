/// Source tag applied to every normalized negotiation.
pub const SOURCE_CEI: &str = "CEI";

/// Topic identifying this job's loading lifecycle events.
pub const SYNC_EVENT_TOPIC: &str = "TRADE_HISTORY_SYNC";

/// Title for user-facing trade-history notifications.
pub const NOTIFICATION_TITLE: &str = "Negotiations";

/// Icon hint forwarded to the notifier with every message.
pub const NOTIFICATION_ICON: &str = "fas fa-receipt";

/// View the UI navigates to after a full run.
pub const RESULT_VIEW: &str = "trade-history/sync-result";
