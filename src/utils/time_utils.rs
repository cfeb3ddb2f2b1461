use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Timezone used to turn instants into market calendar days.
/// B3 trading sessions and CEI statements follow São Paulo time.
pub const MARKET_TZ: Tz = chrono_tz::America::Sao_Paulo;

/// Converts a UTC instant to a calendar day in the market timezone.
///
/// This is the single source of truth for deriving a "trading day" from a
/// timestamp; same-day comparisons elsewhere rely on it.
pub fn market_date_from_utc(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&MARKET_TZ).date_naive()
}
