//! Check-in helpers.

use chrono::{NaiveTime, TimeZone, Utc};

use crate::types::Timestamp;

/// Cap on the number of check-ins returned for the current day.
pub const TODAY_LIST_LIMIT: i64 = 1_000;

/// Midnight UTC of the day containing `now`.
pub fn start_of_utc_day(now: Timestamp) -> Timestamp {
    Utc.from_utc_datetime(&now.date_naive().and_time(NaiveTime::MIN))
}
