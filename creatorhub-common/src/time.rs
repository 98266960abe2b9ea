//! Timestamp utilities

use chrono::{DateTime, Duration, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Expiry instant for something issued now and valid for `hours`
pub fn expiry_after_hours(hours: i64) -> DateTime<Utc> {
    now() + Duration::hours(hours)
}
