//! Wall-clock helpers.

use chrono::Utc;

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// A timestamp strictly after `previous`, normally `now`.
///
/// Guards against clock skew and same-millisecond updates so that
/// `updated_at` never stands still or goes backwards.
pub fn next_after(previous: i64, now: i64) -> i64 {
    now.max(previous.saturating_add(1))
}
