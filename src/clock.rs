use std::time::SystemTime;

use num_integer::Integer;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days since 1970-01-01 according to the system clock, in UTC.
pub fn today_epoch_day() -> i64 {
    epoch_day(SystemTime::now())
}

/// Whole days between the Unix epoch and `value`, rounded towards negative
/// infinity so that instants before the epoch land on the day they fall in.
pub fn epoch_day(value: SystemTime) -> i64 {
    Integer::div_floor(&seconds_since_epoch(value), &SECONDS_PER_DAY)
}

/// Whole seconds between the epoch and `value` as time_t would count them (no
/// leap seconds), rounded down. Negative before the epoch.
fn seconds_since_epoch(value: SystemTime) -> i64 {
    match value.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => i64::try_from(duration.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let duration = err.duration();
            let seconds = i64::try_from(duration.as_secs()).unwrap_or(i64::MAX);
            // A fraction of a second before the epoch belongs to the second before it.
            if duration.subsec_nanos() > 0 {
                -seconds - 1
            } else {
                -seconds
            }
        }
    }
}
