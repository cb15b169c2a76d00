//! Timestamp conversions for values that cross the boundary as plain numbers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Signed seconds since the Unix epoch, `0.0` for an absent date.
pub fn epoch_seconds(date: Option<SystemTime>) -> f64 {
    date.map_or(0.0, |d| match d.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    })
}

/// Whole seconds of `duration`, saturating at `i64::MAX`.
pub fn whole_seconds(duration: Duration) -> i64 {
    i64::try_from(duration.as_secs()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_dates_are_zero() {
        assert_eq!(epoch_seconds(None), 0.0);
    }

    #[test]
    fn pre_epoch_dates_are_negative() {
        assert_eq!(epoch_seconds(Some(UNIX_EPOCH - Duration::from_millis(5_250))), -5.25);
    }

    #[test]
    fn dates_keep_sub_second_precision() {
        let date = UNIX_EPOCH + Duration::from_millis(1_600_000_000_500);
        assert_eq!(epoch_seconds(Some(date)), 1_600_000_000.5);
    }

    #[test]
    fn durations_truncate_to_seconds() {
        assert_eq!(whole_seconds(Duration::from_millis(86_400_999)), 86_400);
    }
}
