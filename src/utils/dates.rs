use chrono::{DateTime, NaiveDate, Utc};

/// Truncate a timestamp to its calendar day. All "completed today"
/// comparisons go through here so day-boundary semantics live in one
/// place instead of being repeated inline at every call site.
pub fn calendar_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// Whether two timestamps fall on the same calendar day.
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    calendar_day(a) == calendar_day(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn same_day_ignores_time_of_day() {
        let morning = Utc.with_ymd_and_hms(2025, 4, 15, 6, 30, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2025, 4, 15, 23, 59, 59).unwrap();
        assert!(same_calendar_day(morning, night));
    }

    #[test]
    fn midnight_boundary_splits_days() {
        let before = Utc.with_ymd_and_hms(2025, 4, 15, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 4, 16, 0, 0, 0).unwrap();
        assert!(!same_calendar_day(before, after));
    }
}
