//! Business-day arithmetic
//!
//! Used by callers to recompute derived durations (e.g. claim turnaround)
//! after a transition reports that the duration is stale.

use chrono::{Datelike, NaiveDate, Weekday};

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts business days in the half-open range `(start, end]`.
///
/// Returns zero when `end` is not after `start`.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let total = (end - start).num_days();
    if total <= 0 {
        return 0;
    }

    let full_weeks = total / 7;
    let mut count = full_weeks * 5;
    let mut day = start + chrono::Duration::days(full_weeks * 7);
    while day < end {
        day = day + chrono::Duration::days(1);
        if is_business_day(day) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_friday_to_monday_is_one_day() {
        assert_eq!(business_days_between(date(2024, 3, 8), date(2024, 3, 11)), 1);
    }

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(business_days_between(date(2024, 3, 8), date(2024, 3, 8)), 0);
    }

    #[test]
    fn test_reversed_range_is_zero() {
        assert_eq!(business_days_between(date(2024, 3, 11), date(2024, 3, 8)), 0);
    }

    #[test]
    fn test_two_full_weeks() {
        assert_eq!(business_days_between(date(2024, 3, 4), date(2024, 3, 18)), 10);
    }

    proptest! {
        #[test]
        fn matches_naive_day_walk(offset in 0i64..3650, span in 0i64..400) {
            let start = date(2020, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(span);
            let naive = start
                .iter_days()
                .skip(1)
                .take_while(|d| *d <= end)
                .filter(|d| is_business_day(*d))
                .count() as i64;
            prop_assert_eq!(business_days_between(start, end), naive);
        }
    }
}
