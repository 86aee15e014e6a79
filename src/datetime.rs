// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

/// Returns the first date on or after `anchor` that falls on `weekday`.
///
/// Returns `anchor` itself when it already falls on `weekday`.
pub fn nearest_weekday(anchor: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (i64::from(weekday.num_days_from_monday())
        - i64::from(anchor.weekday().num_days_from_monday()))
    .rem_euclid(7);
    anchor + TimeDelta::days(ahead)
}

/// Returns the date of the 1-based `week`-th occurrence of `weekday` on or
/// after `anchor`, or `None` when the result falls outside the representable
/// date range.
pub fn nth_week_date(anchor: NaiveDate, weekday: Weekday, week: u32) -> Option<NaiveDate> {
    let first = nearest_weekday(anchor, weekday);
    first.checked_add_signed(TimeDelta::days(7 * (i64::from(week) - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nearest_weekday_same_day() {
        // 2024-09-02 is a Monday
        let anchor = date(2024, 9, 2);
        assert_eq!(nearest_weekday(anchor, Weekday::Mon), anchor);
    }

    #[test]
    fn test_nearest_weekday_forward() {
        let anchor = date(2024, 9, 2);
        assert_eq!(nearest_weekday(anchor, Weekday::Wed), date(2024, 9, 4));
        assert_eq!(nearest_weekday(anchor, Weekday::Sun), date(2024, 9, 8));
    }

    #[test]
    fn test_nearest_weekday_wraps_into_next_week() {
        // 2024-09-05 is a Thursday, so Monday is 4 days ahead
        let anchor = date(2024, 9, 5);
        assert_eq!(nearest_weekday(anchor, Weekday::Mon), date(2024, 9, 9));
    }

    #[test]
    fn test_nth_week_date() {
        let anchor = date(2024, 9, 2);
        assert_eq!(
            nth_week_date(anchor, Weekday::Mon, 1),
            Some(date(2024, 9, 2))
        );
        assert_eq!(
            nth_week_date(anchor, Weekday::Mon, 3),
            Some(date(2024, 9, 16))
        );
        assert_eq!(
            nth_week_date(anchor, Weekday::Fri, 2),
            Some(date(2024, 9, 13))
        );
    }

    #[test]
    fn test_nth_week_date_overflow() {
        let anchor = NaiveDate::MAX;
        assert_eq!(nth_week_date(anchor, anchor.weekday(), u32::MAX), None);
    }
}
