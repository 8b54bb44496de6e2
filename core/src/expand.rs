// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

use crate::types::WeekdaySet;

/// Expands a date range and a weekday set into concrete meeting days.
///
/// Scans every day from `start` through `end` inclusive and keeps the
/// ones whose weekday is in the set, so the result is ascending. An
/// inverted range or an empty set yields no dates.
pub fn expand(start: NaiveDate, end: NaiveDate, days: WeekdaySet) -> Vec<NaiveDate> {
    if days.is_empty() {
        return Vec::new();
    }

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| days.contains(date.weekday()))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_expands_mwf_range() {
        let days: WeekdaySet = [Weekday::Mon, Weekday::Wed, Weekday::Fri]
            .into_iter()
            .collect();
        let dates = expand(date(2025, 1, 6), date(2025, 1, 17), days);
        assert_eq!(
            dates,
            vec![
                date(2025, 1, 6),
                date(2025, 1, 8),
                date(2025, 1, 10),
                date(2025, 1, 13),
                date(2025, 1, 15),
                date(2025, 1, 17),
            ]
        );
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let days: WeekdaySet = [Weekday::Mon, Weekday::Fri].into_iter().collect();
        // 2025-01-06 is a Monday, 2025-01-10 a Friday.
        let dates = expand(date(2025, 1, 6), date(2025, 1, 10), days);
        assert_eq!(dates, vec![date(2025, 1, 6), date(2025, 1, 10)]);
    }

    #[test]
    fn test_single_day_range() {
        let days: WeekdaySet = [Weekday::Mon].into_iter().collect();
        let dates = expand(date(2025, 1, 6), date(2025, 1, 6), days);
        assert_eq!(dates, vec![date(2025, 1, 6)]);

        let off_day: WeekdaySet = [Weekday::Tue].into_iter().collect();
        assert!(expand(date(2025, 1, 6), date(2025, 1, 6), off_day).is_empty());
    }

    #[test]
    fn test_empty_when_start_after_end() {
        let days: WeekdaySet = [Weekday::Mon].into_iter().collect();
        assert!(expand(date(2025, 1, 17), date(2025, 1, 6), days).is_empty());
    }

    #[test]
    fn test_empty_when_no_days() {
        let dates = expand(date(2025, 1, 6), date(2025, 12, 31), WeekdaySet::empty());
        assert!(dates.is_empty());
    }

    #[test]
    fn test_output_is_strictly_ascending() {
        let days: WeekdaySet = [Weekday::Sun, Weekday::Sat].into_iter().collect();
        let dates = expand(date(2025, 1, 1), date(2025, 3, 31), days);
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(dates.iter().all(|d| {
            d.weekday() == Weekday::Sat || d.weekday() == Weekday::Sun
        }));
    }
}
