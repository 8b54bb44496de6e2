// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::record::CellValue;

/// Parses a time of day from a cell.
///
/// Native time cells are taken directly. Text is matched against
/// `H[:MM[:SS]]` with an optional AM/PM suffix, then against a plain
/// 24-hour `HH:MM[:SS]`. Seconds default to 0.
pub fn parse_time(value: &CellValue) -> Option<NaiveTime> {
    let text = match value {
        CellValue::Empty => return None,
        CellValue::DateTime(dt) => return Some(dt.time()),
        CellValue::Text(text) => text.trim().to_uppercase(),
    };
    if text.is_empty() {
        return None;
    }

    parse_clock(&text).or_else(|| parse_hm24(&text))
}

/// `H[:MM[:SS]]` with optional meridiem. Without one the hour is
/// taken literally as 24-hour.
fn parse_clock(text: &str) -> Option<NaiveTime> {
    const RE: &str = r"^(\d{1,2})(?::(\d{2}))?(?::(\d{2}))?\s*(AM|PM)?$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let captures = re.captures(text)?;
    let mut hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = match captures.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let second: u32 = match captures.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    match captures.get(4).map(|m| m.as_str()) {
        Some("AM") if hour == 12 => hour = 0,
        Some("PM") if hour < 12 => hour += 12,
        _ => {}
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Plain 24-hour `HH:MM[:SS]`.
fn parse_hm24(text: &str) -> Option<NaiveTime> {
    const RE: &str = r"^(\d{2}):(\d{2})(?::(\d{2}))?$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let captures = re.captures(text)?;
    let hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = captures[2].parse().ok()?;
    let second: u32 = match captures.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_owned())
    }

    fn time(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).unwrap()
    }

    #[test]
    fn test_parses_twelve_hour_clock() {
        assert_eq!(parse_time(&text("8:00 AM")), Some(time(8, 0, 0)));
        assert_eq!(parse_time(&text("8 PM")), Some(time(20, 0, 0)));
        assert_eq!(parse_time(&text("10:50 am")), Some(time(10, 50, 0)));
        assert_eq!(parse_time(&text("1:30:15 PM")), Some(time(13, 30, 15)));
        // A meridiem on an hour already past noon changes nothing.
        assert_eq!(parse_time(&text("13:00 PM")), Some(time(13, 0, 0)));
    }

    #[test]
    fn test_noon_and_midnight() {
        assert_eq!(parse_time(&text("12:00 AM")), Some(time(0, 0, 0)));
        assert_eq!(parse_time(&text("12:00 PM")), Some(time(12, 0, 0)));
    }

    #[test]
    fn test_parses_twenty_four_hour_clock() {
        assert_eq!(parse_time(&text("20:30")), Some(time(20, 30, 0)));
        assert_eq!(parse_time(&text("08:15:30")), Some(time(8, 15, 30)));
        assert_eq!(parse_time(&text("9")), Some(time(9, 0, 0)));
        assert_eq!(parse_time(&text("0:00")), Some(time(0, 0, 0)));
    }

    #[test]
    fn test_takes_native_cell_time() {
        let dt = chrono::NaiveDate::from_ymd_opt(1899, 12, 31)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(parse_time(&CellValue::DateTime(dt)), Some(time(10, 0, 0)));
    }

    #[test]
    fn test_rejects_unparseable_values() {
        assert_eq!(parse_time(&CellValue::Empty), None);
        assert_eq!(parse_time(&text("")), None);
        assert_eq!(parse_time(&text("noonish")), None);
        assert_eq!(parse_time(&text("25:00")), None);
        assert_eq!(parse_time(&text("10:75")), None);
    }
}
