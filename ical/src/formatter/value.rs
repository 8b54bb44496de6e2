// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Value formatting for iCalendar values.
//!
//! This module provides functions to format the value types this crate
//! serializes, as defined in RFC 5545 Section 3.3.

use std::io::{self, Write};

use crate::value::{ValueDate, ValueDateTime, ValueTime};

/// Format a date value as `YYYYMMDD`.
pub fn write_date<W: Write>(w: &mut W, date: ValueDate) -> io::Result<()> {
    write!(w, "{:04}{:02}{:02}", date.year, date.month, date.day)
}

/// Format a date-time value as `YYYYMMDDTHHMMSS[Z]`.
pub fn write_date_time<W: Write>(w: &mut W, datetime: &ValueDateTime) -> io::Result<()> {
    write_date(w, datetime.date)?;
    write!(w, "T")?;
    write_time(w, &datetime.time)
}

/// Format a time value as `HHMMSS[Z]`.
pub fn write_time<W: Write>(w: &mut W, time: &ValueTime) -> io::Result<()> {
    let utc = if time.utc { "Z" } else { "" };
    write!(
        w,
        "{:02}{:02}{:02}{}",
        time.hour, time.minute, time.second, utc
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = ValueDate {
            year: 1997,
            month: 7,
            day: 14,
        };
        let mut buffer = Vec::new();
        write_date(&mut buffer, date).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "19970714");
    }

    #[test]
    fn test_format_time() {
        let time = ValueTime::new(13, 30, 0, false);
        let mut buffer = Vec::new();
        write_time(&mut buffer, &time).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "133000");

        let time_utc = ValueTime::new(7, 0, 0, true);
        let mut buffer = Vec::new();
        write_time(&mut buffer, &time_utc).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "070000Z");
    }

    #[test]
    fn test_format_date_time() {
        let datetime = ValueDateTime::new(
            ValueDate {
                year: 2025,
                month: 1,
                day: 6,
            },
            ValueTime::new(10, 0, 0, false),
        );
        let mut buffer = Vec::new();
        write_date_time(&mut buffer, &datetime).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "20250106T100000");
    }
}
