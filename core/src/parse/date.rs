// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::record::CellValue;

/// Date-only formats tried first, most common export shapes up front.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m/%d/%y"];

/// Date-time shapes some exports use for date columns; the time part
/// is dropped.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a calendar date from a cell.
///
/// Native date cells are truncated to the day. Text runs through the
/// known formats and then a strict `YYYY[-/]?MM[-/]?DD` digit pattern.
/// Anything else is `None`.
pub fn parse_date(value: &CellValue) -> Option<NaiveDate> {
    let text = match value {
        CellValue::Empty => return None,
        CellValue::DateTime(dt) => return Some(dt.date()),
        CellValue::Text(text) => text.trim(),
    };
    if text.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }

    parse_digits(text)
}

/// Eight digits with optional `-` or `/` separators.
fn parse_digits(text: &str) -> Option<NaiveDate> {
    const RE: &str = r"^(\d{4})[-/]?(\d{2})[-/]?(\d{2})$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let captures = re.captures(text)?;
    let year = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    let day = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
