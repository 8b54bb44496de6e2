// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Weekday;

use crate::record::CellValue;
use crate::types::WeekdaySet;

/// Verbose day names rewritten to compact tokens. Longer forms come
/// first so `SATURDAY` is never eaten via `SAT`. Thursday becomes the
/// single letter `R` to stay distinct from Tuesday's `T`; bare `TH`
/// sits last so every longer Thursday form wins.
const REPLACEMENTS: [(&str, &str); 29] = [
    ("THURSDAY", "R"),
    ("TUESDAY", "TU"),
    ("WEDNESDAY", "WE"),
    ("SATURDAY", "SA"),
    ("MONDAY", "MO"),
    ("SUNDAY", "SU"),
    ("FRIDAY", "FR"),
    ("THURS.", "R"),
    ("THURS", "R"),
    ("THUR.", "R"),
    ("THUR", "R"),
    ("TUES.", "TU"),
    ("TUES", "TU"),
    ("MON.", "MO"),
    ("TUE.", "TU"),
    ("WED.", "WE"),
    ("THU.", "R"),
    ("FRI.", "FR"),
    ("SAT.", "SA"),
    ("SUN.", "SU"),
    ("MON", "MO"),
    ("TUE", "TU"),
    ("WED", "WE"),
    ("THU", "R"),
    ("FRI", "FR"),
    ("SAT", "SA"),
    ("SUN", "SU"),
    ("TH.", "R"),
    ("TH", "R"),
];

/// Parses a weekday pattern such as "MWF", "TuTh" or "Mon Wed Fri".
///
/// Unrecognized tokens are dropped rather than reported, so garbage
/// input simply yields an empty set.
pub fn parse_weekdays(value: &CellValue) -> WeekdaySet {
    let text = match value {
        CellValue::Text(text) => text.trim().to_uppercase(),
        _ => return WeekdaySet::empty(),
    };
    if text.is_empty() {
        return WeekdaySet::empty();
    }

    let normalized = normalize(&text);
    if normalized.contains(' ') {
        parse_spaced(&normalized)
    } else {
        parse_compact(&normalized)
    }
}

/// Rewrites verbose day names to compact tokens and unifies separator
/// characters into single spaces.
fn normalize(text: &str) -> String {
    let mut text = text.to_owned();
    for (from, to) in REPLACEMENTS {
        text = text.replace(from, to);
    }

    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '&' | '/' | '\\' | '|'))
        .filter(|token| !token.is_empty())
        .collect();
    tokens.join(" ")
}

/// Compact concatenated form, e.g. "MWF" or "MTWRF".
///
/// Index scan with one character of lookahead: `TU`, `SA` and `SU`
/// consume two characters, everything else one. A `T` not followed by
/// `U` is Tuesday; `R` is Thursday.
fn parse_compact(text: &str) -> WeekdaySet {
    let mut days = WeekdaySet::empty();
    let chars: Vec<char> = text.chars().collect();

    let mut i = 0;
    while i < chars.len() {
        let next = chars.get(i + 1).copied();
        match chars[i] {
            'T' if next == Some('U') => {
                days.insert(Weekday::Tue);
                i += 2;
                continue;
            }
            'S' if next == Some('A') => {
                days.insert(Weekday::Sat);
                i += 2;
                continue;
            }
            'S' if next == Some('U') => {
                days.insert(Weekday::Sun);
                i += 2;
                continue;
            }
            'M' => days.insert(Weekday::Mon),
            'T' => days.insert(Weekday::Tue),
            'W' => days.insert(Weekday::Wed),
            'R' => days.insert(Weekday::Thu),
            'F' => days.insert(Weekday::Fri),
            _ => {}
        }
        i += 1;
    }
    days
}

/// Space-separated tokens left over after normalization.
fn parse_spaced(text: &str) -> WeekdaySet {
    let mut days = WeekdaySet::empty();
    for token in text.split(' ') {
        let day = match token {
            "M" | "MO" => Weekday::Mon,
            "T" | "TU" => Weekday::Tue,
            "W" | "WE" => Weekday::Wed,
            "TH" | "R" => Weekday::Thu,
            "F" | "FR" => Weekday::Fri,
            "SA" => Weekday::Sat,
            "SU" => Weekday::Sun,
            _ => continue,
        };
        days.insert(day);
    }
    days
}
