// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting for iCalendar properties.
//!
//! This module provides functions to format the property shapes this crate
//! serializes, as defined in RFC 5545 Sections 3.7 and 3.8.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::formatter::value::write_date_time;
use crate::value::{ValueDateTime, escape_text};

/// Write a property with a verbatim value, `NAME:VALUE`.
///
/// The value is written as-is; use [`write_prop_text`] for free-form text.
pub fn write_prop<W: Write>(f: &mut Formatter<W>, name: &str, value: &str) -> io::Result<()> {
    write!(f, "{name}:{value}")?;
    f.writeln()
}

/// Write a text property, escaping the value per RFC 5545 Section 3.3.11.
pub fn write_prop_text<W: Write>(f: &mut Formatter<W>, name: &str, text: &str) -> io::Result<()> {
    write!(f, "{name}:{}", escape_text(text))?;
    f.writeln()
}

/// Write a date-time property, `NAME:YYYYMMDDTHHMMSS[Z]`.
pub fn write_prop_date_time<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    datetime: &ValueDateTime,
) -> io::Result<()> {
    write!(f, "{name}:")?;
    write_date_time(f, datetime)?;
    f.writeln()
}
