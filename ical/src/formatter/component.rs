// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting for iCalendar components.
//!
//! This module provides functions to format the component types this crate
//! serializes, as defined in RFC 5545 Section 3.6.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::formatter::property::{write_prop, write_prop_date_time, write_prop_text};
use crate::keyword::{
    KW_BEGIN, KW_CALSCALE, KW_CALSCALE_GREGORIAN, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART,
    KW_END, KW_LOCATION, KW_PRODID, KW_SUMMARY, KW_UID, KW_VCALENDAR, KW_VERSION, KW_VERSION_2_0,
    KW_VEVENT, KW_X_WR_CALNAME, KW_X_WR_TIMEZONE,
};
use crate::semantic::{Calendar, Event};

/// Format a `Calendar` component.
pub fn write_calendar<W: Write>(f: &mut Formatter<W>, calendar: &Calendar) -> io::Result<()> {
    with_block(f, KW_VCALENDAR, |f| {
        // Required properties
        write_prop(f, KW_PRODID, &calendar.prod_id)?;
        write_prop(f, KW_VERSION, KW_VERSION_2_0)?;
        write_prop(f, KW_CALSCALE, KW_CALSCALE_GREGORIAN)?;

        // Optional properties
        if let Some(name) = &calendar.name
            && !name.is_empty()
        {
            write_prop_text(f, KW_X_WR_CALNAME, name)?;
        }
        if let Some(timezone) = &calendar.timezone
            && !timezone.is_empty()
        {
            write_prop_text(f, KW_X_WR_TIMEZONE, timezone)?;
        }

        // Components
        for event in &calendar.events {
            write_vevent(f, event)?;
        }

        Ok(())
    })
}

/// Format an `Event` component.
fn write_vevent<W: Write>(f: &mut Formatter<W>, event: &Event) -> io::Result<()> {
    with_block(f, KW_VEVENT, |f| {
        // Required properties
        write_prop(f, KW_UID, &event.uid)?;
        write_prop_date_time(f, KW_DTSTAMP, &event.dt_stamp)?;
        write_prop_date_time(f, KW_DTSTART, &event.dt_start)?;
        write_prop_date_time(f, KW_DTEND, &event.dt_end)?;

        // Optional properties
        if let Some(summary) = &event.summary
            && !summary.is_empty()
        {
            write_prop_text(f, KW_SUMMARY, summary)?;
        }
        if let Some(location) = &event.location
            && !location.is_empty()
        {
            write_prop_text(f, KW_LOCATION, location)?;
        }
        if let Some(description) = &event.description
            && !description.is_empty()
        {
            write_prop_text(f, KW_DESCRIPTION, description)?;
        }

        Ok(())
    })
}

/// Write a `BEGIN:<name>` / `END:<name>` block around `write_content`.
fn with_block<W: Write, F: FnOnce(&mut Formatter<W>) -> io::Result<()>>(
    f: &mut Formatter<W>,
    name: &str,
    write_content: F,
) -> io::Result<()> {
    write!(f, "{KW_BEGIN}:{name}")?;
    f.writeln()?;

    write_content(f)?;

    write!(f, "{KW_END}:{name}")?;
    f.writeln()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::formatter::FormatOptions;
    use crate::value::{ValueDate, ValueDateTime, ValueTime};

    fn sample_event() -> Event {
        let date = ValueDate {
            year: 2025,
            month: 1,
            day: 6,
        };
        Event {
            uid: "11111111-2222-3333-4444-555555555555@termcal".into(),
            dt_stamp: ValueDateTime::new(date, ValueTime::new(9, 30, 0, true)),
            dt_start: ValueDateTime::new(date, ValueTime::new(10, 0, 0, false)),
            dt_end: ValueDateTime::new(date, ValueTime::new(10, 50, 0, false)),
            summary: Some("CS 101 LEC 001".into()),
            location: Some("Room 204".into()),
            description: None,
        }
    }

    #[test]
    fn test_write_vevent_property_order() {
        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default());
        write_vevent(&mut f, &sample_event()).unwrap();

        let out = String::from_utf8(buffer).unwrap();
        let expected = "BEGIN:VEVENT\r\n\
            UID:11111111-2222-3333-4444-555555555555@termcal\r\n\
            DTSTAMP:20250106T093000Z\r\n\
            DTSTART:20250106T100000\r\n\
            DTEND:20250106T105000\r\n\
            SUMMARY:CS 101 LEC 001\r\n\
            LOCATION:Room 204\r\n\
            END:VEVENT\r\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_write_calendar_skips_empty_optionals() {
        let calendar = Calendar {
            prod_id: "-//termcal//termcal//EN".into(),
            name: Some(String::new()),
            timezone: None,
            events: Vec::new(),
        };

        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default());
        write_calendar(&mut f, &calendar).unwrap();

        let out = String::from_utf8(buffer).unwrap();
        assert!(!out.contains("X-WR-CALNAME"));
        assert!(!out.contains("X-WR-TIMEZONE"));
        assert!(out.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(out.ends_with("END:VCALENDAR\r\n"));
    }
}
