// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Drives one conversion run from source rows to a calendar.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

use termcal_ical::{Calendar, Event, ValueDateTime};

use crate::config::{ConvertConfig, PROD_ID};
use crate::error::{Error, RowFailure};
use crate::expand::expand;
use crate::parse::{parse_date, parse_time, parse_weekdays};
use crate::record::{CellValue, FieldMapping, FieldRole, Record};
use crate::types::WeekdaySet;

/// What a conversion run produces.
#[derive(Debug, Clone)]
pub struct Output {
    /// The generated calendar, ready to serialize.
    pub calendar: Calendar,

    /// Rows that were skipped, in input order.
    pub failures: Vec<RowFailure>,
}

/// Converts schedule rows into a calendar.
///
/// Stamps every event with the current time; [`convert_at`] takes the
/// clock as an argument instead.
pub fn convert(
    records: &[Record],
    mapping: &FieldMapping,
    config: &ConvertConfig,
) -> Result<Output, Error> {
    convert_at(records, mapping, config, Utc::now())
}

/// Converts schedule rows into a calendar, stamping every event with
/// the given generation time.
///
/// Rows that fail to parse are collected into [`Output::failures`] and
/// the remaining rows still convert. The run aborts only when a
/// required mapping is missing or when no row yields any event.
pub fn convert_at(
    records: &[Record],
    mapping: &FieldMapping,
    config: &ConvertConfig,
    now: DateTime<Utc>,
) -> Result<Output, Error> {
    mapping.validate()?;

    let mut calendar = Calendar::new(PROD_ID);
    calendar.name = owned_non_empty(config.calendar_name.trim());
    calendar.timezone = owned_non_empty(config.timezone.trim());

    let dt_stamp = ValueDateTime::from(now);
    let mut failures = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        let schedule = match parse_row(record, mapping) {
            Ok(schedule) => schedule,
            Err(reason) => {
                tracing::debug!(row, reason = %reason, "skipping row");
                failures.push(RowFailure { row, reason });
                continue;
            }
        };

        let summary = resolve_title(record, mapping, &config.title_template);
        let location = owned_non_empty(mapped_text(record, mapping, FieldRole::Location).trim());
        let description =
            owned_non_empty(mapped_text(record, mapping, FieldRole::Description).trim());

        for date in expand(schedule.start_date, schedule.end_date, schedule.days) {
            calendar.events.push(Event {
                uid: format!("{}@termcal", Uuid::new_v4()),
                dt_stamp,
                dt_start: NaiveDateTime::new(date, schedule.start_time).into(),
                dt_end: NaiveDateTime::new(date, schedule.end_time).into(),
                summary: Some(summary.clone()),
                location: location.clone(),
                description: description.clone(),
            });
        }
    }

    if calendar.events.is_empty() {
        return Err(Error::NoOccurrences { failures });
    }

    tracing::debug!(
        events = calendar.events.len(),
        skipped = failures.len(),
        "conversion finished"
    );
    Ok(Output { calendar, failures })
}

/// The typed schedule fields of one row.
#[derive(Debug)]
struct RowSchedule {
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    days: WeekdaySet,
}

/// Parses the five required fields of a row. The reason string names
/// the first field that did not parse.
fn parse_row(record: &Record, mapping: &FieldMapping) -> Result<RowSchedule, String> {
    let start_date = require_date(record, mapping, FieldRole::StartDate)?;
    let end_date = require_date(record, mapping, FieldRole::EndDate)?;
    let start_time = require_time(record, mapping, FieldRole::StartTime)?;
    let end_time = require_time(record, mapping, FieldRole::EndTime)?;

    let days = parse_weekdays(cell(record, mapping, FieldRole::DaysPattern));
    if days.is_empty() {
        return Err("no weekdays recognized in days-pattern".to_owned());
    }

    Ok(RowSchedule {
        start_date,
        end_date,
        start_time,
        end_time,
        days,
    })
}

fn require_date(
    record: &Record,
    mapping: &FieldMapping,
    role: FieldRole,
) -> Result<NaiveDate, String> {
    parse_date(cell(record, mapping, role)).ok_or_else(|| format!("could not parse {role}"))
}

fn require_time(
    record: &Record,
    mapping: &FieldMapping,
    role: FieldRole,
) -> Result<NaiveTime, String> {
    parse_time(cell(record, mapping, role)).ok_or_else(|| format!("could not parse {role}"))
}

/// The cell a role is mapped to, or an empty cell when unmapped.
fn cell<'a>(record: &'a Record, mapping: &FieldMapping, role: FieldRole) -> &'a CellValue {
    mapping
        .get(role)
        .and_then(|column| record.get(column))
        .unwrap_or(&CellValue::Empty)
}

/// Text of a mapped column, or empty when unmapped or not text.
fn mapped_text<'a>(record: &'a Record, mapping: &FieldMapping, role: FieldRole) -> &'a str {
    mapping
        .get(role)
        .and_then(|column| record.text(column))
        .unwrap_or("")
}

/// Resolves the event title for one row.
///
/// A mapped title column wins and the template is ignored, even when
/// the cell is blank. Otherwise the template tokens are substituted
/// independently and whitespace runs collapse to single spaces. An
/// empty result falls back to "Class".
fn resolve_title(record: &Record, mapping: &FieldMapping, template: &str) -> String {
    let title = match mapping.get(FieldRole::Title) {
        Some(column) => record.text(column).unwrap_or("").trim().to_owned(),
        None => {
            let substituted = template
                .replace(
                    "{Course}",
                    mapped_text(record, mapping, FieldRole::Course).trim(),
                )
                .replace(
                    "{Component}",
                    mapped_text(record, mapping, FieldRole::Component).trim(),
                )
                .replace(
                    "{Section}",
                    mapped_text(record, mapping, FieldRole::Section).trim(),
                );
            substituted.split_whitespace().collect::<Vec<_>>().join(" ")
        }
    };

    if title.is_empty() {
        "Class".to_owned()
    } else {
        title
    }
}

/// `Some` only when the trimmed text is non-empty.
fn owned_non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_owned())
}
