// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Source rows and the column-to-field mapping they are read through.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::Error;

/// A single cell as produced by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// A blank cell.
    #[default]
    Empty,

    /// Free text, kept verbatim.
    Text(String),

    /// A native spreadsheet date or time cell.
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Text content of the cell. Blank and native date cells have none.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// One source row, keyed by column name.
#[derive(Debug, Clone, Default)]
pub struct Record {
    cells: HashMap<String, CellValue>,
}

impl Record {
    /// Builds a record by pairing header names with the row's cells.
    ///
    /// Missing trailing cells become [`CellValue::Empty`]; extra cells
    /// beyond the headers are dropped.
    pub fn from_row(headers: &[String], mut values: Vec<CellValue>) -> Self {
        values.resize(headers.len(), CellValue::Empty);
        let cells = headers.iter().cloned().zip(values).collect();
        Record { cells }
    }

    /// Looks up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Text of a column, or `None` when the column is missing or has
    /// no text content.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(CellValue::as_text)
    }
}

/// The schedule fields a spreadsheet column can be mapped to.
///
/// Renders and parses as kebab-case, e.g. `start-date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FieldRole {
    /// First day of the date range.
    StartDate,

    /// Last day of the date range, inclusive.
    EndDate,

    /// Wall-clock time a meeting starts.
    StartTime,

    /// Wall-clock time a meeting ends.
    EndTime,

    /// Which weekdays the meeting repeats on.
    DaysPattern,

    /// Explicit event title. When mapped, the title template is ignored.
    Title,

    /// Course code, substituted for `{Course}` in the title template.
    Course,

    /// Meeting format such as LEC or LAB, substituted for `{Component}`.
    Component,

    /// Section number, substituted for `{Section}`.
    Section,

    /// Meeting place.
    Location,

    /// Free-form event notes.
    Description,
}

impl FieldRole {
    /// Every role, required ones first.
    pub const ALL: [FieldRole; 11] = [
        FieldRole::StartDate,
        FieldRole::EndDate,
        FieldRole::StartTime,
        FieldRole::EndTime,
        FieldRole::DaysPattern,
        FieldRole::Title,
        FieldRole::Course,
        FieldRole::Component,
        FieldRole::Section,
        FieldRole::Location,
        FieldRole::Description,
    ];

    /// Roles that must be mapped before a conversion can run.
    pub const REQUIRED: [FieldRole; 5] = [
        FieldRole::StartDate,
        FieldRole::EndDate,
        FieldRole::StartTime,
        FieldRole::EndTime,
        FieldRole::DaysPattern,
    ];

    /// Whether this role must be mapped.
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

/// Column assignments for the schedule fields.
#[derive(Debug, Clone, Default)]
pub struct FieldMapping {
    columns: HashMap<FieldRole, String>,
}

impl FieldMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        FieldMapping::default()
    }

    /// Assigns a column to a role, replacing any previous assignment.
    pub fn set(&mut self, role: FieldRole, column: impl Into<String>) {
        self.columns.insert(role, column.into());
    }

    /// The column assigned to a role, if any.
    pub fn get(&self, role: FieldRole) -> Option<&str> {
        self.columns.get(&role).map(String::as_str)
    }

    /// Checks that every required role has a column assigned.
    pub fn validate(&self) -> Result<(), Error> {
        for role in FieldRole::REQUIRED {
            if !self.columns.contains_key(&role) {
                return Err(Error::MissingField(role));
            }
        }
        Ok(())
    }
}
