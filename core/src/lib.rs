// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Turn class schedule rows into calendar events.
//!
//! The engine is a pure function over in-memory data: the caller
//! supplies records, a field mapping and a config, and gets back a
//! [`termcal_ical::Calendar`] plus the list of rows that were skipped.

mod config;
mod convert;
mod error;
mod expand;
mod parse;
mod record;
mod types;

pub use crate::config::{APP_NAME, ConvertConfig, PROD_ID};
pub use crate::convert::{Output, convert, convert_at};
pub use crate::error::{Error, RowFailure};
pub use crate::expand::expand;
pub use crate::parse::{parse_date, parse_time, parse_weekdays};
pub use crate::record::{CellValue, FieldMapping, FieldRole, Record};
pub use crate::types::WeekdaySet;
