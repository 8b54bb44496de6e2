// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Parsers for the loosely formatted schedule fields.
//!
//! All three parsers are total: anything unparseable comes back as
//! `None` or an empty set, never an error. The converter decides what
//! that means for the row.

mod date;
mod time;
mod weekday;

pub use date::parse_date;
pub use time::parse_time;
pub use weekday::parse_weekdays;
