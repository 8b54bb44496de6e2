// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Value types for iCalendar property values.
//!
//! This module holds the value types this crate serializes, as defined in
//! RFC 5545 Section 3.3.

mod datetime;
mod text;

pub use datetime::{ValueDate, ValueDateTime, ValueTime};
pub use text::{escape_text, unescape_text};
