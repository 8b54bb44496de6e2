// SPDX-FileCopyrightText: 2025 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strongly-typed calendar document model.
//!
//! These types carry the semantic content of a calendar to serialize,
//! independent of the RFC 5545 text representation produced by the
//! [`formatter`](crate::formatter) module.

mod icalendar;
mod vevent;

pub use icalendar::Calendar;
pub use vevent::Event;
