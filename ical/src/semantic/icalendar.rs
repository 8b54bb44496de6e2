// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar container type.

use std::io;

use crate::semantic::Event;

/// Calendar document (VCALENDAR) to serialize.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    /// Product identifier that generated the iCalendar data
    pub prod_id: String,

    /// Display name, written as `X-WR-CALNAME` when non-empty
    pub name: Option<String>,

    /// Time zone display hint, written as `X-WR-TIMEZONE` when non-empty
    pub timezone: Option<String>,

    /// Event components, in serialization order
    pub events: Vec<Event>,
}

impl Calendar {
    /// Create an empty calendar with the given product identifier.
    #[must_use]
    pub fn new(prod_id: impl Into<String>) -> Self {
        Self {
            prod_id: prod_id.into(),
            name: None,
            timezone: None,
            events: Vec::new(),
        }
    }

    /// Serialize to RFC 5545 text with default formatting options.
    ///
    /// # Errors
    /// Returns an error if formatting fails.
    pub fn to_ics(&self) -> io::Result<String> {
        crate::formatter::format(self)
    }
}
