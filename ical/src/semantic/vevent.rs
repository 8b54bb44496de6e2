// SPDX-FileCopyrightText: 2025 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Event component (VEVENT) for the calendar document model.

use crate::value::ValueDateTime;

/// Event component (VEVENT) to serialize.
#[derive(Debug, Clone)]
pub struct Event {
    /// Unique identifier for the event
    pub uid: String,

    /// Date/time the instance was produced, in UTC
    pub dt_stamp: ValueDateTime,

    /// Date/time the event starts, floating local time
    pub dt_start: ValueDateTime,

    /// Date/time the event ends, floating local time
    pub dt_end: ValueDateTime,

    /// Summary/title of the event
    pub summary: Option<String>,

    /// Location of the event
    pub location: Option<String>,

    /// Description of the event
    pub description: Option<String>,
}
