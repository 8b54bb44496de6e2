// SPDX-FileCopyrightText: 2025 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

pub const KW_BEGIN: &str = "BEGIN";
pub const KW_END: &str = "END";

pub const KW_VCALENDAR: &str = "VCALENDAR";
pub const KW_VEVENT: &str = "VEVENT";

// Section 3.7 - Calendar Properties
pub const KW_CALSCALE: &str = "CALSCALE";
pub const KW_CALSCALE_GREGORIAN: &str = "GREGORIAN";
pub const KW_PRODID: &str = "PRODID";
pub const KW_VERSION: &str = "VERSION";
pub const KW_VERSION_2_0: &str = "2.0";

// Section 3.8.1 - Descriptive Component Properties
pub const KW_DESCRIPTION: &str = "DESCRIPTION";
pub const KW_LOCATION: &str = "LOCATION";
pub const KW_SUMMARY: &str = "SUMMARY";

// Section 3.8.2 - Date and Time Component Properties
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_DTEND: &str = "DTEND";

// Section 3.8.4 - Relationship Component Properties
pub const KW_UID: &str = "UID";

// Section 3.8.7 - Change Management Component Properties
pub const KW_DTSTAMP: &str = "DTSTAMP";

// Non-standard properties in widespread client use
pub const KW_X_WR_CALNAME: &str = "X-WR-CALNAME";
pub const KW_X_WR_TIMEZONE: &str = "X-WR-TIMEZONE";
