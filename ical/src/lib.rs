// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Represent and serialize iCalendar components and properties.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

pub mod formatter;
pub mod keyword;
pub mod semantic;
pub mod value;

pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter, format};
pub use crate::semantic::{Calendar, Event};
pub use crate::value::{ValueDate, ValueDateTime, ValueTime, escape_text, unescape_text};

/// Media type for iCalendar documents, per RFC 5545 Section 8.1.
pub const MEDIA_TYPE: &str = "text/calendar";
