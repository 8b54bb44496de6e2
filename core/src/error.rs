// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::record::FieldRole;

/// Errors that abort a conversion run before a calendar is produced.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A required schedule field has no column assigned to it.
    #[error("no column mapped for required field '{0}'")]
    MissingField(FieldRole),

    /// Every row was skipped or expanded to nothing.
    #[error("no events were produced ({} row(s) failed)", .failures.len())]
    NoOccurrences {
        /// The per-row failures collected during the run.
        failures: Vec<RowFailure>,
    },
}

/// One skipped row, with a reason fit for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// 1-based position of the row in the input.
    pub row: usize,

    /// Why the row was skipped.
    pub reason: String,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.reason)
    }
}
