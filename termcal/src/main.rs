// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! termcal, a schedule-spreadsheet to iCalendar converter.

use std::process::ExitCode;

use termcal_cli::run;

fn main() -> ExitCode {
    run()
}
