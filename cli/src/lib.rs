// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for termcal.

mod cli;
mod cmd_columns;
mod cmd_convert;
mod cmd_generate_completion;
mod config;
mod ingest;
mod util;

pub use crate::cli::{Cli, Commands, run};
