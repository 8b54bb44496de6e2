// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Derive a file name stem from a calendar name.
///
/// Runs of non-alphanumeric characters collapse to a single `-`, the
/// result is lowercased, and leading/trailing `-` are dropped. An
/// empty result falls back to `"calendar"`.
pub fn suggested_file_name(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !stem.is_empty() {
                stem.push('-');
            }
            pending_dash = false;
            stem.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if stem.is_empty() {
        "calendar".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_file_name_lowercases_and_dashes() {
        assert_eq!(suggested_file_name("Workday Schedule"), "workday-schedule");
    }

    #[test]
    fn test_suggested_file_name_collapses_runs() {
        assert_eq!(
            suggested_file_name("Spring 2025 -- Draft!"),
            "spring-2025-draft"
        );
    }

    #[test]
    fn test_suggested_file_name_trims_edges() {
        assert_eq!(suggested_file_name("  (CS 101)  "), "cs-101");
    }

    #[test]
    fn test_suggested_file_name_keeps_unicode_letters() {
        assert_eq!(suggested_file_name("Émilie's Schedule"), "émilie-s-schedule");
    }

    #[test]
    fn test_suggested_file_name_falls_back_when_empty() {
        assert_eq!(suggested_file_name(""), "calendar");
        assert_eq!(suggested_file_name("!!!"), "calendar");
    }

    #[test]
    fn test_output_format_defaults_to_table() {
        let cmd = clap::Command::new("test").arg(ArgOutputFormat::arg());
        let matches = cmd.try_get_matches_from(["test"]).unwrap();
        assert_eq!(ArgOutputFormat::from(&matches), ArgOutputFormat::Table);
    }

    #[test]
    fn test_output_format_parses_json() {
        let cmd = clap::Command::new("test").arg(ArgOutputFormat::arg());
        let matches = cmd
            .try_get_matches_from(["test", "--output-format", "json"])
            .unwrap();
        assert_eq!(ArgOutputFormat::from(&matches), ArgOutputFormat::Json);
    }
}
