// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use termcal_core::{ConvertConfig, FieldMapping, FieldRole, convert};

use crate::config::{parse_config, role_names};
use crate::ingest;
use crate::util::suggested_file_name;

/// Convert a schedule export into an iCalendar file.
#[derive(Debug, Clone)]
pub struct CmdConvert {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub map: Vec<String>,
    pub calendar_name: Option<String>,
    pub timezone: Option<String>,
    pub title_template: Option<String>,
    pub sheet: Option<String>,
    pub delimiter: Option<char>,
}

impl CmdConvert {
    pub const NAME: &str = "convert";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert a schedule export into an iCalendar file")
            .arg(
                arg!(input: <FILE> "Path to the spreadsheet or delimited text file")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-o --output [FILE] "Where to write the .ics file")
                    .long_help(
                        "Where to write the .ics file. Defaults to a file name derived from \
the calendar name, in the current directory.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(--map [ROLE_COLUMN] "Assign a column to a field role (repeatable)")
                    .long_help(
                        "Assign a column to a field role, overriding the [mapping] table of \
the configuration file. Repeatable. Example: --map start-date='Start Date'",
                    )
                    .value_name("ROLE=COLUMN")
                    .action(clap::ArgAction::Append),
            )
            .arg(arg!(--"calendar-name" [NAME] "Calendar name embedded in the output"))
            .arg(arg!(--timezone [TZID] "Time zone hint embedded in the output"))
            .arg(arg!(--"title-template" [TEMPLATE] "Template for event titles"))
            .arg(arg!(--sheet [SHEET] "Worksheet to read, defaults to the first"))
            .arg(
                arg!(--delimiter [CHAR] "Field delimiter for delimited text files")
                    .value_parser(value_parser!(char)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let input = match matches.get_one::<PathBuf>("input") {
            Some(path) => path.clone(),
            _ => unreachable!(),
        };
        Self {
            input,
            output: matches.get_one::<PathBuf>("output").cloned(),
            map: matches
                .get_many::<String>("map")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            calendar_name: matches.get_one::<String>("calendar-name").cloned(),
            timezone: matches.get_one::<String>("timezone").cloned(),
            title_template: matches.get_one::<String>("title-template").cloned(),
            sheet: matches.get_one::<String>("sheet").cloned(),
            delimiter: matches.get_one::<char>("delimiter").copied(),
        }
    }

    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting schedule...");
        let file = parse_config(config)?;
        let (config, mapping) = self.merge(&file)?;

        let sheet = ingest::load(&self.input, self.sheet.as_deref(), self.delimiter)?;
        let output = convert(&sheet.records, &mapping, &config)?;

        let path = match self.output {
            Some(path) => path,
            None => PathBuf::from(format!(
                "{}.ics",
                suggested_file_name(&config.calendar_name)
            )),
        };
        let ics = output.calendar.to_ics()?;
        fs::write(&path, &ics)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

        if !output.failures.is_empty() {
            println!(
                "{} {} row(s) skipped:",
                "Warning:".yellow(),
                output.failures.len()
            );
            for failure in &output.failures {
                println!("  {failure}");
            }
        }
        println!(
            "{} {} event(s) written to {}",
            "Saved:".green(),
            output.calendar.events.len(),
            path.display()
        );
        Ok(())
    }

    /// Layer the command-line flags over the configuration file.
    fn merge(&self, file: &crate::config::ConfigFile) -> Result<(ConvertConfig, FieldMapping), Box<dyn Error>> {
        let mut config = file.calendar.clone();
        if let Some(name) = &self.calendar_name {
            config.calendar_name = name.clone();
        }
        if let Some(timezone) = &self.timezone {
            config.timezone = timezone.clone();
        }
        if let Some(template) = &self.title_template {
            config.title_template = template.clone();
        }

        let mut mapping = file.field_mapping()?;
        for entry in &self.map {
            let (role, column) = parse_map_entry(entry)?;
            mapping.set(role, column);
        }
        Ok((config, mapping))
    }
}

fn parse_map_entry(entry: &str) -> Result<(FieldRole, String), Box<dyn Error>> {
    let (role, column) = entry
        .split_once('=')
        .ok_or_else(|| format!("expected ROLE=COLUMN, got '{entry}'"))?;
    let role = FieldRole::from_str(role.trim()).map_err(|_| {
        format!(
            "unknown field role '{}', expected one of: {}",
            role.trim(),
            role_names()
        )
    })?;
    Ok((role, column.trim().to_string()))
}
