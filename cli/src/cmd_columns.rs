// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};

use crate::ingest;
use crate::util::ArgOutputFormat;

/// List the header columns of a schedule export, to help write mappings.
#[derive(Debug, Clone)]
pub struct CmdColumns {
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub delimiter: Option<char>,
    pub output_format: ArgOutputFormat,
}

impl CmdColumns {
    pub const NAME: &str = "columns";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the column headers of a schedule export")
            .arg(
                arg!(input: <FILE> "Path to the spreadsheet or delimited text file")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg!(--sheet [SHEET] "Worksheet to read, defaults to the first"))
            .arg(
                arg!(--delimiter [CHAR] "Field delimiter for delimited text files")
                    .value_parser(value_parser!(char)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let input = match matches.get_one::<PathBuf>("input") {
            Some(path) => path.clone(),
            _ => unreachable!(),
        };
        Self {
            input,
            sheet: matches.get_one::<String>("sheet").cloned(),
            delimiter: matches.get_one::<char>("delimiter").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing columns...");
        let sheet = ingest::load(&self.input, self.sheet.as_deref(), self.delimiter)?;
        match self.output_format {
            ArgOutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&sheet.headers)?)
            }
            ArgOutputFormat::Table => {
                for header in &sheet.headers {
                    println!("{header}");
                }
            }
        }
        Ok(())
    }
}
