// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use termcal_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_columns::CmdColumns;
use crate::cmd_convert::CmdConvert;
use crate::cmd_generate_completion::CmdGenerateCompletion;

const TERMCAL_LOG_ENV: &str = "TERMCAL_LOG";

/// Run the termcal command-line interface.
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(TERMCAL_LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let result = match Cli::parse() {
        Ok(cli) => cli.run(),
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Turn class schedule spreadsheets into iCalendar files.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/termcal/config.toml on Linux and \
MacOS, %APPDATA%/termcal/config.toml on Windows.",
                    )
                    .global(true)
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdConvert::command())
            .subcommand(CmdColumns::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdConvert::NAME, matches)) => Convert(CmdConvert::from(matches)),
            Some((CmdColumns::NAME, matches)) => Columns(CmdColumns::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Convert a schedule export into an iCalendar file
    Convert(CmdConvert),

    /// List the column headers of a schedule export
    Columns(CmdColumns),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Convert(a) => a.run(config),
            Columns(a) => a.run(),
            GenerateCompletion(a) => a.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_generate_completion::Shell;
    use crate::util::ArgOutputFormat;

    #[test]
    fn test_parse_config() {
        let args = vec!["test", "-c", "/tmp/config.toml", "columns", "a.csv"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Columns(_)));
    }

    #[test]
    fn test_parse_config_after_subcommand() {
        let args = vec!["test", "convert", "a.csv", "-c", "/tmp/config.toml"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Convert(_)));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(vec!["test"]).is_err());
    }

    #[test]
    fn test_parse_convert() {
        let args = vec![
            "test",
            "convert",
            "schedule.xlsx",
            "-o",
            "out.ics",
            "--map",
            "start-date=Start Date",
            "--map",
            "days-pattern=Meeting Patterns",
            "--calendar-name",
            "Spring 2025",
            "--timezone",
            "America/New_York",
            "--title-template",
            "{Course}",
            "--sheet",
            "Enrollments",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Convert(cmd) => {
                assert_eq!(cmd.input, PathBuf::from("schedule.xlsx"));
                assert_eq!(cmd.output, Some(PathBuf::from("out.ics")));
                assert_eq!(
                    cmd.map,
                    vec!["start-date=Start Date", "days-pattern=Meeting Patterns"]
                );
                assert_eq!(cmd.calendar_name, Some("Spring 2025".to_string()));
                assert_eq!(cmd.timezone, Some("America/New_York".to_string()));
                assert_eq!(cmd.title_template, Some("{Course}".to_string()));
                assert_eq!(cmd.sheet, Some("Enrollments".to_string()));
                assert_eq!(cmd.delimiter, None);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_parse_convert_requires_input() {
        assert!(Cli::try_parse_from(vec!["test", "convert"]).is_err());
    }

    #[test]
    fn test_parse_columns() {
        let args = vec![
            "test", "columns", "a.csv", "--delimiter", ";", "--output-format", "json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Columns(cmd) => {
                assert_eq!(cmd.input, PathBuf::from("a.csv"));
                assert_eq!(cmd.delimiter, Some(';'));
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
            }
            _ => panic!("Expected Columns command"),
        }
    }

    #[test]
    fn test_parse_generate_completion() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
