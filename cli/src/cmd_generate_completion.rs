// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::generate;

use crate::Cli;

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate a shell completion script")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "Shell to write a completion script for")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<Shell>("shell") {
            Some(shell) => Self { shell: *shell },
            _ => unreachable!(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "writing shell completion script...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    pub fn generate(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        let builtin = match self.shell {
            Shell::Bash => ClapShell::Bash,
            Shell::Elvish => ClapShell::Elvish,
            Shell::Fish => ClapShell::Fish,
            Shell::PowerShell => ClapShell::PowerShell,
            Shell::Zsh => ClapShell::Zsh,
            Shell::Nushell => {
                return generate(clap_complete_nushell::Nushell {}, &mut cmd, name, buf);
            }
        };
        generate(builtin, &mut cmd, name, buf);
    }
}

/// Shells a completion script can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_arg() {
        let cases = [
            ("bash", Shell::Bash),
            ("elvish", Shell::Elvish),
            ("fish", Shell::Fish),
            ("nushell", Shell::Nushell),
            ("powershell", Shell::PowerShell),
            ("zsh", Shell::Zsh),
        ];

        for (arg, expected) in cases {
            let matches = Cli::command()
                .try_get_matches_from(["termcal", CmdGenerateCompletion::NAME, arg])
                .unwrap_or_else(|e| panic!("failed to parse shell '{arg}': {e}"));
            let sub_matches = matches
                .subcommand_matches(CmdGenerateCompletion::NAME)
                .unwrap();
            assert_eq!(CmdGenerateCompletion::from(sub_matches).shell, expected);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_shell() {
        let result =
            Cli::command().try_get_matches_from(["termcal", CmdGenerateCompletion::NAME, "tcsh"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_writes_script() {
        let parsed = CmdGenerateCompletion { shell: Shell::Zsh };

        let mut output = vec![];
        parsed.generate(&mut output);

        let script = String::from_utf8(output).unwrap();
        assert!(script.contains("termcal"));
    }
}
