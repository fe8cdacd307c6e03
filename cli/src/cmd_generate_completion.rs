// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};

use crate::Cli;

/// Prints a completion script for the `eventboard` command line.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a completion script for the given shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Shell to complete for").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let shell = matches
            .try_get_one::<Shell>("shell")?
            .copied()
            .ok_or("No shell given for completion")?;
        Ok(Self { shell })
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(shell = %self.shell, "writing completion script");
        self.shell.write_script(&mut io::stdout());
        Ok(())
    }
}

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

impl Shell {
    /// Writes the completion script of the board command line into `buf`.
    pub fn write_script(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as Builtin;
        match self {
            Shell::Bash => emit(Builtin::Bash, buf),
            Shell::Elvish => emit(Builtin::Elvish, buf),
            Shell::Fish => emit(Builtin::Fish, buf),
            Shell::PowerShell => emit(Builtin::PowerShell, buf),
            Shell::Zsh => emit(Builtin::Zsh, buf),
            Shell::Nushell => emit(clap_complete_nushell::Nushell {}, buf),
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

fn emit(generator: impl Generator, buf: &mut impl io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator, &mut cmd, name, buf);
}
