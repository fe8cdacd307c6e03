// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use eventboard_core::APP_NAME;

use crate::cmd_board::CmdBoard;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;
use crate::logging;

/// Run the EventBoard command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    if let Err(e) = logging::init() {
        println!("{} {}", "Warning:".yellow(), e);
    }

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                tracing::error!(error = %e, "command failed");
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
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
            .about("Create, move, resize and delete events on a month/week/day board.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to board
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/eventboard/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/eventboard/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .args(CmdBoard::args())
            .subcommand(CmdBoard::command())
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
            Some((CmdBoard::NAME, matches)) => Board(CmdBoard::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            None => Board(CmdBoard::from(&matches)),
            _ => unreachable!(),
        };

        let config = matches
            .subcommand()
            .and_then(|(_, m)| m.get_one::<PathBuf>("config"))
            .or_else(|| matches.get_one::<PathBuf>("config"))
            .cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Open the board
    Board(CmdBoard),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::Board(a) => {
                tracing::debug!("parsing configuration...");
                let config = parse_config(config).await?;
                a.run(config)
            }
            Commands::GenerateCompletion(a) => a.run(),
        }
    }
}
