// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_board;
mod cmd_generate_completion;
mod config;
mod logging;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
