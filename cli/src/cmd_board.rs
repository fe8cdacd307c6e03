// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{Local, NaiveDate};
use clap::{Arg, ArgMatches, Command, arg, value_parser};
use eventboard_core::{Board, CalendarView, Config as CoreConfig};

use crate::config::Config;
use crate::tui::{BoardStore, run_board};
use crate::util::parse_date;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdBoard {
    pub view: Option<CalendarView>,
    pub date: Option<NaiveDate>,
}

impl CmdBoard {
    pub const NAME: &str = "board";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open the interactive board (default)")
            .args(Self::args())
    }

    pub fn args() -> Vec<Arg> {
        vec![
            arg!(--view <VIEW> "Calendar view to open with")
                .value_parser(value_parser!(CalendarView)),
            arg!(--date <DATE> "Date to open the board at, as YYYY-MM-DD")
                .value_parser(parse_date),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            view: matches.get_one("view").copied(),
            date: matches.get_one("date").copied(),
        }
    }

    pub fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening board...");
        let core = self.core_config(config.board)?;
        let now = Local::now().naive_local();
        let anchor = self.date.unwrap_or(now.date());

        let store = BoardStore::new(Board::new(&core), &core, now, anchor);
        let store = run_board(store)?;
        tracing::info!(events = store.board.events().len(), "board closed");
        Ok(())
    }

    /// Applies the command-line overrides on top of the configuration file.
    fn core_config(&self, mut core: CoreConfig) -> Result<CoreConfig, Box<dyn Error>> {
        if let Some(view) = self.view {
            if !core.views.contains(&view) {
                return Err(format!("View `{view}` is not offered by the configuration").into());
            }
            core.default_view = view;
        }
        Ok(core)
    }
}
