// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod board_store;
mod calendar_grid;
mod component;
mod component_form;
mod component_modal;
mod component_page;
mod dispatcher;
mod event_details;
mod event_form;

pub use app::run_board;
pub use board_store::BoardStore;
