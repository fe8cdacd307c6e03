// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

//! EventBoard core: the event model, the in-memory store and the board state
//! machine driven by signals from an interaction layer.

mod board;
mod config;
mod draft;
mod error;
mod event;
mod format;
mod store;
mod view;

pub use crate::board::{Board, Confirmation, Notice, Signal};
pub use crate::config::{APP_NAME, Config};
pub use crate::draft::{DraftField, EventDraft};
pub use crate::error::{ConfigError, EventError};
pub use crate::event::{Event, EventId};
pub use crate::format::{EventDetails, format_long};
pub use crate::store::EventStore;
pub use crate::view::{CalendarView, WeekStart};
