// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use crate::CalendarView;

/// Errors raised when an event candidate cannot enter the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// The title is empty, or the start or end is missing.
    #[error("Please complete all fields.")]
    Incomplete,

    /// The end precedes the start.
    #[error("End time cannot be before start time.")]
    EndBeforeStart,
}

/// Errors raised while normalizing the board configuration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No calendar view is offered.
    #[error("At least one calendar view must be offered")]
    NoViews,

    /// The default view is not one of the offered views.
    #[error("Default view `{0}` is not one of the offered views")]
    DefaultViewNotOffered(CalendarView),

    /// The slot length does not evenly divide a day.
    #[error("Slot length must be a positive divisor of 1440 minutes, got {0}")]
    InvalidSlotMinutes(u32),
}
