// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::EventError;

/// Stable identifier of an event, assigned once when the event is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(Uuid);

impl EventId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A titled, time-bounded item on the board.
///
/// An `Event` can only be built through [`Event::new`] or a validated
/// [`EventDraft`](crate::EventDraft), so its title is never empty and its end
/// never precedes its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    description: Option<String>,
}

impl Event {
    /// Creates a new event with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        description: Option<String>,
    ) -> Result<Self, EventError> {
        let title = title.into();
        if title.is_empty() {
            return Err(EventError::Incomplete);
        }
        check_span(start, end)?;

        Ok(Self {
            id: EventId::generate(),
            title,
            start,
            end,
            description: description.filter(|d| !d.is_empty()),
        })
    }

    /// The stable identifier of the event.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// The title of the event.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The start date and time of the event.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The end date and time of the event.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The description of the event, if available.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns a copy of the event moved to the given span.
    ///
    /// The copy keeps the id, title and description of the original.
    pub fn rescheduled(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, EventError> {
        check_span(start, end)?;
        Ok(Self {
            start,
            end,
            ..self.clone()
        })
    }

    /// Whether the event intersects the half-open window `[from, to)`.
    ///
    /// Zero-length events count when they sit inside the window.
    pub fn overlaps(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        if self.start == self.end {
            from <= self.start && self.start < to
        } else {
            self.start < to && from < self.end
        }
    }
}

fn check_span(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), EventError> {
    match end < start {
        true => Err(EventError::EndBeforeStart),
        false => Ok(()),
    }
}
