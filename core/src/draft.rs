// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

use crate::{Event, EventError};

/// Draft for an event, used by the creation dialog.
///
/// Every field can be edited independently; nothing is validated until
/// [`EventDraft::build`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// The title of the event.
    pub title: String,

    /// The start date and time of the event, if picked.
    pub start: Option<NaiveDateTime>,

    /// The end date and time of the event, if picked.
    pub end: Option<NaiveDateTime>,

    /// The description of the event, empty when not provided.
    pub description: String,
}

impl EventDraft {
    /// Creates a draft that starts and ends at the selected slot.
    pub fn at(start: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: Some(start),
            ..Default::default()
        }
    }

    /// Applies a single field edit to the draft.
    pub fn update(&mut self, field: DraftField) {
        match field {
            DraftField::Title(v) => self.title = v,
            DraftField::Start(v) => self.start = v,
            DraftField::End(v) => self.end = v,
            DraftField::Description(v) => self.description = v,
        }
    }

    /// Validates the draft and turns it into an event with a new id.
    pub fn build(&self) -> Result<Event, EventError> {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) if !self.title.is_empty() => (start, end),
            _ => return Err(EventError::Incomplete),
        };

        let description = match self.description.is_empty() {
            true => None,
            false => Some(self.description.clone()),
        };
        Event::new(self.title.clone(), start, end, description)
    }
}

/// A single edit to one field of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Start(Option<NaiveDateTime>),
    End(Option<NaiveDateTime>),
    Description(String),
}
