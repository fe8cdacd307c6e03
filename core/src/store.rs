// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

use crate::{Event, EventId};

/// Ordered, in-memory list of events.
///
/// Insertion order is preserved; lookups are linear scans by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the end of the list.
    pub fn add(&mut self, event: Event) {
        tracing::debug!(id = %event.id(), title = event.title(), "adding event");
        self.events.push(event);
    }

    /// Substitutes the event with the given id.
    ///
    /// Returns `false` and leaves the list untouched when no event matches.
    pub fn replace(&mut self, id: EventId, event: Event) -> bool {
        match self.events.iter_mut().find(|e| e.id() == id) {
            Some(slot) => {
                tracing::debug!(%id, "replacing event");
                *slot = event;
                true
            }
            None => {
                tracing::warn!(%id, "no event to replace");
                false
            }
        }
    }

    /// Removes the event with the given id.
    ///
    /// Returns `false` when no event matches.
    pub fn remove(&mut self, id: EventId) -> bool {
        let len = self.events.len();
        self.events.retain(|e| e.id() != id);
        let removed = self.events.len() != len;
        match removed {
            true => tracing::debug!(%id, "removed event"),
            false => tracing::warn!(%id, "no event to remove"),
        }
        removed
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events intersecting the half-open window `[from, to)`, in insertion order.
    pub fn overlapping(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |e| e.overlaps(from, to))
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
