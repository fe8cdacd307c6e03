// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

use chrono::NaiveDateTime;

use crate::{
    CalendarView, Config, DraftField, Event, EventDetails, EventDraft, EventError, EventId,
    EventStore,
};

/// Inbound notification from the interaction layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// An empty slot of the grid was picked.
    SlotSelected { start: NaiveDateTime },

    /// A field of the creation draft was edited.
    UpdateDraft(DraftField),

    /// The creation dialog asked to save the draft.
    SaveDraft,

    /// The creation dialog was dismissed.
    CancelDraft,

    /// An event on the grid was picked.
    EventSelected(EventId),

    /// An event was dragged to a new span.
    EventDropped {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// An event was stretched or shrunk to a new span.
    EventResized {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// The detail view was closed.
    CloseDetails,

    /// The edit control of the detail view was used.
    EditSelected,

    /// The email control of the detail view was used.
    EmailSelected,

    /// The delete control of the detail view was used.
    RequestDelete,

    /// The answer to the pending delete confirmation.
    AnswerDelete(bool),

    /// The pending notice was acknowledged.
    DismissNotice,

    /// Another calendar granularity was picked.
    ChangeView(CalendarView),
}

/// Blocking, dismiss-only message raised by a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice(EventError);

impl Notice {
    pub fn error(&self) -> EventError {
        self.0
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pending yes/no question guarding the deletion of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    id: EventId,
    prompt: String,
}

impl Confirmation {
    fn delete(event: &Event) -> Self {
        Self {
            id: event.id(),
            prompt: format!("Would you like to delete this event: {}?", event.title()),
        }
    }

    /// The event that will be deleted on a positive answer.
    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// The whole state of the board: events, draft, selection and dialogs.
///
/// Transitions happen only through [`Board::apply`] (or its in-place form
/// [`Board::dispatch`]). Signals that the current state does not accept are
/// ignored:
///
/// - a pending notice accepts only [`Signal::DismissNotice`];
/// - a pending confirmation accepts only [`Signal::AnswerDelete`];
/// - the open creation dialog accepts only draft edits, save and cancel;
/// - the open detail view accepts only close, edit, email and delete;
/// - otherwise only the grid signals are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    store: EventStore,
    draft: EventDraft,
    selected: Option<EventId>,
    creating: bool,
    viewing: bool,
    notice: Option<Notice>,
    confirmation: Option<Confirmation>,
    view: CalendarView,
    views: Vec<CalendarView>,
}

impl Board {
    /// Creates an empty board from a normalized configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            store: EventStore::new(),
            draft: EventDraft::default(),
            selected: None,
            creating: false,
            viewing: false,
            notice: None,
            confirmation: None,
            view: config.default_view,
            views: config.views.clone(),
        }
    }

    /// Seeds the board with already validated events.
    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        for event in events {
            self.store.add(event);
        }
        self
    }

    /// Applies a signal, returning the next state.
    #[must_use]
    pub fn apply(mut self, signal: Signal) -> Self {
        self.dispatch(signal);
        self
    }

    /// Applies a signal in place.
    pub fn dispatch(&mut self, signal: Signal) {
        if self.notice.is_some() {
            self.on_notice(signal);
        } else if self.confirmation.is_some() {
            self.on_confirmation(signal);
        } else if self.creating {
            self.on_creation(signal);
        } else if self.viewing {
            self.on_details(signal);
        } else {
            self.on_grid(signal);
        }
    }

    fn on_notice(&mut self, signal: Signal) {
        match signal {
            Signal::DismissNotice => {
                tracing::debug!("dismissing notice");
                self.notice = None;
            }
            other => ignored("notice pending", &other),
        }
    }

    fn on_confirmation(&mut self, signal: Signal) {
        match signal {
            Signal::AnswerDelete(answer) => {
                let Some(confirmation) = self.confirmation.take() else {
                    return;
                };
                tracing::debug!(id = %confirmation.id, answer, "answering delete confirmation");
                if answer {
                    self.store.remove(confirmation.id);
                    self.close_details();
                }
            }
            other => ignored("confirmation pending", &other),
        }
    }

    fn on_creation(&mut self, signal: Signal) {
        match signal {
            Signal::UpdateDraft(field) => self.draft.update(field),
            Signal::SaveDraft => match self.draft.build() {
                Ok(event) => {
                    tracing::debug!(id = %event.id(), "saving draft");
                    self.store.add(event);
                    self.creating = false;
                    self.draft = EventDraft::default();
                }
                Err(e) => {
                    tracing::debug!(error = %e, "rejecting draft");
                    self.notice = Some(Notice(e));
                }
            },
            Signal::CancelDraft => {
                tracing::debug!("cancelling draft");
                self.creating = false;
                self.draft = EventDraft::default();
            }
            other => ignored("creation dialog open", &other),
        }
    }

    fn on_details(&mut self, signal: Signal) {
        match signal {
            Signal::CloseDetails => self.close_details(),
            stub @ (Signal::EditSelected | Signal::EmailSelected) => {
                tracing::debug!(signal = ?stub, "action not available");
            }
            Signal::RequestDelete => {
                let Some(event) = self.selected() else {
                    tracing::warn!("delete requested without a selected event");
                    return;
                };
                self.confirmation = Some(Confirmation::delete(event));
            }
            other => ignored("detail view open", &other),
        }
    }

    fn on_grid(&mut self, signal: Signal) {
        match signal {
            Signal::SlotSelected { start } => {
                tracing::debug!(%start, "opening creation dialog");
                self.draft = EventDraft::at(start);
                self.creating = true;
            }
            Signal::EventSelected(id) => {
                if self.store.get(id).is_none() {
                    tracing::warn!(%id, "selected event is not on the board");
                    return;
                }
                tracing::debug!(%id, "opening detail view");
                self.selected = Some(id);
                self.viewing = true;
            }
            Signal::EventDropped { id, start, end } | Signal::EventResized { id, start, end } => {
                self.reschedule(id, start, end);
            }
            Signal::ChangeView(view) => {
                if self.views.contains(&view) {
                    tracing::debug!(%view, "changing view");
                    self.view = view;
                } else {
                    tracing::warn!(%view, "view is not offered");
                }
            }
            other => ignored("no dialog open", &other),
        }
    }

    fn reschedule(&mut self, id: EventId, start: NaiveDateTime, end: NaiveDateTime) {
        let Some(event) = self.store.get(id) else {
            tracing::warn!(%id, "no event to reschedule");
            return;
        };
        match event.rescheduled(start, end) {
            Ok(event) => {
                self.store.replace(id, event);
            }
            Err(e) => {
                tracing::debug!(%id, error = %e, "rejecting reschedule");
                self.notice = Some(Notice(e));
            }
        }
    }

    fn close_details(&mut self) {
        self.viewing = false;
        self.selected = None;
        self.confirmation = None;
    }

    /// The events on the board, in insertion order.
    pub fn events(&self) -> &[Event] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// The draft edited by the creation dialog.
    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    /// The event shown by the detail view, if any.
    pub fn selected(&self) -> Option<&Event> {
        self.selected.and_then(|id| self.store.get(id))
    }

    /// Details for the detail view, present only while it is open.
    pub fn details(&self) -> Option<EventDetails<'_>> {
        match self.viewing {
            true => self.selected().map(EventDetails::from),
            false => None,
        }
    }

    /// Whether the creation dialog is open.
    pub fn is_creating(&self) -> bool {
        self.creating
    }

    /// Whether the detail view is open.
    pub fn is_viewing(&self) -> bool {
        self.viewing
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// The active calendar view.
    pub fn view(&self) -> CalendarView {
        self.view
    }

    /// The offered calendar views.
    pub fn views(&self) -> &[CalendarView] {
        &self.views
    }

    /// The offered view following the active one, wrapping around.
    pub fn next_view(&self) -> CalendarView {
        let index = self.views.iter().position(|v| *v == self.view).unwrap_or(0);
        self.views
            .get((index + 1) % self.views.len().max(1))
            .copied()
            .unwrap_or(self.view)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

fn ignored(reason: &str, signal: &Signal) {
    tracing::warn!(reason, ?signal, "ignoring signal");
}
