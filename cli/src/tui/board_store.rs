// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use eventboard_core::{Board, Config, DraftField, Event, EventId, Signal, WeekStart};

use crate::tui::dispatcher::{Action, CursorMove, Dispatcher};
use crate::util::{format_datetime, parse_datetime};

/// The board plus the state owned by the terminal front end.
#[derive(Debug)]
pub struct BoardStore {
    pub board: Board,

    /// Start of the slot under the cursor. In month view only the date counts.
    pub cursor: NaiveDateTime,

    /// Event of the cursor day picked with `Tab`, if any.
    pub focus: Option<EventId>,

    pub week_start: WeekStart,
    pub slot: TimeDelta,
    pub today: NaiveDate,

    /// Raw text of the start/end inputs of the creation dialog.
    pub start_text: String,
    pub end_text: String,

    /// Whether the user asked to leave the board
    pub quit: bool,
}

impl BoardStore {
    pub fn new(board: Board, config: &Config, now: NaiveDateTime, anchor: NaiveDate) -> Self {
        let slot = config.slot();
        Self {
            board,
            cursor: anchor.and_time(floor_to_slot(now.time(), slot)),
            focus: None,
            week_start: config.week_start,
            slot,
            today: now.date(),
            start_text: String::new(),
            end_text: String::new(),
            quit: false,
        }
    }

    /// The slot a selection at the cursor opens the creation dialog for.
    pub fn slot_start(&self) -> NaiveDateTime {
        match self.board.view().has_day_slots() {
            true => self.cursor.date().and_time(NaiveTime::MIN),
            false => self.cursor,
        }
    }

    /// The distance a drop or resize moves an event by.
    pub fn step(&self) -> TimeDelta {
        match self.board.view().has_day_slots() {
            true => TimeDelta::days(1),
            false => self.slot,
        }
    }

    pub fn visible_range(&self) -> (NaiveDate, NaiveDate) {
        self.board
            .view()
            .visible_range(self.cursor.date(), self.week_start)
    }

    /// Events intersecting the given day, in insertion order.
    pub fn events_on(&self, day: NaiveDate) -> Vec<&Event> {
        let from = day.and_time(NaiveTime::MIN);
        let to = day
            .checked_add_days(Days::new(1))
            .map(|d| d.and_time(NaiveTime::MIN))
            .unwrap_or(NaiveDateTime::MAX);
        self.board.store().overlapping(from, to).collect()
    }

    pub fn focused(&self) -> Option<&Event> {
        self.focus.and_then(|id| self.board.store().get(id))
    }

    /// The signal for the grid's `Enter`: the focused event, or else the cursor slot.
    pub fn select_signal(&self) -> Signal {
        match self.focused() {
            Some(event) => Signal::EventSelected(event.id()),
            None => Signal::SlotSelected {
                start: self.slot_start(),
            },
        }
    }

    /// Moves the focused event one step earlier or later, keeping its length.
    pub fn drop_signal(&self, forward: bool) -> Option<Signal> {
        let event = self.focused()?;
        let step = self.signed_step(forward);
        Some(Signal::EventDropped {
            id: event.id(),
            start: event.start().checked_add_signed(step)?,
            end: event.end().checked_add_signed(step)?,
        })
    }

    /// Moves the end of the focused event one step earlier or later.
    pub fn resize_signal(&self, grow: bool) -> Option<Signal> {
        let event = self.focused()?;
        Some(Signal::EventResized {
            id: event.id(),
            start: event.start(),
            end: event.end().checked_add_signed(self.signed_step(grow))?,
        })
    }

    fn signed_step(&self, forward: bool) -> TimeDelta {
        match forward {
            true => self.step(),
            false => -self.step(),
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::Board(signal) => {
                let mut that = that.borrow_mut();
                that.on_signal(signal.clone());
            }
            Action::UpdateStartText(v) => {
                let mut that = that.borrow_mut();
                that.start_text = v.clone();
                let start = parse_datetime(v).ok().flatten();
                that.board.dispatch(Signal::UpdateDraft(DraftField::Start(start)));
            }
            Action::UpdateEndText(v) => {
                let mut that = that.borrow_mut();
                that.end_text = v.clone();
                let end = parse_datetime(v).ok().flatten();
                that.board.dispatch(Signal::UpdateDraft(DraftField::End(end)));
            }
            Action::MoveCursor(v) => {
                let mut that = that.borrow_mut();
                that.move_cursor(*v);
            }
            Action::ShiftPeriod { forward } => {
                let mut that = that.borrow_mut();
                let date = that.board.view().shift(that.cursor.date(), *forward);
                that.cursor = date.and_time(that.cursor.time());
                that.focus = None;
            }
            Action::Today => {
                let mut that = that.borrow_mut();
                that.cursor = that.today.and_time(that.cursor.time());
                that.focus = None;
            }
            Action::CycleFocus => {
                let mut that = that.borrow_mut();
                that.cycle_focus();
            }
            Action::Quit => {
                let mut that = that.borrow_mut();
                that.quit = true;
            }
        }));
        dispatcher.register(callback);
    }

    fn on_signal(&mut self, signal: Signal) {
        let opens_draft = matches!(signal, Signal::SlotSelected { .. });
        self.board.dispatch(signal);

        if opens_draft && self.board.is_creating() {
            let draft = self.board.draft();
            self.start_text = draft.start.map(format_datetime).unwrap_or_default();
            self.end_text = draft.end.map(format_datetime).unwrap_or_default();
        }

        // deleted events cannot stay focused
        if self.focus.is_some() && self.focused().is_none() {
            self.focus = None;
        }
    }

    fn move_cursor(&mut self, direction: CursorMove) {
        let slotted = !self.board.view().has_day_slots();
        let delta = match (direction, slotted) {
            (CursorMove::Left, _) => TimeDelta::days(-1),
            (CursorMove::Right, _) => TimeDelta::days(1),
            (CursorMove::Up, false) => TimeDelta::days(-7),
            (CursorMove::Down, false) => TimeDelta::days(7),
            (CursorMove::Up, true) => -self.slot,
            (CursorMove::Down, true) => self.slot,
        };

        let Some(cursor) = self.cursor.checked_add_signed(delta) else {
            return;
        };
        // slot moves stay within the cursor day
        if slotted
            && matches!(direction, CursorMove::Up | CursorMove::Down)
            && cursor.date() != self.cursor.date()
        {
            return;
        }
        self.cursor = cursor;
        self.focus = None;
    }

    /// Steps the focus through the events of the cursor day, then back to none.
    fn cycle_focus(&mut self) {
        let ids: Vec<EventId> = self
            .events_on(self.cursor.date())
            .iter()
            .map(|e| e.id())
            .collect();

        let next = match self.focus.and_then(|id| ids.iter().position(|v| *v == id)) {
            Some(i) => ids.get(i + 1).copied(),
            None => ids.first().copied(),
        };
        self.focus = next;
    }
}

fn floor_to_slot(time: NaiveTime, slot: TimeDelta) -> NaiveTime {
    let slot = slot.num_seconds().max(1);
    let secs = i64::from(time.num_seconds_from_midnight());
    u32::try_from(secs - secs % slot)
        .ok()
        .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
        .unwrap_or(NaiveTime::MIN)
}
