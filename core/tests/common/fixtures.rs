// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::{NaiveDate, NaiveDateTime};
use eventboard_core::{Board, DraftField, Event, Signal};

/// Creates a timestamp on 2026-10-`day` at `hour`:`minute`.
#[must_use]
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid test timestamp")
}

/// Creates a validated event with a fresh id.
#[must_use]
pub fn test_event(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
    Event::new(title, start, end, None).expect("valid test event")
}

/// Creates a default board holding the given events.
#[must_use]
pub fn board_with(events: &[Event]) -> Board {
    Board::default().with_events(events.iter().cloned())
}

/// Drives the creation flow end to end: select a slot, fill the fields, save.
#[must_use]
pub fn create_event(
    board: Board,
    title: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Board {
    board
        .apply(Signal::SlotSelected { start })
        .apply(Signal::UpdateDraft(DraftField::Title(title.to_owned())))
        .apply(Signal::UpdateDraft(DraftField::End(Some(end))))
        .apply(Signal::SaveDraft)
}
