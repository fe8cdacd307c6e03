// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Inputs that cannot come from a well-behaved interaction layer are logged as warnings.

use eventboard_core::{EventId, EventStore, Signal};

use crate::common::{at, board_with, capture_warnings, test_event};

#[test]
fn store_misses_are_warned() {
    let mut store = EventStore::new();
    store.add(test_event("Standup", at(14, 9, 0), at(14, 10, 0)));
    let missing = EventId::generate();

    let ((replaced, removed), logs) = capture_warnings(|| {
        let replaced = store.replace(missing, test_event("Other", at(14, 9, 0), at(14, 10, 0)));
        (replaced, store.remove(missing))
    });

    assert!(!replaced && !removed);
    assert_eq!(store.len(), 1);
    assert!(logs.contains("no event to replace"), "{logs}");
    assert!(logs.contains("no event to remove"), "{logs}");
}

#[test]
fn successful_removal_is_not_warned() {
    let e = test_event("Standup", at(14, 9, 0), at(14, 10, 0));
    let mut store = EventStore::new();
    store.add(e.clone());

    let (removed, logs) = capture_warnings(|| store.remove(e.id()));
    assert!(removed);
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn ignored_signal_is_warned() {
    let e = test_event("Standup", at(14, 9, 0), at(14, 10, 0));
    let board = board_with(&[e.clone()]).apply(Signal::SlotSelected { start: at(14, 11, 0) });

    let (after, logs) = capture_warnings(|| board.clone().apply(Signal::EventSelected(e.id())));
    assert_eq!(after, board);
    assert!(logs.contains("ignoring signal"), "{logs}");
}

#[test]
fn rescheduling_unknown_event_is_warned() {
    let board = board_with(&[test_event("Standup", at(14, 9, 0), at(14, 10, 0))]);

    let (after, logs) = capture_warnings(|| {
        board.clone().apply(Signal::EventDropped {
            id: EventId::generate(),
            start: at(15, 9, 0),
            end: at(15, 10, 0),
        })
    });
    assert_eq!(after, board);
    assert!(logs.contains("no event to reschedule"), "{logs}");
}
