// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Move/resize flow tests.

use chrono::TimeDelta;
use eventboard_core::{EventError, EventId, Signal};

use crate::common::{assert_store_invariants, at, board_with, test_event};

#[test]
fn dropping_an_event_moves_it() {
    let e = test_event("Review", at(14, 9, 0), at(14, 10, 0));
    let t2 = at(15, 13, 0);
    let board = board_with(&[e.clone()]).apply(Signal::EventDropped {
        id: e.id(),
        start: t2,
        end: t2 + TimeDelta::hours(1),
    });

    assert_eq!(board.events().len(), 1);
    let moved = &board.events()[0];
    assert_eq!(moved.id(), e.id());
    assert_eq!(moved.title(), e.title());
    assert_eq!(moved.description(), e.description());
    assert_eq!(moved.start(), t2);
    assert_eq!(moved.end(), t2 + TimeDelta::hours(1));
}

#[test]
fn resizing_touches_only_the_target() {
    let a = test_event("Standup", at(14, 9, 0), at(14, 9, 15));
    let b = test_event("Standup", at(14, 9, 0), at(14, 9, 15));
    let c = test_event("Lunch", at(14, 12, 0), at(14, 13, 0));
    let board = board_with(&[a.clone(), b.clone(), c.clone()]).apply(Signal::EventResized {
        id: b.id(),
        start: b.start(),
        end: at(14, 9, 45),
    });

    let events = board.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], a);
    assert_eq!(events[1].id(), b.id());
    assert_eq!(events[1].end(), at(14, 9, 45));
    assert_eq!(events[2], c);
}

#[test]
fn unknown_event_is_a_noop() {
    let e = test_event("Review", at(14, 9, 0), at(14, 10, 0));
    let board = board_with(&[e.clone()]);
    let after = board.clone().apply(Signal::EventDropped {
        id: EventId::generate(),
        start: at(15, 9, 0),
        end: at(15, 10, 0),
    });
    assert_eq!(after, board);
}

#[test]
fn inverted_resize_is_rejected() {
    let e = test_event("Review", at(14, 9, 0), at(14, 10, 0));
    let board = board_with(&[e.clone()]).apply(Signal::EventResized {
        id: e.id(),
        start: at(14, 9, 0),
        end: at(14, 8, 0),
    });

    assert_eq!(board.events(), [e]);
    assert_eq!(board.notice().map(|n| n.error()), Some(EventError::EndBeforeStart));
    assert_store_invariants(&board);

    let board = board.apply(Signal::DismissNotice);
    assert_eq!(board.notice(), None);
}

#[test]
fn drop_is_ignored_while_details_are_open() {
    let e = test_event("Review", at(14, 9, 0), at(14, 10, 0));
    let board = board_with(&[e.clone()]).apply(Signal::EventSelected(e.id()));
    let after = board.clone().apply(Signal::EventDropped {
        id: e.id(),
        start: at(15, 9, 0),
        end: at(15, 10, 0),
    });
    assert_eq!(after, board);
}
