// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Detail view and delete flow tests.

use eventboard_core::Signal;

use crate::common::{assert_board_idle, at, board_with, test_event};

#[test]
fn selecting_opens_details() {
    let e = test_event("Review", at(14, 15, 5), at(14, 16, 0));
    let board = board_with(&[e.clone()]).apply(Signal::EventSelected(e.id()));

    assert!(board.is_viewing());
    assert_eq!(board.selected(), Some(&e));
    let details = board.details().expect("details");
    assert_eq!(details.title, "Review");
    assert_eq!(details.start, "October 14th 2026, 3:05 pm");
    assert_eq!(details.end, "October 14th 2026, 4:00 pm");
    assert_eq!(details.description, None);
}

#[test]
fn confirming_delete_empties_the_board() {
    let e = test_event("Review", at(14, 9, 0), at(14, 10, 0));
    let board = board_with(&[e.clone()])
        .apply(Signal::EventSelected(e.id()))
        .apply(Signal::RequestDelete);

    let prompt = board.confirmation().expect("a confirmation").prompt();
    assert_eq!(prompt, "Would you like to delete this event: Review?");

    let board = board.apply(Signal::AnswerDelete(true));
    assert!(board.events().is_empty());
    assert_board_idle(&board);
}

#[test]
fn declining_delete_keeps_everything() {
    let e = test_event("Review", at(14, 9, 0), at(14, 10, 0));
    let board = board_with(&[e.clone()])
        .apply(Signal::EventSelected(e.id()))
        .apply(Signal::RequestDelete)
        .apply(Signal::AnswerDelete(false));

    assert_eq!(board.events(), [e.clone()]);
    assert!(board.is_viewing());
    assert_eq!(board.selected(), Some(&e));
    assert_eq!(board.confirmation(), None);

    let board = board.apply(Signal::CloseDetails);
    assert_board_idle(&board);
    assert_eq!(board.events(), [e]);
}

#[test]
fn delete_removes_only_the_confirmed_twin() {
    let a = test_event("Standup", at(14, 9, 0), at(14, 9, 15));
    let b = test_event("Standup", at(14, 9, 0), at(14, 9, 15));
    let board = board_with(&[a.clone(), b.clone()])
        .apply(Signal::EventSelected(b.id()))
        .apply(Signal::RequestDelete)
        .apply(Signal::AnswerDelete(true));

    assert_eq!(board.events(), [a]);
}

#[test]
fn confirmation_blocks_other_signals() {
    let e = test_event("Review", at(14, 9, 0), at(14, 10, 0));
    let board = board_with(&[e.clone()])
        .apply(Signal::EventSelected(e.id()))
        .apply(Signal::RequestDelete);
    let after = board
        .clone()
        .apply(Signal::CloseDetails)
        .apply(Signal::RequestDelete);
    assert_eq!(after, board);
}

#[test]
fn closing_details_clears_selection() {
    let e = test_event("Review", at(14, 9, 0), at(14, 10, 0));
    let board = board_with(&[e.clone()])
        .apply(Signal::EventSelected(e.id()))
        .apply(Signal::CloseDetails);

    assert!(!board.is_viewing());
    assert_eq!(board.selected(), None);
    assert_eq!(board.details(), None);
}

#[test]
fn delete_requires_open_details() {
    let e = test_event("Review", at(14, 9, 0), at(14, 10, 0));
    let board = board_with(&[e.clone()])
        .apply(Signal::RequestDelete)
        .apply(Signal::AnswerDelete(true));
    assert_eq!(board.events(), [e]);
    assert_eq!(board.confirmation(), None);
}
