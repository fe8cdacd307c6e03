// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use eventboard_core::{Board, EventDraft};

/// Asserts that every stored event has a non-empty title and a forward span.
///
/// # Panics
///
/// Panics naming the first event that breaks an invariant.
pub fn assert_store_invariants(board: &Board) {
    for event in board.events() {
        assert!(
            !event.title().is_empty(),
            "Event {} has an empty title",
            event.id()
        );
        assert!(
            event.end() >= event.start(),
            "Event {} ends before it starts",
            event.id()
        );
    }
}

/// Asserts that no dialog, notice or confirmation is pending.
///
/// # Panics
///
/// Panics if any transient UI state is left over.
pub fn assert_board_idle(board: &Board) {
    assert!(!board.is_creating(), "Creation dialog still open");
    assert!(!board.is_viewing(), "Detail view still open");
    assert!(board.notice().is_none(), "Notice still pending");
    assert!(board.confirmation().is_none(), "Confirmation still pending");
    assert!(board.selected().is_none(), "Event still selected");
    assert_eq!(board.draft(), &EventDraft::default(), "Draft not reset");
}
