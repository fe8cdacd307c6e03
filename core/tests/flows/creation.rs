// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Creation flow tests.

use eventboard_core::{Board, DraftField, EventDraft, EventError, Signal};

use crate::common::{assert_board_idle, assert_store_invariants, at, board_with, create_event, test_event};

#[test]
fn creating_standup_on_empty_board() {
    let t = at(14, 9, 0);
    let board = Board::default()
        .apply(Signal::SlotSelected { start: t })
        .apply(Signal::UpdateDraft(DraftField::Title("Standup".into())))
        .apply(Signal::SaveDraft);

    assert_eq!(board.events().len(), 1);
    let event = &board.events()[0];
    assert_eq!(event.title(), "Standup");
    assert_eq!(event.start(), t);
    assert_eq!(event.end(), t);
    assert_eq!(event.description(), None);
    assert_board_idle(&board);
}

#[test]
fn slot_selection_opens_draft_on_slot() {
    let t = at(14, 9, 30);
    let board = Board::default().apply(Signal::SlotSelected { start: t });
    assert!(board.is_creating());
    assert_eq!(board.draft(), &EventDraft::at(t));
}

#[test]
fn draft_edits_apply_independently() {
    let board = Board::default()
        .apply(Signal::SlotSelected { start: at(14, 9, 0) })
        .apply(Signal::UpdateDraft(DraftField::Description("Notes".into())))
        .apply(Signal::UpdateDraft(DraftField::Start(Some(at(14, 10, 0)))));

    // The end still sits on the slot and is now before the start: no validation yet.
    let draft = board.draft();
    assert_eq!(draft.start, Some(at(14, 10, 0)));
    assert_eq!(draft.end, Some(at(14, 9, 0)));
    assert_eq!(draft.description, "Notes");
    assert!(draft.title.is_empty());
    assert_eq!(board.notice(), None);
}

#[test]
fn empty_title_is_rejected() {
    let existing = test_event("Existing", at(13, 9, 0), at(13, 10, 0));
    let board = board_with(&[existing])
        .apply(Signal::SlotSelected { start: at(14, 9, 0) })
        .apply(Signal::SaveDraft);

    assert_eq!(board.events().len(), 1);
    assert!(board.is_creating());
    let notice = board.notice().expect("a notice");
    assert_eq!(notice.error(), EventError::Incomplete);
    assert_eq!(notice.to_string(), "Please complete all fields.");
}

#[test]
fn whitespace_title_is_saved() {
    let board = Board::default()
        .apply(Signal::SlotSelected { start: at(14, 9, 0) })
        .apply(Signal::UpdateDraft(DraftField::Title(" ".into())))
        .apply(Signal::SaveDraft);

    assert_eq!(board.notice(), None);
    assert!(!board.is_creating());
    assert_eq!(board.events().len(), 1);
    assert_eq!(board.events()[0].title(), " ");
    assert_store_invariants(&board);
}

#[test]
fn cleared_start_is_rejected() {
    let board = Board::default()
        .apply(Signal::SlotSelected { start: at(14, 9, 0) })
        .apply(Signal::UpdateDraft(DraftField::Title("Standup".into())))
        .apply(Signal::UpdateDraft(DraftField::Start(None)))
        .apply(Signal::SaveDraft);

    assert!(board.events().is_empty());
    assert_eq!(board.notice().map(|n| n.error()), Some(EventError::Incomplete));
}

#[test]
fn inverted_span_is_rejected() {
    let board = create_event(Board::default(), "Standup", at(14, 9, 0), at(14, 8, 0));

    assert!(board.events().is_empty());
    assert!(board.is_creating());
    let notice = board.notice().expect("a notice");
    assert_eq!(notice.error(), EventError::EndBeforeStart);
    assert_eq!(notice.to_string(), "End time cannot be before start time.");
}

#[test]
fn correcting_a_rejected_draft_saves_it() {
    let board = create_event(Board::default(), "Standup", at(14, 9, 0), at(14, 8, 0))
        .apply(Signal::DismissNotice)
        .apply(Signal::UpdateDraft(DraftField::End(Some(at(14, 9, 15)))))
        .apply(Signal::SaveDraft);

    assert_eq!(board.events().len(), 1);
    assert_eq!(board.events()[0].end(), at(14, 9, 15));
    assert_board_idle(&board);
}

#[test]
fn duplicate_content_creates_distinct_events() {
    let board = create_event(Board::default(), "Standup", at(14, 9, 0), at(14, 9, 15));
    let board = create_event(board, "Standup", at(14, 9, 0), at(14, 9, 15));

    let events = board.events();
    assert_eq!(events.len(), 2);
    assert_ne!(events[0].id(), events[1].id());
    assert_store_invariants(&board);
}

#[test]
fn events_keep_insertion_order() {
    let board = create_event(Board::default(), "Later", at(20, 9, 0), at(20, 10, 0));
    let board = create_event(board, "Earlier", at(2, 9, 0), at(2, 10, 0));

    let titles: Vec<_> = board.events().iter().map(|e| e.title()).collect();
    assert_eq!(titles, ["Later", "Earlier"]);
}

#[test]
fn description_is_kept() {
    let board = Board::default()
        .apply(Signal::SlotSelected { start: at(14, 9, 0) })
        .apply(Signal::UpdateDraft(DraftField::Title("Review".into())))
        .apply(Signal::UpdateDraft(DraftField::Description("PR #12".into())))
        .apply(Signal::SaveDraft);

    assert_eq!(board.events()[0].description(), Some("PR #12"));
}
