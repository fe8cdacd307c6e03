// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use eventboard_core::{DraftField, Signal};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;

use crate::tui::board_store::BoardStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, Input};
use crate::tui::component_page::Dialog;
use crate::tui::dispatcher::{Action, Dispatcher};

/// The creation dialog, editing the draft of the board.
pub struct EventForm(Dialog<BoardStore, Form<BoardStore>>);

impl EventForm {
    pub fn new() -> Self {
        let form = Form::new(vec![
            Box::new(Input::<BoardStore, TitleAccess>::new("Title")),
            Box::new(Input::<BoardStore, StartAccess>::new("Start (YYYY-MM-DD HH:MM)")),
            Box::new(Input::<BoardStore, EndAccess>::new("End (YYYY-MM-DD HH:MM)")),
            Box::new(Input::<BoardStore, DescriptionAccess>::new("Description")),
        ]);
        Self(
            Dialog::new("New Event", (56, 16), form)
                .instruction("Next", "Tab")
                .instruction("Save", "Enter")
                .instruction("Cancel", "Esc"),
        )
    }
}

impl Component<BoardStore> for EventForm {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<BoardStore>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if let Some(msg) = self.0.on_key(dispatcher, store, area, event) {
            return Some(msg);
        }

        match event.code {
            KeyCode::Enter => {
                dispatcher.dispatch(Action::Board(Signal::SaveDraft));
                Some(Message::Handled)
            }
            KeyCode::Esc => {
                dispatcher.dispatch(Action::Board(Signal::CancelDraft));
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        self.0.deactivate(dispatcher, store);
    }
}

struct TitleAccess;

impl Access<BoardStore, String> for TitleAccess {
    fn get(store: &RefCell<BoardStore>) -> String {
        store.borrow().board.draft().title.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::Board(Signal::UpdateDraft(DraftField::Title(value))));
        true
    }
}

struct DescriptionAccess;

impl Access<BoardStore, String> for DescriptionAccess {
    fn get(store: &RefCell<BoardStore>) -> String {
        store.borrow().board.draft().description.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::Board(Signal::UpdateDraft(
            DraftField::Description(value),
        )));
        true
    }
}

struct StartAccess;

impl Access<BoardStore, String> for StartAccess {
    fn get(store: &RefCell<BoardStore>) -> String {
        store.borrow().start_text.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::UpdateStartText(value));
        true
    }
}

struct EndAccess;

impl Access<BoardStore, String> for EndAccess {
    fn get(store: &RefCell<BoardStore>) -> String {
        store.borrow().end_text.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::UpdateEndText(value));
        true
    }
}
