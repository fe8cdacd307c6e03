// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use eventboard_core::Signal;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::board_store::BoardStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::Dialog;
use crate::tui::dispatcher::{Action, Dispatcher};

const MODAL_SIZE: (u16, u16) = (48, 7);

/// Blocking message shown after a rejected input.
pub struct NoticeModal(Dialog<BoardStore, NoticeBody>);

impl NoticeModal {
    pub fn new() -> Self {
        Self(Dialog::new("Notice", MODAL_SIZE, NoticeBody).instruction("Ok", "Enter"))
    }
}

impl Component<BoardStore> for NoticeModal {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.0.on_key(dispatcher, store, area, event)
    }
}

pub struct NoticeBody;

impl Component<BoardStore> for NoticeBody {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let text = match store.borrow().board.notice() {
            Some(notice) => notice.to_string(),
            None => return,
        };
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .centered()
            .render(pad(area), buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<BoardStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if matches!(event.code, KeyCode::Enter | KeyCode::Esc) {
            dispatcher.dispatch(Action::Board(Signal::DismissNotice));
        }
        Some(Message::Handled) // nothing passes a pending notice
    }
}

/// Yes/no question guarding a deletion.
pub struct ConfirmModal(Dialog<BoardStore, ConfirmBody>);

impl ConfirmModal {
    pub fn new() -> Self {
        Self(
            Dialog::new("Delete event", MODAL_SIZE, ConfirmBody)
                .instruction("Yes", "y")
                .instruction("No", "n"),
        )
    }
}

impl Component<BoardStore> for ConfirmModal {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.0.on_key(dispatcher, store, area, event)
    }
}

pub struct ConfirmBody;

impl Component<BoardStore> for ConfirmBody {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let text = match store.borrow().board.confirmation() {
            Some(confirmation) => confirmation.prompt().to_owned(),
            None => return,
        };
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .centered()
            .render(pad(area), buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<BoardStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let answer = match event.code {
            KeyCode::Char('y' | 'Y') => Some(true),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(false),
            _ => None,
        };
        if let Some(answer) = answer {
            dispatcher.dispatch(Action::Board(Signal::AnswerDelete(answer)));
        }
        Some(Message::Handled)
    }
}

fn pad(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}
