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

/// Read-only view of the selected event.
pub struct EventDetailsView(Dialog<BoardStore, DetailsBody>);

impl EventDetailsView {
    pub fn new() -> Self {
        Self(
            Dialog::new("Event", (60, 12), DetailsBody)
                .corner("⋮")
                .instruction("Edit", "e")
                .instruction("Delete", "d")
                .instruction("Email", "m")
                .instruction("Close", "Esc"),
        )
    }
}

impl Component<BoardStore> for EventDetailsView {
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

pub struct DetailsBody;

impl Component<BoardStore> for DetailsBody {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let Some(details) = store.board.details() else {
            return;
        };

        let mut lines = vec![
            Line::from(details.title.to_owned().bold()),
            Line::default(),
            Line::from(vec!["Start: ".gray(), details.start.into()]),
            Line::from(vec!["End:   ".gray(), details.end.into()]),
        ];
        if let Some(description) = details.description {
            lines.push(Line::default());
            lines.push(Line::from(description.to_owned()));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area.inner(Margin::new(1, 0)), buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<BoardStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let signal = match event.code {
            KeyCode::Char('e') => Signal::EditSelected,
            KeyCode::Char('d') => Signal::RequestDelete,
            KeyCode::Char('m') => Signal::EmailSelected,
            KeyCode::Esc => Signal::CloseDetails,
            _ => return Some(Message::Handled),
        };
        dispatcher.dispatch(Action::Board(signal));
        Some(Message::Handled)
    }
}
