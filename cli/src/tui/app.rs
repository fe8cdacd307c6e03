// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use crate::tui::board_store::BoardStore;
use crate::tui::calendar_grid::CalendarGrid;
use crate::tui::component::{Component, Message};
use crate::tui::component_modal::{ConfirmModal, NoticeModal};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_details::EventDetailsView;
use crate::tui::event_form::EventForm;

/// Runs the interactive board until the user quits, returning the final state.
pub fn run_board(store: BoardStore) -> Result<BoardStore, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        BoardStore::register_to(store.clone(), &mut dispatcher);
        let mut app = App::new();

        loop {
            if let Err(e) = app.draw(&mut dispatcher, &store, &mut terminal) {
                break Err(e);
            }

            match app.read_event(&mut dispatcher, &store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) if store.borrow().quit => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store)
}

/// The board screen: the grid with the dialogs layered on top of it.
struct App {
    grid: CalendarGrid,
    form: Option<EventForm>,
    details: EventDetailsView,
    notice: NoticeModal,
    confirm: ConfirmModal,
    area: Rect,
}

impl App {
    fn new() -> Self {
        Self {
            grid: CalendarGrid,
            form: None,
            details: EventDetailsView::new(),
            notice: NoticeModal::new(),
            confirm: ConfirmModal::new(),
            area: Rect::default(),
        }
    }

    fn draw(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        self.sync(dispatcher, store);
        terminal.draw(|frame| {
            let area = frame.area();
            self.area = area;
            let cursor = self.cursor_position(store, area);
            self.render(store, area, frame.buffer_mut());
            if let Some((x, y)) = cursor {
                frame.set_cursor_position(Position::new(x, y));
            }
        })?;
        Ok(())
    }

    fn read_event(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.on_key(dispatcher, store, key))
            }
            _ => Ok(None),
        }
    }

    /// Opens a fresh creation form whenever the board starts a draft, and drops it afterwards.
    fn sync(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        let creating = store.borrow().board.is_creating();
        match (creating, self.form.take()) {
            (true, None) => {
                let mut form = EventForm::new();
                form.activate(dispatcher, store);
                self.form = Some(form);
            }
            (false, Some(mut form)) => form.deactivate(dispatcher, store),
            (_, form) => self.form = form,
        }
    }

    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        self.grid.render(store, area, buf);

        let layers = Layers::of(store);
        if layers.creating
            && let Some(form) = &self.form
        {
            form.render(store, area, buf);
        }
        if layers.viewing {
            self.details.render(store, area, buf);
        }
        if layers.confirmation {
            self.confirm.render(store, area, buf);
        }
        if layers.notice {
            self.notice.render(store, area, buf);
        }
    }

    fn cursor_position(&self, store: &RefCell<BoardStore>, area: Rect) -> Option<(u16, u16)> {
        let layers = Layers::of(store);
        match layers.creating && !layers.notice {
            true => self.form.as_ref()?.get_cursor_position(store, area),
            false => None,
        }
    }

    /// Routes a key to the topmost dialog, or to the grid when none is open.
    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            dispatcher.dispatch(Action::Quit);
            return Some(Message::Exit);
        }

        let area = self.area;
        let layers = Layers::of(store);
        let msg = if layers.notice {
            self.notice.on_key(dispatcher, store, area, event)
        } else if layers.confirmation {
            self.confirm.on_key(dispatcher, store, area, event)
        } else if layers.creating {
            self.form
                .as_mut()
                .and_then(|form| form.on_key(dispatcher, store, area, event))
        } else if layers.viewing {
            self.details.on_key(dispatcher, store, area, event)
        } else {
            self.grid.on_key(dispatcher, store, area, event)
        };

        self.sync(dispatcher, store);
        msg
    }
}

/// Which dialogs the board currently shows.
#[derive(Debug, Clone, Copy)]
struct Layers {
    notice: bool,
    confirmation: bool,
    creating: bool,
    viewing: bool,
}

impl Layers {
    fn of(store: &RefCell<BoardStore>) -> Self {
        let store = store.borrow();
        Self {
            notice: store.board.notice().is_some(),
            confirmation: store.board.confirmation().is_some(),
            creating: store.board.is_creating(),
            viewing: store.board.is_viewing(),
        }
    }
}
