// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// A bordered popup centered over the board.
pub struct Dialog<S, C: Component<S>> {
    title: String,
    corner: Option<&'static str>,
    instructions: Vec<(&'static str, &'static str)>,
    size: (u16, u16),
    inner: C,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: Component<S>> Dialog<S, C> {
    pub fn new(title: impl ToString, size: (u16, u16), inner: C) -> Self {
        Self {
            title: title.to_string(),
            corner: None,
            instructions: Vec::new(),
            size,
            inner,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Adds a `label <key>` hint to the bottom border.
    pub fn instruction(mut self, label: &'static str, key: &'static str) -> Self {
        self.instructions.push((label, key));
        self
    }

    /// Shows a symbol in the top right corner of the border.
    pub fn corner(mut self, symbol: &'static str) -> Self {
        self.corner = Some(symbol);
        self
    }

    fn block(&self) -> Block<'_> {
        let title = Line::from(format!(" {} ", self.title).bold());
        let mut block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(title.centered())
            .title_bottom(self.instructions().centered())
            .white();
        if let Some(corner) = self.corner {
            block = block.title(Line::from(format!(" {corner} ")).right_aligned());
        }
        block
    }

    fn instructions(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.instructions.len() * 2);
        for (i, (label, key)) in self.instructions.iter().enumerate() {
            let key = match i + 1 == self.instructions.len() {
                true => format!("<{key}> "),
                false => format!("<{key}>"),
            };
            spans.push(Span::from(format!(" {label} ")));
            spans.push(key.blue().bold());
        }
        Line::from(spans)
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let (width, height) = self.size;
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        area
    }
}

impl<S, C: Component<S>> Component<S> for Dialog<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let area = self.popup_area(area);
        let block = self.block();
        let inner_area = block.inner(area);

        Clear.render(area, buf);
        block.render(area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let inner_area = self.block().inner(self.popup_area(area));
        self.inner.get_cursor_position(store, inner_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner_area = self.block().inner(self.popup_area(area));
        self.inner.on_key(dispatcher, store, inner_area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.deactivate(dispatcher, store);
    }
}
