// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::util::{byte_range_of_grapheme_at, grapheme_count, unicode_width_of_slice};

/// A vertical list of fields, one of which is active at a time.
pub struct Form<S> {
    items: Vec<Box<dyn FormItem<S>>>,
    item_index: usize,
}

impl<S> Form<S> {
    pub fn new(items: Vec<Box<dyn FormItem<S>>>) -> Self {
        Self {
            items,
            item_index: 0,
        }
    }

    fn layout(&self) -> Layout {
        Layout::vertical(self.items.iter().map(|_| Constraint::Max(3))).margin(1)
    }

    fn navigate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, offset: isize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }

        if let Some(a) = self.items.get_mut(self.item_index) {
            a.deactivate(dispatcher, store);
        }

        self.item_index = match offset.is_negative() {
            true => (self.item_index + len - offset.unsigned_abs() % len) % len,
            false => (self.item_index + offset.unsigned_abs()) % len,
        };

        if let Some(a) = self.items.get_mut(self.item_index) {
            a.activate(dispatcher, store);
        }
    }
}

impl<S> Component<S> for Form<S> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout().split(area);
        let last = self.items.len().saturating_sub(1);
        // reverse order so that each title is drawn over the previous connector
        for (i, (item, area)) in self.items.iter().zip(areas.iter()).enumerate().rev() {
            item_render(i == last, item.as_ref(), *area, buf);
            item.render(store, item_inner(*area), buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let areas = self.layout().split(area);
        let item = self.items.get(self.item_index)?;
        let area = areas.get(self.item_index)?;
        item.get_cursor_position(store, *area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let areas = self.layout().split(area);
        if let (Some(item), Some(subarea)) =
            (self.items.get_mut(self.item_index), areas.get(self.item_index))
            && let Some(msg) = item.on_key(dispatcher, store, *subarea, event)
        {
            return Some(msg);
        }

        match event.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.navigate(dispatcher, store, -1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab => {
                self.navigate(dispatcher, store, 1);
                Some(Message::CursorUpdated)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self) -> &str;
    fn item_state(&self) -> FormItemState;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItemState {
    /// The item is focused and receives the keys.
    Active,
    Inactive,
}

/// Reads a field from the store and turns edits into actions.
pub trait Access<S, T> {
    fn get(store: &RefCell<S>) -> T;
    fn set(dispatcher: &mut Dispatcher, value: T) -> bool;
}

/// A single line text field, edited grapheme by grapheme.
#[derive(Debug)]
pub struct Input<S, A: Access<S, String>> {
    title: String,
    active: bool,
    character_index: usize,
    _phantom_s: std::marker::PhantomData<S>,
    _phantom_a: std::marker::PhantomData<A>,
}

impl<S, A: Access<S, String>> Input<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            active: false,
            character_index: 0,
            _phantom_a: std::marker::PhantomData,
            _phantom_s: std::marker::PhantomData,
        }
    }
}

impl<S, A: Access<S, String>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(store);
        Paragraph::new(v.as_str()).render(area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let v = A::get(store);
        let width = unicode_width_of_slice(v.as_str(), self.character_index);
        let x = u16::try_from(width)
            .unwrap_or(u16::MAX)
            .saturating_add(area.x)
            .saturating_add(2); // sider 1 + padding 1
        let y = area.y + 1; // title line: 1
        Some((x, y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if !self.active || !matches!(event.code, Left | Right | Home | End | Backspace | Char(_)) {
            return None;
        }
        if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        let mut v = A::get(store);
        match event.code {
            Left if self.character_index > 0 => self.character_index -= 1,
            Right if self.character_index < grapheme_count(&v) => self.character_index += 1,
            Home => self.character_index = 0,
            End => self.character_index = grapheme_count(&v),
            Backspace if self.character_index > 0 => {
                if let Some(range) = byte_range_of_grapheme_at(&v, self.character_index - 1) {
                    v.replace_range(range, "");
                    if A::set(dispatcher, v) {
                        self.character_index -= 1;
                    }
                }
            }
            Char(c) => {
                let byte_index = byte_range_of_grapheme_at(&v, self.character_index)
                    .map(|r| r.start)
                    .unwrap_or(v.len());
                v.insert(byte_index, c);
                if A::set(dispatcher, v) {
                    self.character_index += 1;
                }
            }
            _ => {}
        };

        // Always update the cursor position for simplicity
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        self.character_index = grapheme_count(&A::get(store));
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
        self.character_index = 0;
    }
}

impl<S, A: Access<S, String>> FormItem<S> for Input<S, A> {
    fn item_title(&self) -> &str {
        &self.title
    }

    fn item_state(&self) -> FormItemState {
        match self.active {
            true => FormItemState::Active,
            false => FormItemState::Inactive,
        }
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";
const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn item_render<S>(is_last: bool, item: &dyn FormItem<S>, area: Rect, buf: &mut Buffer) {
    let (color, symbol) = match item.item_state() {
        FormItemState::Active => (Color::Blue, S_STEP_ACTIVE),
        FormItemState::Inactive => (Color::Gray, S_STEP_INACTIVE),
    };

    let area_title = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(area_title, buf);
    Paragraph::new(item.item_title())
        .bold()
        .fg(color)
        .render(area_title, buf);

    if let Some(c) = buf.cell_mut((area.x, area.y)) {
        c.set_symbol(symbol);
        c.set_fg(color);
    }

    for y in 1..area.height.saturating_sub(1) {
        if let Some(c) = buf.cell_mut((area.x, area.y + y)) {
            c.set_symbol(S_SIDER_CONNECTOR);
            c.set_fg(color);
        }
    }

    if area.height > 1
        && let Some(c) = buf.cell_mut((area.x, area.y + area.height - 1))
    {
        let symbol = match is_last {
            true => S_SIDER_BOTTOM,
            false => S_SIDER_CONNECTOR,
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }
}

fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::dispatcher::Action;

    #[derive(Default)]
    struct TextStore {
        text: String,
    }

    struct TextAccess;

    impl Access<TextStore, String> for TextAccess {
        fn get(store: &RefCell<TextStore>) -> String {
            store.borrow().text.clone()
        }

        fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
            dispatcher.dispatch(Action::UpdateStartText(value));
            true
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (std::rc::Rc<RefCell<TextStore>>, Dispatcher) {
        let store = std::rc::Rc::new(RefCell::new(TextStore::default()));
        let mut dispatcher = Dispatcher::new();
        let that = store.clone();
        dispatcher.register(std::rc::Rc::new(RefCell::new(move |action: &Action| {
            if let Action::UpdateStartText(v) = action {
                that.borrow_mut().text = v.clone();
            }
        })));
        (store, dispatcher)
    }

    #[test]
    fn test_input_edits_at_cursor() {
        let (store, mut dispatcher) = setup();
        let mut input: Input<TextStore, TextAccess> = Input::new("Title");
        input.activate(&mut dispatcher, &store);

        let area = Rect::new(0, 0, 20, 3);
        for c in "ac".chars() {
            input.on_key(&mut dispatcher, &store, area, key(KeyCode::Char(c)));
        }
        input.on_key(&mut dispatcher, &store, area, key(KeyCode::Left));
        input.on_key(&mut dispatcher, &store, area, key(KeyCode::Char('中')));
        assert_eq!(store.borrow().text, "a中c");

        input.on_key(&mut dispatcher, &store, area, key(KeyCode::Backspace));
        assert_eq!(store.borrow().text, "ac");
        assert_eq!(input.get_cursor_position(&store, area), Some((3, 1)));
    }

    #[test]
    fn test_input_ignores_modifier_chords() {
        let (store, mut dispatcher) = setup();
        let mut input: Input<TextStore, TextAccess> = Input::new("Title");
        input.activate(&mut dispatcher, &store);

        let area = Rect::new(0, 0, 20, 3);
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            let chord = KeyEvent::new(KeyCode::Char('x'), modifiers);
            assert_eq!(input.on_key(&mut dispatcher, &store, area, chord), None);
        }
        let shifted = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        input.on_key(&mut dispatcher, &store, area, shifted);
        assert_eq!(store.borrow().text, "X");
    }

    #[test]
    fn test_cursor_position_saturates_at_edge() {
        let (store, mut dispatcher) = setup();
        store.borrow_mut().text = "ab".to_string();
        let mut input: Input<TextStore, TextAccess> = Input::new("Title");
        input.activate(&mut dispatcher, &store);

        let area = Rect {
            x: u16::MAX - 1,
            y: 0,
            width: 1,
            height: 3,
        };
        assert_eq!(input.get_cursor_position(&store, area), Some((u16::MAX, 1)));
    }

    #[test]
    fn test_inactive_input_ignores_keys() {
        let (store, mut dispatcher) = setup();
        let mut input: Input<TextStore, TextAccess> = Input::new("Title");
        let area = Rect::new(0, 0, 20, 3);
        let msg = input.on_key(&mut dispatcher, &store, area, key(KeyCode::Char('x')));
        assert_eq!(msg, None);
        assert_eq!(store.borrow().text, "");
    }

    #[test]
    fn test_form_navigation_wraps() {
        let (store, mut dispatcher) = setup();
        let mut form: Form<TextStore> = Form::new(vec![
            Box::new(Input::<TextStore, TextAccess>::new("First")),
            Box::new(Input::<TextStore, TextAccess>::new("Second")),
        ]);
        form.activate(&mut dispatcher, &store);

        let area = Rect::new(0, 0, 20, 8);
        let msg = form.on_key(&mut dispatcher, &store, area, key(KeyCode::Up));
        assert_eq!(msg, Some(Message::CursorUpdated));
        assert_eq!(form.item_index, 1);
        form.on_key(&mut dispatcher, &store, area, key(KeyCode::Tab));
        assert_eq!(form.item_index, 0);
    }

    #[test]
    fn test_form_renders_titles() {
        let store = RefCell::new(TextStore {
            text: "hello".to_string(),
        });
        let form: Form<TextStore> = Form::new(vec![Box::new(
            Input::<TextStore, TextAccess>::new("Title"),
        )]);

        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        form.render(&store, area, &mut buf);

        let row = |y: u16| -> String { (0..area.width).map(|x| buf[(x, y)].symbol()).collect() };
        assert!(row(1).contains("Title"));
        assert!(row(2).contains("hello"));
    }
}
