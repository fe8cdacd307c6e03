// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Timelike};
use eventboard_core::{CalendarView, Event, Signal};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::board_store::BoardStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, CursorMove, Dispatcher};
use crate::util::truncate_to_width;

const GUTTER_WIDTH: u16 = 6;

/// The month, week or day grid of the board.
pub struct CalendarGrid;

impl Component<BoardStore> for CalendarGrid {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        render_header(&store, header, buf);
        match store.board.view() {
            CalendarView::Month => render_month(&store, body, buf),
            CalendarView::Week | CalendarView::Day => render_slots(&store, body, buf),
        }
        instructions().render(footer, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        let action = match event.code {
            Left => Action::MoveCursor(CursorMove::Left),
            Right => Action::MoveCursor(CursorMove::Right),
            Up => Action::MoveCursor(CursorMove::Up),
            Down => Action::MoveCursor(CursorMove::Down),
            Char('[') => Action::ShiftPeriod { forward: false },
            Char(']') => Action::ShiftPeriod { forward: true },
            Char('t') => Action::Today,
            Char('v') => Action::Board(Signal::ChangeView(store.borrow().board.next_view())),
            Tab => Action::CycleFocus,
            Enter => Action::Board(store.borrow().select_signal()),
            Char('<') => Action::Board(store.borrow().drop_signal(false)?),
            Char('>') => Action::Board(store.borrow().drop_signal(true)?),
            Char('-') => Action::Board(store.borrow().resize_signal(false)?),
            Char('+' | '=') => Action::Board(store.borrow().resize_signal(true)?),
            Char('q') | Esc => {
                dispatcher.dispatch(Action::Quit);
                return Some(Message::Exit);
            }
            _ => return None,
        };

        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}

fn render_header(store: &BoardStore, area: Rect, buf: &mut Buffer) {
    Line::from(period_title(store).bold()).render(area, buf);

    let active = store.board.view();
    let tabs: Vec<Span> = store
        .board
        .views()
        .iter()
        .map(|view| {
            let label = format!(" {view} ");
            match *view == active {
                true => label.reversed(),
                false => label.dark_gray(),
            }
        })
        .collect();
    Line::from(tabs).right_aligned().render(area, buf);
}

fn period_title(store: &BoardStore) -> String {
    let date = store.cursor.date();
    match store.board.view() {
        CalendarView::Month => date.format("%B %Y").to_string(),
        CalendarView::Week => {
            let (first, last) = store.visible_range();
            format!("{} - {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
        }
        CalendarView::Day => date.format("%A, %B %-d %Y").to_string(),
    }
}

fn render_month(store: &BoardStore, area: Rect, buf: &mut Buffer) {
    let (first, last) = store.visible_range();
    let days: Vec<NaiveDate> = first.iter_days().take_while(|d| *d <= last).collect();
    let weeks = u32::try_from(days.len() / 7).unwrap_or(1).max(1);

    let [names, grid] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    let columns = Layout::horizontal([Constraint::Ratio(1, 7); 7]);

    for (date, cell) in days.iter().zip(columns.split(names).iter()) {
        Line::from(date.format("%a").to_string().bold())
            .centered()
            .render(*cell, buf);
    }

    let rows = Layout::vertical((0..weeks).map(|_| Constraint::Ratio(1, weeks))).split(grid);
    for (week, row) in days.chunks(7).zip(rows.iter()) {
        for (date, cell) in week.iter().zip(columns.split(*row).iter()) {
            render_day_cell(store, *date, *cell, buf);
        }
    }
}

fn render_day_cell(store: &BoardStore, date: NaiveDate, area: Rect, buf: &mut Buffer) {
    let cursor = store.cursor.date();
    let mut style = Style::new();
    if date.month() != cursor.month() {
        style = style.dark_gray();
    }
    if date == store.today {
        style = style.yellow().bold();
    }
    if date == cursor {
        style = style.reversed();
    }

    let width = usize::from(area.width.saturating_sub(1));
    let mut lines = vec![Line::from(Span::styled(format!("{:>2}", date.day()), style))];

    let events = store.events_on(date);
    let capacity = usize::from(area.height.saturating_sub(1));
    for (i, event) in events.iter().enumerate() {
        if i >= capacity {
            break;
        }
        if i + 1 == capacity && events.len() > capacity {
            lines.push(Line::from(format!("+{} more", events.len() - i).dark_gray()));
            break;
        }
        lines.push(event_line(store, event, width));
    }

    Paragraph::new(lines).render(area, buf);
}

fn render_slots(store: &BoardStore, area: Rect, buf: &mut Buffer) {
    let days: Vec<NaiveDate> = match store.board.view() {
        CalendarView::Day => vec![store.cursor.date()],
        _ => {
            let (first, last) = store.visible_range();
            first.iter_days().take_while(|d| *d <= last).collect()
        }
    };

    let [names, grid] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    let [_, names] =
        Layout::horizontal([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)]).areas(names);
    let [gutter, grid] =
        Layout::horizontal([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)]).areas(grid);
    let columns = Layout::horizontal(days.iter().map(|_| Constraint::Fill(1)));

    for (date, cell) in days.iter().zip(columns.split(names).iter()) {
        let mut label = date.format("%a %-d").to_string().bold();
        if *date == store.today {
            label = label.yellow();
        }
        Line::from(label).centered().render(*cell, buf);
    }

    let slot_minutes = store.slot.num_minutes().max(1);
    let slots = (24 * 60) / slot_minutes;
    let rows = i64::from(grid.height);
    let cursor_slot = i64::from(store.cursor.time().num_seconds_from_midnight() / 60) / slot_minutes;
    let first_slot = (cursor_slot - rows / 2).min(slots - rows).max(0);

    let columns = columns.split(grid);
    for (row, index) in (first_slot..slots).take(usize::from(grid.height)).enumerate() {
        let Ok(y) = u16::try_from(row) else {
            break;
        };
        let y = grid.y + y;
        let time = NaiveTime::MIN + TimeDelta::minutes(index * slot_minutes);

        let label = match time.minute() {
            0 => time.format("%H:%M").to_string().into(),
            _ => time.format("%H:%M").to_string().dark_gray(),
        };
        Line::from(label).render(Rect::new(gutter.x, y, gutter.width, 1), buf);

        for (date, column) in days.iter().zip(columns.iter()) {
            let from = date.and_time(time);
            let cell = Rect::new(column.x, y, column.width, 1);
            let events: Vec<&Event> = store
                .board
                .store()
                .overlapping(from, from + store.slot)
                .collect();

            let width = usize::from(column.width.saturating_sub(1));
            let mut line = match events.first() {
                Some(event) if event.start() >= from || row == 0 => event_line(store, event, width),
                Some(_) => Line::from("│".blue()),
                None => Line::from("·".dark_gray()),
            };
            if events.len() > 1 {
                line.push_span(format!(" +{}", events.len() - 1).dark_gray());
            }
            if from == store.cursor {
                line = line.patch_style(Style::new().on_dark_gray());
                buf.set_style(cell, Style::new().on_dark_gray());
            }
            line.render(cell, buf);
        }
    }
}

fn event_line(store: &BoardStore, event: &Event, width: usize) -> Line<'static> {
    let title = truncate_to_width(event.title(), width);
    match store.focus == Some(event.id()) {
        true => Line::from(title.blue().reversed()),
        false => Line::from(title.blue()),
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Move ".into(),
        "<Arrows>".blue().bold(),
        " Period ".into(),
        "<[ ]>".blue().bold(),
        " Today ".into(),
        "<t>".blue().bold(),
        " View ".into(),
        "<v>".blue().bold(),
        " Focus ".into(),
        "<Tab>".blue().bold(),
        " Open ".into(),
        "<Enter>".blue().bold(),
        " Drag ".into(),
        "<< >>".blue().bold(),
        " Resize ".into(),
        "<- +>".blue().bold(),
        " Quit ".into(),
        "<q> ".blue().bold(),
    ])
}
