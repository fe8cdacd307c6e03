// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDateTime};

use crate::Event;

/// Formats a timestamp the way the detail view shows it,
/// e.g. `October 14th 2026, 3:05 pm`.
pub fn format_long(dt: NaiveDateTime) -> String {
    let day = dt.day();
    format!(
        "{} {}{} {}, {}",
        dt.format("%B"),
        day,
        ordinal_suffix(day),
        dt.year(),
        dt.format("%-I:%M %P")
    )
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Read-only presentation of an event for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails<'a> {
    pub title: &'a str,
    pub start: String,
    pub end: String,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a Event> for EventDetails<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            title: event.title(),
            start: format_long(event.start()),
            end: format_long(event.end()),
            description: event.description(),
        }
    }
}
