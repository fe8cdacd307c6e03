// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Calendar granularity offered by the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CalendarView {
    /// Whole month laid out in weeks, one cell per day.
    #[default]
    Month,

    /// A single week split into time slots.
    Week,

    /// A single day split into time slots.
    Day,
}

const VIEW_MONTH: &str = "month";
const VIEW_WEEK: &str = "week";
const VIEW_DAY: &str = "day";

impl CalendarView {
    /// All views, in their conventional order.
    pub const ALL: [CalendarView; 3] = [CalendarView::Month, CalendarView::Week, CalendarView::Day];

    /// The first and last day shown by this view around `anchor`, both inclusive.
    pub fn visible_range(self, anchor: NaiveDate, week_start: WeekStart) -> (NaiveDate, NaiveDate) {
        match self {
            CalendarView::Month => {
                let first = anchor.with_day(1).unwrap_or(anchor);
                let last = last_day_of_month(anchor);
                (week_start.start_of(first), week_start.end_of(last))
            }
            CalendarView::Week => (week_start.start_of(anchor), week_start.end_of(anchor)),
            CalendarView::Day => (anchor, anchor),
        }
    }

    /// Moves the anchor one period forward or backward.
    ///
    /// Month shifts clamp the day to the length of the target month.
    pub fn shift(self, anchor: NaiveDate, forward: bool) -> NaiveDate {
        let shifted = match (self, forward) {
            (CalendarView::Month, true) => anchor.checked_add_months(Months::new(1)),
            (CalendarView::Month, false) => anchor.checked_sub_months(Months::new(1)),
            (CalendarView::Week, true) => anchor.checked_add_days(Days::new(7)),
            (CalendarView::Week, false) => anchor.checked_sub_days(Days::new(7)),
            (CalendarView::Day, true) => anchor.checked_add_days(Days::new(1)),
            (CalendarView::Day, false) => anchor.checked_sub_days(Days::new(1)),
        };
        shifted.unwrap_or(anchor)
    }

    /// Whether a slot in this view spans a whole day.
    pub fn has_day_slots(self) -> bool {
        matches!(self, CalendarView::Month)
    }
}

impl AsRef<str> for CalendarView {
    fn as_ref(&self) -> &str {
        match self {
            CalendarView::Month => VIEW_MONTH,
            CalendarView::Week => VIEW_WEEK,
            CalendarView::Day => VIEW_DAY,
        }
    }
}

impl Display for CalendarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for CalendarView {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            VIEW_MONTH => Ok(CalendarView::Month),
            VIEW_WEEK => Ok(CalendarView::Week),
            VIEW_DAY => Ok(CalendarView::Day),
            _ => Err(()),
        }
    }
}

/// First day of the week used to lay out the month and week views.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// The first day of the week containing `date`.
    pub fn start_of(self, date: NaiveDate) -> NaiveDate {
        date.week(self.weekday()).first_day()
    }

    /// The last day of the week containing `date`.
    pub fn end_of(self, date: NaiveDate) -> NaiveDate {
        date.week(self.weekday()).last_day()
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}
