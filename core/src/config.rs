// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::TimeDelta;

use crate::{CalendarView, ConfigError, WeekStart};

/// The name of the EventBoard application.
pub const APP_NAME: &str = "eventboard";

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Configuration for the board.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Calendar views offered to the user, in cycling order.
    #[serde(default = "default_views")]
    pub views: Vec<CalendarView>,

    /// The view the board opens with.
    #[serde(default)]
    pub default_view: CalendarView,

    /// First day of the week.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Length of a time slot in the week and day views, in minutes.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            views: default_views(),
            default_view: CalendarView::default(),
            week_start: WeekStart::default(),
            slot_minutes: default_slot_minutes(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    ///
    /// Duplicate views are dropped, keeping the first occurrence.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        let mut seen = Vec::with_capacity(self.views.len());
        self.views.retain(|v| {
            let fresh = !seen.contains(v);
            seen.push(*v);
            fresh
        });

        if self.views.is_empty() {
            return Err(ConfigError::NoViews);
        }
        if !self.views.contains(&self.default_view) {
            return Err(ConfigError::DefaultViewNotOffered(self.default_view));
        }
        if self.slot_minutes == 0 || MINUTES_PER_DAY % self.slot_minutes != 0 {
            return Err(ConfigError::InvalidSlotMinutes(self.slot_minutes));
        }
        Ok(())
    }

    /// Length of a time slot.
    pub fn slot(&self) -> TimeDelta {
        TimeDelta::minutes(self.slot_minutes.into())
    }
}

fn default_views() -> Vec<CalendarView> {
    CalendarView::ALL.to_vec()
}

fn default_slot_minutes() -> u32 {
    30
}
