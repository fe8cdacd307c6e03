// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const FORMAT_DATE: &str = "%Y-%m-%d";
const FORMAT_DATETIME: &str = "%Y-%m-%d %H:%M";

/// Parses a `YYYY-MM-DD` date, used by the command line.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), FORMAT_DATE)
        .map_err(|e| format!("Invalid date `{s}`, expected YYYY-MM-DD: {e}"))
}

/// Parses the text of a start/end input.
///
/// Empty text means the field is cleared.
pub fn parse_datetime(dt: &str) -> Result<Option<NaiveDateTime>, &'static str> {
    let dt = dt.trim();
    if dt.is_empty() {
        Ok(None)
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(dt, FORMAT_DATETIME) {
        Ok(Some(dt))
    } else {
        Err("Invalid date format. Expected format: YYYY-MM-DD HH:MM")
    }
}

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(FORMAT_DATETIME).to_string()
}

/// Display width of the first `first_n` grapheme clusters of `s`.
pub fn unicode_width_of_slice(s: &str, first_n: usize) -> usize {
    s.graphemes(true).take(first_n).map(UnicodeWidthStr::width).sum()
}

pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Return the byte range of the grapheme cluster at index `g_idx` in `s`.
/// If out of bounds, returns None.
pub fn byte_range_of_grapheme_at(s: &str, g_idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}

/// Truncates `s` to at most `width` columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_owned();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = g.width();
        if used + w + 1 > width {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    out
}
