//! Cell text formatting (pure).

use crate::model::Timestamp;
use chrono::Local;
use serde::Deserialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Characters of `last_update` shown before the `...` suffix.
pub const LAST_UPDATE_PREVIEW_CHARS: usize = 10;

const DATE_FORMAT: &str = "%B %-d, %Y";
const TIME_FORMAT: &str = "%I:%M:%S %p";

/// Zone used to display `created_at` and `eta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayZone {
    /// The machine's local zone.
    #[default]
    Local,
    Utc,
}

impl DisplayZone {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "local" => Some(DisplayZone::Local),
            "utc" => Some(DisplayZone::Utc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayZone::Local => "local",
            DisplayZone::Utc => "utc",
        }
    }
}

/// Shorten `last_update` for its cell.
///
/// Counts characters, not bytes, so multi-byte text is never split.
///
/// ```
/// use tripboard::view::format::truncate_last_update;
///
/// assert_eq!(truncate_last_update("Near Lonavala toll"), "Near Lonav...");
/// assert_eq!(truncate_last_update("Arrived"), "Arrived");
/// ```
pub fn truncate_last_update(text: &str) -> String {
    if text.chars().count() > LAST_UPDATE_PREVIEW_CHARS {
        let head: String = text.chars().take(LAST_UPDATE_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Whether [`truncate_last_update`] hides part of the text.
pub fn last_update_is_truncated(text: &str) -> bool {
    text.chars().count() > LAST_UPDATE_PREVIEW_CHARS
}

/// Fit `text` into `width` terminal columns, ending with `…` when cut.
pub fn ellipsize(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Split `text` into lines of at most `width` columns, breaking anywhere.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        line.push(ch);
        used += w;
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Date line and time line for a timestamp cell.
pub fn date_and_time(ts: &Timestamp, zone: DisplayZone) -> (String, String) {
    match zone {
        DisplayZone::Local => {
            let t = ts.in_zone(&Local);
            (
                t.format(DATE_FORMAT).to_string(),
                t.format(TIME_FORMAT).to_string(),
            )
        }
        DisplayZone::Utc => {
            let t = ts.as_utc();
            (
                t.format(DATE_FORMAT).to_string(),
                t.format(TIME_FORMAT).to_string(),
            )
        }
    }
}
