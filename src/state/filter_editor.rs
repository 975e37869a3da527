//! Filter editor state (pure).
//!
//! One editor serves both variants:
//! - [`FilterMode::Modal`]: edits go to a staged draft; Apply commits, Cancel discards.
//! - [`FilterMode::Inline`]: the draft mirrors the active filters and every
//!   edit is committed immediately by the key handler.

use crate::model::{FilterField, FilterMap};
use serde::Deserialize;

/// Which filter editor variant is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Staged edits in a centred overlay.
    #[default]
    Modal,
    /// Immediate edits in a bar above the table.
    Inline,
}

impl FilterMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "modal" => Some(FilterMode::Modal),
            "inline" => Some(FilterMode::Inline),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Modal => "modal",
            FilterMode::Inline => "inline",
        }
    }
}

/// Editor state.
///
/// # Cardinality
/// - Closed: the draft is ignored; rendering uses the active filters
/// - Open: one focused field, cursor within that field's value (in chars)
#[derive(Debug, Clone, Default)]
pub struct FilterEditor {
    mode: FilterMode,
    open: bool,
    draft: FilterMap,
    field: FilterField,
    cursor: usize,
}

impl FilterEditor {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open (modal) or focus (inline), seeding the draft from `active`.
    pub fn open(&mut self, active: &FilterMap) {
        self.open = true;
        self.draft = active.clone();
        self.cursor = self.value_len();
    }

    /// Close without returning the draft.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close and hand back the draft for committing.
    pub fn apply(&mut self) -> FilterMap {
        self.open = false;
        self.draft.clone()
    }

    pub fn draft(&self) -> &FilterMap {
        &self.draft
    }

    pub fn field(&self) -> FilterField {
        self.field
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Draft text of a field; `""` when unset.
    pub fn value(&self, field: FilterField) -> &str {
        self.draft.get(field).unwrap_or("")
    }

    /// Focus a specific field with the cursor at the end.
    pub fn focus(&mut self, field: FilterField) {
        self.field = field;
        self.cursor = self.value_len();
    }

    pub fn next_field(&mut self) {
        let next = (self.field.index() + 1) % FilterField::ALL.len();
        self.focus(FilterField::ALL[next]);
    }

    pub fn prev_field(&mut self) {
        let len = FilterField::ALL.len();
        let prev = (self.field.index() + len - 1) % len;
        self.focus(FilterField::ALL[prev]);
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut chars: Vec<char> = self.value(self.field).chars().collect();
        let at = self.cursor.min(chars.len());
        chars.insert(at, ch);
        self.draft.set(self.field, chars.into_iter().collect::<String>());
        self.cursor = at + 1;
    }

    /// Delete the char before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let mut chars: Vec<char> = self.value(self.field).chars().collect();
        let at = self.cursor.min(chars.len());
        if at == 0 {
            return false;
        }
        chars.remove(at - 1);
        self.draft.set(self.field, chars.into_iter().collect::<String>());
        self.cursor = at - 1;
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value_len());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value_len();
    }

    fn value_len(&self) -> usize {
        self.value(self.field).chars().count()
    }
}
