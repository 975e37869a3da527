//! Detail popovers for truncated cells.
//!
//! At most one popover is open at a time. Popovers are positional (row on the
//! current page), so they are closed whenever the page data is replaced.

use serde::Deserialize;

/// Cells whose full text can be revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealField {
    Origin,
    Destination,
    LastUpdate,
}

/// How popovers are opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// Open while the mouse is over the cell.
    #[default]
    Hover,
    /// Toggle on click.
    Click,
}

impl RevealMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "hover" => Some(RevealMode::Hover),
            "click" => Some(RevealMode::Click),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevealMode::Hover => "hover",
            RevealMode::Click => "click",
        }
    }
}

/// The open popover, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub row: usize,
    pub field: RevealField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    current: Option<Reveal>,
}

impl RevealState {
    pub fn current(&self) -> Option<Reveal> {
        self.current
    }

    /// Hover semantics: follow the pointer; `None` closes.
    pub fn hover(&mut self, target: Option<Reveal>) {
        self.current = target;
    }

    /// Click semantics: the same target closes, any other target replaces.
    pub fn toggle(&mut self, target: Reveal) {
        if self.current == Some(target) {
            self.current = None;
        } else {
            self.current = Some(target);
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
