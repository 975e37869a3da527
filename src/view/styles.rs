//! Table styling configuration.
//!
//! Colors carry meaning in the table (liked, status, route ends, delayed), so
//! every style goes through [`TableStyles`] and can be switched off as a whole.

use crate::model::TripStatus;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles for every semantic element of the screen.
///
/// With colors disabled, foreground/background colors are dropped but
/// modifiers (bold, reversed, dim) are kept so the layout stays readable.
#[derive(Debug, Clone, Copy)]
pub struct TableStyles {
    colors: bool,
}

impl TableStyles {
    pub fn with_color_config(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    pub fn header(self) -> Style {
        self.fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn title(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn heart(self, liked: bool) -> Style {
        if liked {
            self.fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            self.fg(Color::DarkGray)
        }
    }

    pub fn status(self, status: TripStatus) -> Style {
        match status {
            TripStatus::ConsentPending => self.fg(Color::Red),
            TripStatus::Enroute => self.fg(Color::Green),
        }
    }

    pub fn origin_flag(self) -> Style {
        self.fg(Color::Green)
    }

    pub fn destination_flag(self) -> Style {
        self.fg(Color::Red)
    }

    pub fn delayed_badge(self) -> Style {
        if self.colors {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        }
    }

    pub fn selected_row(self) -> Style {
        if self.colors {
            Style::default().bg(Color::Rgb(40, 44, 52))
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    pub fn muted(self) -> Style {
        self.fg(Color::DarkGray)
    }

    pub fn chip(self) -> Style {
        self.fg(Color::Blue)
    }

    pub fn chip_key(self) -> Style {
        self.chip().add_modifier(Modifier::BOLD)
    }

    pub fn badge(self) -> Style {
        if self.colors {
            Style::default().fg(Color::White).bg(Color::Blue)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    pub fn button(self, enabled: bool) -> Style {
        if enabled {
            self.fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            self.fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }

    pub fn active_page(self) -> Style {
        if self.colors {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    pub fn input(self, focused: bool) -> Style {
        if focused {
            self.fg(Color::Yellow)
        } else {
            Style::default()
        }
    }

    pub fn error(self) -> Style {
        self.fg(Color::Red)
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::enabled())
    }
}

// ===== Tests =====
