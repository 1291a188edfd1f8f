//! Color and style configuration.
//!
//! Case statuses get distinct colors (Active green, Pending yellow, Closed
//! gray) matching how the record cards and the detail overlay badge them.

use ratatui::style::{Color, Modifier, Style};

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
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Style set used across the application.
#[derive(Debug, Clone, Copy)]
pub struct AppStyles {
    /// Pane titles and the header.
    pub title: Style,
    /// Border of the pane that has keyboard focus.
    pub focused_border: Style,
    /// Border of unfocused panes.
    pub border: Style,
    /// Label column of the filter form and detail fields.
    pub label: Style,
    /// The form field under the edit cursor.
    pub focused_field: Style,
    /// Highlighted result card.
    pub selected_card: Style,
    /// Secondary text (hints, placeholders, disabled controls).
    pub muted: Style,
    /// Error and failure text.
    pub error: Style,
    /// Status "Active".
    pub status_active: Style,
    /// Status "Pending".
    pub status_pending: Style,
    /// Status "Closed".
    pub status_closed: Style,
}

impl AppStyles {
    /// Build the style set, honoring the color configuration.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Cyan),
                border: Style::default().fg(Color::DarkGray),
                label: Style::default().fg(Color::Gray),
                focused_field: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan),
                selected_card: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan),
                muted: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red),
                status_active: Style::default().fg(Color::Green),
                status_pending: Style::default().fg(Color::Yellow),
                status_closed: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                border: Style::default(),
                label: Style::default(),
                focused_field: Style::default().add_modifier(Modifier::REVERSED),
                selected_card: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default().add_modifier(Modifier::DIM),
                error: Style::default().add_modifier(Modifier::BOLD),
                status_active: Style::default(),
                status_pending: Style::default(),
                status_closed: Style::default(),
            }
        }
    }

    /// Style for a case status badge.
    pub fn for_status(&self, status: &str) -> Style {
        match status {
            "Active" => self.status_active,
            "Pending" => self.status_pending,
            "Closed" => self.status_closed,
            _ => Style::default(),
        }
    }
}

impl Default for AppStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}
