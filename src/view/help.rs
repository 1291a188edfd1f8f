//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with shortcuts grouped by category.
//! Triggered by '?', dismissed by 'Esc' or '?'.

use crate::view::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::view::styles::AppStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &AppStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .title_style(styles.title)
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles.muted,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Calculate a rect centered on `area` with the given percentage size.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &AppStyles) -> Vec<Line<'static>> {
    let category_style = styles.title;
    let key_style = styles.focused_border;
    let desc_style = ratatui::style::Style::default();

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    vec![
        Line::from(Span::styled("Filter Form", category_style)),
        entry("↓ / ↑", "Next / previous field"),
        entry("← / →", "Cycle select options"),
        entry("Enter", "Run search (resets to page 1)"),
        Line::default(),
        Line::from(Span::styled("Results", category_style)),
        entry("j / k", "Move highlight"),
        entry("Enter / o", "Open record detail"),
        entry("s", "AI summary of the highlighted record"),
        entry("n / ]", "Next page"),
        entry("p / [", "Previous page"),
        Line::default(),
        Line::from(Span::styled("Focus", category_style)),
        entry("Tab", "Cycle focus between panes"),
        entry("1", "Focus the filter form"),
        entry("2", "Focus the result list"),
        Line::default(),
        Line::from(Span::styled("Application", category_style)),
        entry("Esc", "Close overlay"),
        entry("?", "Toggle this help"),
        entry("q / Ctrl+C", "Quit"),
    ]
}
