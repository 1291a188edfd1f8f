//! Top-level frame layout.
//!
//! Header on top, the body split into a fixed-width filter form pane and the
//! results pane, and a one-line status bar at the bottom. Overlays (detail,
//! help) render last so they sit above everything.

use crate::state::AppState;
use crate::view::constants::{FORM_PANE_WIDTH, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::styles::AppStyles;
use crate::view::{detail, form, help, results};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render one full frame.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &AppStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], styles);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_PANE_WIDTH), Constraint::Min(1)])
        .split(chunks[1]);

    form::render_form(frame, body[0], state, styles);
    results::render_results(frame, body[1], state, styles);

    render_status_bar(frame, chunks[2], state, styles);

    detail::render_detail_overlay(frame, state, styles);
    if state.help_visible {
        help::render_help_overlay(frame, styles);
    }
}

fn render_header(frame: &mut Frame, area: Rect, styles: &AppStyles) {
    let header = Paragraph::new(Line::from(Span::styled(
        "County Court Records Search",
        styles.title,
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(styles.border));
    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &AppStyles) {
    let line = if let Some(notice) = &state.status_notice {
        Line::from(Span::styled(format!(" {notice}"), styles.error))
    } else if state.loading {
        Line::from(Span::styled(" Searching…", styles.muted))
    } else {
        Line::from(Span::styled(
            " ?: help   Tab: switch pane   q: quit",
            styles.muted,
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}
