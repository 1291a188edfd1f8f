//! Record detail overlay.
//!
//! A centered modal over the results showing every field of one record plus
//! the summary section, which tracks the summary lifecycle: a generate hint
//! while absent, a progress message while pending, the text when ready, and
//! the fixed fallback line on failure.

use crate::state::{AppState, SummaryState, SUMMARY_FALLBACK_TEXT};
use crate::view::constants::{DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT};
use crate::view::help::centered_rect;
use crate::view::styles::AppStyles;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the detail overlay for the open record, if any.
pub fn render_detail_overlay(frame: &mut Frame, state: &AppState, styles: &AppStyles) {
    let Some(record) = &state.detail else {
        return;
    };

    let area = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = vec![
        field_line("Court", record.court_type.to_string(), styles),
        field_line("County", format!("{} County", record.county), styles),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Status"), styles.label),
            Span::styled(record.status.clone(), styles.for_status(&record.status)),
        ]),
        field_line("Plaintiff", record.plaintiff.clone(), styles),
        field_line("Defendant", record.defendant.clone(), styles),
        field_line("Filing Date", record.filing_date.to_string(), styles),
    ];

    if let Some(charges) = &record.charges {
        lines.push(field_line("Charges", charges.clone(), styles));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Details", styles.title)));
    lines.push(Line::from(Span::raw(record.details.clone())));

    if let Some(links) = &record.links {
        if !links.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Documents", styles.title)));
            for link in links {
                lines.push(Line::from(Span::styled(format!("  {link}"), styles.muted)));
            }
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("AI Summary", styles.title)));
    match &state.summary {
        SummaryState::Absent => {
            lines.push(Line::from(Span::styled(
                "Press s to generate a summary of this record",
                styles.muted,
            )));
        }
        SummaryState::Pending => {
            lines.push(Line::from(Span::styled(
                "Generating summary…",
                styles.muted,
            )));
        }
        SummaryState::Ready(text) => {
            lines.push(Line::from(Span::raw(text.clone())));
        }
        SummaryState::Failed => {
            lines.push(Line::from(Span::styled(SUMMARY_FALLBACK_TEXT, styles.error)));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", record.case_number))
        .title_style(styles.title)
        .borders(Borders::ALL)
        .border_style(styles.focused_border);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);

    // Dismissal hint on the bottom border.
    let hint_area = ratatui::layout::Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Esc: close   s: summarize ",
        styles.muted,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

fn field_line(label: &str, value: String, styles: &AppStyles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), styles.label),
        Span::raw(value),
    ])
}
