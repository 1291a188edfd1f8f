//! Result list pane rendering: record cards, empty/loading states, and the
//! pagination bar.

use crate::model::PAGE_SIZE;
use crate::state::{AppState, Focus};
use crate::view::constants::PAGINATION_BAR_HEIGHT;
use crate::view::styles::AppStyles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the results pane: title with the total match count, the record
/// cards (or a loading/empty message), and the pagination bar.
pub fn render_results(frame: &mut Frame, area: Rect, state: &AppState, styles: &AppStyles) {
    let results_focused = state.focus == Focus::Results;
    let border = if results_focused {
        styles.focused_border
    } else {
        styles.border
    };

    let title = format!(" Results ({} total matches) ", state.results.total_results);
    let block = Block::default()
        .title(title)
        .title_style(styles.title)
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PAGINATION_BAR_HEIGHT),
        ])
        .split(inner);

    if state.loading {
        let message = Paragraph::new(Line::from(Span::styled(
            "Searching public records…",
            styles.muted,
        )))
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[0]);
    } else if state.has_no_records() {
        let message = Paragraph::new(Line::from(Span::styled(
            "No records match your criteria",
            styles.muted,
        )))
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[0]);
    } else {
        render_cards(frame, chunks[0], state, styles);
    }

    render_pagination(frame, chunks[1], state, styles);
}

fn render_cards(frame: &mut Frame, area: Rect, state: &AppState, styles: &AppStyles) {
    let items: Vec<ListItem> = state
        .results
        .records
        .iter()
        .map(|record| {
            let header = Line::from(vec![
                Span::styled(record.case_number.clone(), styles.title),
                Span::raw("  "),
                Span::raw(record.court_type.to_string()),
                Span::raw("  "),
                Span::styled(record.status.clone(), styles.for_status(&record.status)),
            ]);
            let parties = Line::from(Span::raw(format!(
                "{} v. {}",
                record.plaintiff, record.defendant
            )));
            let meta = Line::from(Span::styled(
                format!("{} County  ·  Filed {}", record.county, record.filing_date),
                styles.muted,
            ));
            ListItem::new(vec![header, parties, meta])
        })
        .collect();

    let list = List::new(items).highlight_style(styles.selected_card);

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_pagination(frame: &mut Frame, area: Rect, state: &AppState, styles: &AppStyles) {
    let total_pages = state.total_pages();
    if total_pages == 0 {
        return;
    }

    let page = state.current_page;
    let total = state.results.total_results;
    let first = (page - 1) * PAGE_SIZE + 1;
    let last = (first + state.results.records.len()).saturating_sub(1);

    let prev_style = if page > 1 {
        ratatui::style::Style::default()
    } else {
        styles.muted
    };
    let next_style = if page < total_pages {
        ratatui::style::Style::default()
    } else {
        styles.muted
    };

    let bar = Line::from(vec![
        Span::styled("[p] Previous", prev_style),
        Span::raw("   "),
        Span::raw(format!("Page {page} of {total_pages}")),
        Span::styled(format!("  ·  Showing {first}–{last} of {total}"), styles.muted),
        Span::raw("   "),
        Span::styled("[n] Next", next_style),
    ]);

    frame.render_widget(Paragraph::new(bar).alignment(Alignment::Center), area);
}
