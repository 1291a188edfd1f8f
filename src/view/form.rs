//! Filter form pane rendering.

use crate::state::{AppState, Focus, FormField};
use crate::view::styles::AppStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the filter form pane.
///
/// One line per field: label column, then the current value. The field
/// under the edit cursor is highlighted when the form has focus; select
/// fields show `◂ value ▸` to signal they cycle rather than take text.
pub fn render_form(frame: &mut Frame, area: Rect, state: &AppState, styles: &AppStyles) {
    let form_focused = state.focus == Focus::Form;
    let border = if form_focused {
        styles.focused_border
    } else {
        styles.border
    };

    let mut lines: Vec<Line> = Vec::with_capacity(FormField::ORDER.len() * 2 + 2);
    for field in FormField::ORDER {
        let is_focused = form_focused && state.form.focused() == field;
        let value = state.form.display_value(field);

        let value_span = if field.is_text() {
            let shown = if is_focused {
                format!("{value}_")
            } else if value.is_empty() {
                placeholder(field).to_string()
            } else {
                value
            };
            let style = if is_focused {
                styles.focused_field
            } else if state.form.display_value(field).is_empty() {
                styles.muted
            } else {
                ratatui::style::Style::default()
            };
            Span::styled(shown, style)
        } else {
            let shown = format!("◂ {value} ▸");
            let style = if is_focused {
                styles.focused_field
            } else {
                ratatui::style::Style::default()
            };
            Span::styled(shown, style)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", field.label()), styles.label),
            value_span,
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        " Enter: search   ↑/↓: move",
        styles.muted,
    )));

    let block = Block::default()
        .title(" Search Filters ")
        .title_style(styles.title)
        .borders(Borders::ALL)
        .border_style(border);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => "e.g. Smith",
        FormField::CaseNumber => "e.g. 2024-CV-0001",
        FormField::StartDate | FormField::EndDate => "YYYY-MM-DD",
        _ => "",
    }
}
