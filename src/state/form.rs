//! Filter form state and editing.
//!
//! The form owns the raw text the user typed; it is converted into a
//! [`SearchFilters`] value at submit time. Select-backed fields (court type,
//! county, status) cycle through their fixed option sets, with `None`
//! meaning "All".

use crate::model::{CourtType, SearchFilters, CASE_STATUSES, COUNTIES};
use chrono::NaiveDate;
use tracing::warn;

/// One field of the filter form, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Party name free-text search.
    Name,
    /// Case number free-text filter.
    CaseNumber,
    /// Court type select.
    CourtType,
    /// County select.
    County,
    /// Status select.
    Status,
    /// Start date (YYYY-MM-DD).
    StartDate,
    /// End date (YYYY-MM-DD).
    EndDate,
}

impl FormField {
    /// All fields in traversal order.
    pub const ORDER: [FormField; 7] = [
        FormField::Name,
        FormField::CaseNumber,
        FormField::CourtType,
        FormField::County,
        FormField::Status,
        FormField::StartDate,
        FormField::EndDate,
    ];

    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Party Name",
            FormField::CaseNumber => "Case Number",
            FormField::CourtType => "Court Type",
            FormField::County => "County",
            FormField::Status => "Status",
            FormField::StartDate => "Start Date",
            FormField::EndDate => "End Date",
        }
    }

    /// Whether the field takes typed text (as opposed to cycling options).
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::CaseNumber | FormField::StartDate | FormField::EndDate
        )
    }
}

/// Mutable filter form state.
///
/// Owned by [`crate::state::AppState`]; mutated only by direct user input.
/// There is deliberately no clear-all operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    /// Which field currently has the edit cursor.
    pub focused_field: usize,
    /// Party name text.
    pub name: String,
    /// Case number text.
    pub case_number: String,
    /// Selected court type; `None` is "All Courts".
    pub court_type: Option<CourtType>,
    /// Selected county; `None` is "All Counties".
    pub county: Option<&'static str>,
    /// Selected status; `None` is "All Status".
    pub status: Option<&'static str>,
    /// Start date text, parsed at submit.
    pub start_date: String,
    /// End date text, parsed at submit.
    pub end_date: String,
}

impl FilterForm {
    /// The field that currently has the edit cursor.
    pub fn focused(&self) -> FormField {
        FormField::ORDER[self.focused_field]
    }

    /// Move the cursor to the next field, wrapping at the end.
    pub fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % FormField::ORDER.len();
    }

    /// Move the cursor to the previous field, wrapping at the start.
    pub fn prev_field(&mut self) {
        self.focused_field = self
            .focused_field
            .checked_sub(1)
            .unwrap_or(FormField::ORDER.len() - 1);
    }

    /// Append a character to the focused text field. No-op on selects.
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        match self.focused() {
            FormField::Name => self.name.push(ch),
            FormField::CaseNumber => self.case_number.push(ch),
            FormField::StartDate => self.start_date.push(ch),
            FormField::EndDate => self.end_date.push(ch),
            FormField::CourtType | FormField::County | FormField::Status => {}
        }
    }

    /// Delete the last character of the focused text field. No-op on selects.
    pub fn backspace(&mut self) {
        match self.focused() {
            FormField::Name => {
                self.name.pop();
            }
            FormField::CaseNumber => {
                self.case_number.pop();
            }
            FormField::StartDate => {
                self.start_date.pop();
            }
            FormField::EndDate => {
                self.end_date.pop();
            }
            FormField::CourtType | FormField::County | FormField::Status => {}
        }
    }

    /// Cycle the focused select field forward (`step = 1`) or backward
    /// (`step = -1`) through All → option₁ → … → optionₙ → All.
    pub fn cycle_option(&mut self, step: i8) {
        match self.focused() {
            FormField::CourtType => {
                self.court_type = cycle(&CourtType::ALL, self.court_type, step);
            }
            FormField::County => {
                self.county = cycle(COUNTIES, self.county, step);
            }
            FormField::Status => {
                self.status = cycle(CASE_STATUSES, self.status, step);
            }
            _ => {}
        }
    }

    /// Displayed value of a field, with "All …" placeholders for selects.
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::CaseNumber => self.case_number.clone(),
            FormField::CourtType => self
                .court_type
                .map(|ct| ct.to_string())
                .unwrap_or_else(|| "All Courts".to_string()),
            FormField::County => self
                .county
                .map(str::to_string)
                .unwrap_or_else(|| "All Counties".to_string()),
            FormField::Status => self
                .status
                .map(str::to_string)
                .unwrap_or_else(|| "All Status".to_string()),
            FormField::StartDate => self.start_date.clone(),
            FormField::EndDate => self.end_date.clone(),
        }
    }

    /// Convert the form into the filter set a search is issued with.
    ///
    /// Blank text fields become `None`. Date text that does not parse as
    /// YYYY-MM-DD is treated as unset and logged.
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters {
            name: non_blank(&self.name),
            case_number: non_blank(&self.case_number),
            county: self.county.map(str::to_string),
            status: self.status.map(str::to_string),
            court_type: self.court_type,
            start_date: parse_date(&self.start_date, "start date"),
            end_date: parse_date(&self.end_date, "end date"),
        }
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_date(text: &str, which: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<NaiveDate>() {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(input = trimmed, "ignoring unparseable {which} filter");
            None
        }
    }
}

/// Cycle an optional selection through `None` and the option list.
fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, step: i8) -> Option<T> {
    // Positions: 0 = None ("All"), 1..=len = options.
    let len = options.len();
    let position = match current {
        None => 0,
        Some(value) => options.iter().position(|o| *o == value).map_or(0, |i| i + 1),
    };
    let next = if step >= 0 {
        (position + 1) % (len + 1)
    } else {
        position.checked_sub(1).unwrap_or(len)
    };
    if next == 0 {
        None
    } else {
        Some(options[next - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_traversal_wraps_in_both_directions() {
        let mut form = FilterForm::default();
        assert_eq!(form.focused(), FormField::Name);
        form.prev_field();
        assert_eq!(form.focused(), FormField::EndDate);
        form.next_field();
        assert_eq!(form.focused(), FormField::Name);
    }

    #[test]
    fn typing_edits_only_the_focused_text_field() {
        let mut form = FilterForm::default();
        form.insert_char('d');
        form.insert_char('o');
        form.insert_char('e');
        assert_eq!(form.name, "doe");
        assert_eq!(form.case_number, "");

        form.backspace();
        assert_eq!(form.name, "do");
    }

    #[test]
    fn typing_into_a_select_is_ignored() {
        let mut form = FilterForm {
            focused_field: 2, // CourtType
            ..Default::default()
        };
        form.insert_char('x');
        form.backspace();
        assert_eq!(form.court_type, None);
    }

    #[test]
    fn select_cycles_through_all_options_and_back_to_all() {
        let mut form = FilterForm {
            focused_field: 3, // County
            ..Default::default()
        };
        assert_eq!(form.county, None);
        form.cycle_option(1);
        assert_eq!(form.county, Some("Adams"));
        form.cycle_option(1);
        assert_eq!(form.county, Some("Franklin"));
        form.cycle_option(1);
        assert_eq!(form.county, Some("Hamilton"));
        form.cycle_option(1);
        assert_eq!(form.county, None);
        form.cycle_option(-1);
        assert_eq!(form.county, Some("Hamilton"));
    }

    #[test]
    fn to_filters_drops_blank_text() {
        let form = FilterForm {
            name: "  ".to_string(),
            case_number: " 2024-CV ".to_string(),
            ..Default::default()
        };
        let filters = form.to_filters();
        assert_eq!(filters.name, None);
        assert_eq!(filters.case_number, Some("2024-CV".to_string()));
    }

    #[test]
    fn to_filters_parses_valid_dates_and_ignores_garbage() {
        let form = FilterForm {
            start_date: "2024-01-15".to_string(),
            end_date: "not a date".to_string(),
            ..Default::default()
        };
        let filters = form.to_filters();
        assert_eq!(filters.start_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(filters.end_date, None);
    }

    #[test]
    fn display_value_shows_all_placeholders_for_unset_selects() {
        let form = FilterForm::default();
        assert_eq!(form.display_value(FormField::CourtType), "All Courts");
        assert_eq!(form.display_value(FormField::County), "All Counties");
        assert_eq!(form.display_value(FormField::Status), "All Status");
    }
}
