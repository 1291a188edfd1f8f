//! Layout dimension constants for TUI rendering.

/// Height of the header bar in lines (border + title).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the filter form pane in columns.
pub const FORM_PANE_WIDTH: u16 = 36;

/// Height of the pagination bar inside the results pane.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Width percentage for the detail overlay.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 80;

/// Height percentage for the detail overlay.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for the help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
