//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Filter form
    /// Move to the next filter form field. Default: ↓
    NextField,
    /// Move to the previous filter form field. Default: ↑/Shift+Tab
    PrevField,
    /// Cycle a select-backed field forward (court type, county, status). Default: →
    NextOption,
    /// Cycle a select-backed field backward. Default: ←
    PrevOption,
    /// Submit the current filter set as a fresh page-1 search. Default: Enter
    Submit,

    // Result list
    /// Highlight the next result card. Default: j
    NextResult,
    /// Highlight the previous result card. Default: k
    PrevResult,
    /// Open the detail overlay for the highlighted record. Default: Enter/o
    OpenDetail,
    /// Request an AI summary (opens the detail overlay from the list). Default: s
    Summarize,
    /// Go to the next result page. Default: n/]
    NextPage,
    /// Go to the previous result page. Default: p/[
    PrevPage,

    // Focus
    /// Focus the filter form. Default: 1
    FocusForm,
    /// Focus the result list. Default: 2
    FocusResults,
    /// Cycle focus between form and results. Default: Tab
    CycleFocus,

    // Overlays
    /// Close the topmost overlay (detail or help). Default: Esc
    CloseOverlay,
    /// Toggle the help overlay. Default: ?
    Help,

    // Application
    /// Exit the application. Default: q/Ctrl+C
    Quit,
}
