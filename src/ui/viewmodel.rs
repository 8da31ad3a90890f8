//! Display-ready snapshot of the application state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold no logic: text is already truncated to the column
//! widths and every optional element is either present or `None`.

use crate::domain::NotificationKind;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Visible window of table rows.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// URL input box, always shown.
    pub input_bar: InputBarInfo,

    /// Notification banner below the input box, if one is visible.
    pub notification: Option<NotificationBanner>,

    /// Widths of the table's text columns.
    pub columns: ColumnWidths,

    /// Shown in place of the table rows when there are no records.
    pub empty_state: Option<EmptyState>,
}

/// One shortened URL as a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Original URL, truncated to the ORIGINAL column.
    pub original_url: String,

    /// Full short link, truncated to the SHORT LINK column.
    pub short_link: String,

    pub clicks: u64,

    pub is_selected: bool,
}

/// Column widths in character cells. The CLICKS column has a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub original: usize,
    pub short_link: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding hints for the current input mode.
    pub keybindings: String,
}

/// State of the URL input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBarInfo {
    /// Text typed so far.
    pub text: String,

    /// Whether the input has keyboard focus.
    pub focused: bool,

    /// Label of the submit button: `Shorten`, or `Shortening...` while a
    /// submission is in flight.
    pub button_label: String,
}

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationBanner {
    pub message: String,
    pub kind: NotificationKind,
}

/// Message shown when the table has nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
