//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the last fetched
//! record list, the table selection, the URL input, the busy flag of the
//! submitter and the notification slot. The event handler mutates it; the
//! renderer only sees the [`UIViewModel`] computed from it.
//!
//! # Example
//!
//! ```
//! use zshort::app::AppState;
//! use zshort::api::ApiClient;
//! use zshort::ui::Theme;
//!
//! let client = ApiClient::new("https://sho.rt", None);
//! let state = AppState::new(client, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::modes::InputMode;
use crate::api::{ApiClient, ApiRequest, HttpRequest};
use crate::domain::error::{Result, ZshortError};
use crate::domain::{Notifier, ShortenedUrlRecord};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnWidths, DisplayItem, EmptyState, FooterInfo, HeaderInfo, InputBarInfo, NotificationBanner, UIViewModel,
};

/// Width of the CLICKS column, including its leading gap.
pub const CLICKS_COLUMN_WIDTH: usize = 8;

/// Rows taken by everything except the table body: blank line, header,
/// border, input box (3), notification line, table headers, border, footer.
const CHROME_ROWS: usize = 10;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Records from the last completed fetch, in backend order.
    pub records: Vec<ShortenedUrlRecord>,

    /// Index of the selected record. Always 0 when `records` is empty.
    pub selected_index: usize,

    /// Contents of the URL input box.
    pub input: String,

    pub input_mode: InputMode,

    /// Busy flag of the submitter: `true` from the moment a shorten request
    /// is emitted until its outcome has been handled.
    pub submitting: bool,

    /// The single notification slot.
    pub notifier: Notifier,

    /// Request builder for the configured backend. `None` when `api_url` is
    /// missing or invalid.
    pub client: Option<ApiClient>,

    /// Why `client` is `None`.
    pub config_error: Option<String>,

    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state. A client error is kept and reported each
    /// time an operation needs the backend.
    #[must_use]
    pub fn new(client: Result<ApiClient>, theme: Theme) -> Self {
        let (client, config_error) = match client {
            Ok(client) => (Some(client), None),
            Err(e) => {
                tracing::warn!(error = %e, "backend not configured");
                let reason = match e {
                    ZshortError::Config(reason) => reason,
                    other => other.to_string(),
                };
                (None, Some(reason))
            }
        };

        Self {
            records: Vec::new(),
            selected_index: 0,
            input: String::new(),
            input_mode: InputMode::Normal,
            submitting: false,
            notifier: Notifier::default(),
            client,
            config_error,
            theme,
        }
    }

    /// Returns the backend client.
    ///
    /// # Errors
    ///
    /// Returns [`ZshortError::Config`] if no usable `api_url` was configured.
    pub fn backend(&self) -> Result<&ApiClient> {
        self.client.as_ref().ok_or_else(|| {
            ZshortError::Config(
                self.config_error
                    .clone()
                    .unwrap_or_else(|| "api_url is not configured".to_string()),
            )
        })
    }

    /// Builds the host request for an operation emitted by the handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is not configured or the request
    /// cannot be built.
    pub fn build_request(&self, request: &ApiRequest) -> Result<HttpRequest> {
        self.backend()?.build(request)
    }

    /// Replaces the record list and keeps the selection in bounds.
    pub fn replace_records(&mut self, records: Vec<ShortenedUrlRecord>) {
        self.records = records;
        self.selected_index = if self.records.is_empty() {
            0
        } else {
            self.selected_index.min(self.records.len() - 1)
        };
    }

    /// Moves the selection down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.records.len();
    }

    /// Moves the selection up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.records.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.records.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&ShortenedUrlRecord> {
        self.records.get(self.selected_index)
    }

    /// Base URL used to display short links.
    fn api_base(&self) -> &str {
        self.client.as_ref().map_or("", ApiClient::base_url)
    }

    /// Computes the view model for a pane of `rows` x `cols` cells.
    ///
    /// The visible window is centered on the selection and shifted back when
    /// it would run past the end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let columns = Self::column_widths(cols);

        let (display_items, selected_index, empty_state) = if self.records.is_empty() {
            (vec![], 0, Some(self.compute_empty_state()))
        } else {
            let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

            let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
            let visible_end = (visible_start + available_rows).min(self.records.len());
            if visible_end - visible_start < available_rows {
                visible_start = visible_end.saturating_sub(available_rows);
            }

            let items = self.records[visible_start..visible_end]
                .iter()
                .enumerate()
                .map(|(offset, record)| self.compute_display_item(record, visible_start + offset, columns))
                .collect();

            (items, self.selected_index - visible_start, None)
        };

        UIViewModel {
            display_items,
            selected_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            input_bar: self.compute_input_bar(),
            notification: self.compute_notification(),
            columns,
            empty_state,
        }
    }

    fn column_widths(cols: usize) -> ColumnWidths {
        let text_width = cols.saturating_sub(CLICKS_COLUMN_WIDTH + 1);
        let original = text_width * 3 / 5;
        ColumnWidths {
            original,
            short_link: text_width - original,
        }
    }

    fn compute_display_item(&self, record: &ShortenedUrlRecord, absolute_idx: usize, columns: ColumnWidths) -> DisplayItem {
        DisplayItem {
            original_url: truncate(&record.original_url, columns.original.saturating_sub(2)),
            short_link: truncate(&record.short_link(self.api_base()), columns.short_link.saturating_sub(1)),
            clicks: record.clicks,
            is_selected: absolute_idx == self.selected_index,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Shortened URLs ({}) ", self.records.len()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => "j/k: navigate  Enter: open  i: new URL  r: refresh  x: dismiss  q: hide",
            InputMode::Editing => "Enter: shorten  Esc: back to list  Type the URL to shorten",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_input_bar(&self) -> InputBarInfo {
        InputBarInfo {
            text: self.input.clone(),
            focused: self.input_mode == InputMode::Editing,
            button_label: if self.submitting { "Shortening..." } else { "Shorten" }.to_string(),
        }
    }

    fn compute_notification(&self) -> Option<NotificationBanner> {
        let current = self.notifier.current();
        current.visible.then(|| NotificationBanner {
            message: current.message.clone(),
            kind: current.kind,
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        let subtitle = if self.client.is_some() {
            "Press i to shorten your first URL"
        } else {
            "Set api_url in the plugin configuration"
        };
        EmptyState {
            message: "No URLs shortened yet".to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationKind;

    fn record(id: i64) -> ShortenedUrlRecord {
        ShortenedUrlRecord {
            id,
            original_url: format!("https://example.com/{id}"),
            short_code: format!("c{id}"),
            clicks: u64::try_from(id).unwrap(),
        }
    }

    fn state_with(count: i64) -> AppState {
        let mut state = AppState::new(ApiClient::new("https://sho.rt", None), Theme::default());
        state.replace_records((0..count).map(record).collect());
        state
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with(3);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_clamped_when_list_shrinks() {
        let mut state = state_with(5);
        state.selected_index = 4;
        state.replace_records(vec![record(1), record(2)]);
        assert_eq!(state.selected_index, 1);

        state.replace_records(vec![]);
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_record().is_none());
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let vm = state_with(0).compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, "No URLs shortened yet");
    }

    #[test]
    fn rows_carry_full_short_link_and_clicks() {
        let vm = state_with(2).compute_viewmodel(24, 120);
        assert_eq!(vm.display_items.len(), 2);
        assert_eq!(vm.display_items[1].short_link, "https://sho.rt/redirect/c1");
        assert_eq!(vm.display_items[1].clicks, 1);
        assert!(vm.display_items[0].is_selected);
    }

    #[test]
    fn window_follows_selection_to_the_end() {
        let mut state = state_with(50);
        state.selected_index = 49;
        let vm = state.compute_viewmodel(20, 80);

        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.selected_index, 9);
        assert!(vm.display_items[9].is_selected);
    }

    #[test]
    fn busy_flag_changes_button_label() {
        let mut state = state_with(0);
        assert_eq!(state.compute_viewmodel(24, 80).input_bar.button_label, "Shorten");
        state.submitting = true;
        assert_eq!(state.compute_viewmodel(24, 80).input_bar.button_label, "Shortening...");
    }

    #[test]
    fn notification_reaches_the_view_only_while_visible() {
        let mut state = state_with(0);
        assert!(state.compute_viewmodel(24, 80).notification.is_none());

        state.notifier.error("boom");
        let banner = state.compute_viewmodel(24, 80).notification.unwrap();
        assert_eq!(banner.kind, NotificationKind::Error);

        state.notifier.clear();
        assert!(state.compute_viewmodel(24, 80).notification.is_none());
    }

    #[test]
    fn missing_backend_is_a_config_error() {
        let state = AppState::new(Err(ZshortError::Config("api_url is not configured".into())), Theme::default());
        assert!(matches!(state.backend(), Err(ZshortError::Config(_))));
        assert!(state.build_request(&ApiRequest::FetchUrls).is_err());
    }
}
