//! Event handling and state transitions.
//!
//! Every user input and every host callback arrives as an [`Event`]. The
//! handler mutates [`AppState`] and returns the [`Action`]s the runtime must
//! perform. Network calls are never made here: a fetch, a submission or a
//! redirect is an [`Action::Send`], and its outcome comes back later as
//! [`Event::Api`].
//!
//! Failures never escape. Transport errors, failure statuses, malformed
//! bodies and configuration problems all end up in the notification slot.
//!
//! # Example
//!
//! ```
//! use zshort::api::{ApiClient, ApiRequest};
//! use zshort::app::{handle_event, Action, AppState, Event};
//! use zshort::ui::Theme;
//!
//! let mut state = AppState::new(ApiClient::new("https://sho.rt", None), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Refresh);
//! assert_eq!(actions, vec![Action::Send(ApiRequest::FetchUrls)]);
//! ```

use super::modes::InputMode;
use super::{Action, AppState};
use crate::api::{is_web_url, ApiRequest, ApiResponse};

/// Events produced by key presses and host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection down (wraps to the top).
    KeyDown,
    /// Moves the selection up (wraps to the bottom).
    KeyUp,
    /// Focuses the URL input.
    EditInput,
    /// Returns to the table, keeping the input text.
    LeaveEditing,
    /// Appends a character to the input.
    Char(char),
    /// Removes the last character of the input.
    Backspace,
    /// Submits the input for shortening.
    Submit,
    /// Follows the selected record's short link.
    FollowSelected,
    /// Re-fetches the record list.
    Refresh,
    /// Hides the current notification.
    DismissNotification,
    /// Hides the plugin pane.
    CloseFocus,

    /// The user granted the requested permissions.
    PermissionsGranted,
    /// The user denied the requested permissions.
    PermissionsDenied,

    /// A backend operation completed, successfully or not.
    Api(ApiResponse),

    /// A backend operation could not be issued at all.
    RequestFailed {
        request: ApiRequest,
        reason: String,
    },

    /// The opener command for a resolved URL exited with an error.
    OpenFailed {
        url: String,
        reason: String,
    },
}

/// Processes one event.
///
/// Returns whether the UI must be re-rendered and the actions to run, in
/// order.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::EditInput => {
            state.input_mode = InputMode::Editing;
            (true, vec![])
        }
        Event::LeaveEditing => {
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Editing {
                return (false, vec![]);
            }
            state.input.push(*c);
            tracing::trace!(input_len = state.input.len(), "input updated");
            (true, vec![])
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Editing || state.input.pop().is_none() {
                return (false, vec![]);
            }
            (true, vec![])
        }
        Event::Submit => submit(state),
        Event::FollowSelected => follow_selected(state),
        Event::Refresh | Event::PermissionsGranted => fetch(state),
        Event::DismissNotification => {
            if !state.notifier.is_visible() {
                return (false, vec![]);
            }
            state.notifier.clear();
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::PermissionsDenied => {
            tracing::warn!("permissions denied");
            state
                .notifier
                .error("Permissions denied: web access and running commands are required");
            (true, vec![])
        }
        Event::Api(response) => (true, apply_response(state, response)),
        Event::RequestFailed { request, reason } => {
            tracing::warn!(op = request.name(), reason = %reason, "request could not be issued");
            match request {
                ApiRequest::FetchUrls => state.replace_records(vec![]),
                ApiRequest::Shorten { .. } => state.submitting = false,
                ApiRequest::Redirect { .. } => {}
            }
            state.notifier.error(reason.clone());
            (true, vec![])
        }
        Event::OpenFailed { url, reason } => {
            tracing::warn!(url = %url, reason = %reason, "opener failed");
            state.notifier.error(format!("Could not open {url}: {reason}"));
            (true, vec![])
        }
    }
}

/// Emits a list fetch, or reports why the backend cannot be reached.
fn fetch(state: &mut AppState) -> (bool, Vec<Action>) {
    if !require_backend(state) {
        return (true, vec![]);
    }
    (false, vec![Action::refetch()])
}

/// Reports a missing backend through the notifier.
fn require_backend(state: &mut AppState) -> bool {
    match state.backend().map(|_| ()) {
        Ok(()) => true,
        Err(e) => {
            state.notifier.error(e.to_string());
            false
        }
    }
}

fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.submitting {
        tracing::debug!("submission rejected: another one is in flight");
        return (false, vec![]);
    }

    let url = state.input.trim().to_string();
    if url.is_empty() {
        return (false, vec![]);
    }

    if !is_web_url(&url) {
        state.notifier.error(format!("Not a valid http(s) URL: {url}"));
        return (true, vec![]);
    }

    if !require_backend(state) {
        return (true, vec![]);
    }

    let request = ApiRequest::Shorten { url };
    state.submitting = true;
    tracing::debug!("submission started");
    (true, vec![Action::Send(request)])
}

fn follow_selected(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(record) = state.selected_record() else {
        tracing::debug!("no record selected");
        return (false, vec![]);
    };
    let short_code = record.short_code.clone();

    if !require_backend(state) {
        return (true, vec![]);
    }

    tracing::debug!(short_code = %short_code, "following short link");
    (false, vec![Action::Send(ApiRequest::Redirect { short_code })])
}

fn apply_response(state: &mut AppState, response: &ApiResponse) -> Vec<Action> {
    match response {
        ApiResponse::UrlsLoaded { records } => {
            tracing::debug!(count = records.len(), "record list replaced");
            state.replace_records(records.clone());
            vec![]
        }
        ApiResponse::UrlsFailed { reason } => {
            state.replace_records(vec![]);
            state.notifier.error(format!("Failed to load URLs: {reason}"));
            vec![]
        }
        ApiResponse::Shortened { record } => {
            state.submitting = false;
            state.input.clear();
            state.input_mode = InputMode::Normal;

            let message = record.as_ref().map_or_else(
                || "URL shortened successfully".to_string(),
                |record| {
                    let base = state.client.as_ref().map_or("", |client| client.base_url());
                    format!("Shortened to {}", record.short_link(base))
                },
            );
            state.notifier.success(message);
            vec![Action::refetch()]
        }
        ApiResponse::ShortenFailed { status, message } => {
            state.submitting = false;
            let message = message
                .clone()
                .unwrap_or_else(|| format!("Failed to shorten URL (HTTP {status})"));
            state.notifier.error(message);
            vec![]
        }
        ApiResponse::Resolved { short_code, original_url } => {
            tracing::debug!(short_code = %short_code, url = %original_url, "short link resolved");
            state.notifier.success(format!("Opening {original_url}"));
            vec![
                Action::OpenUrl {
                    url: original_url.clone(),
                },
                Action::refetch(),
            ]
        }
        ApiResponse::NotFound { short_code } => {
            tracing::debug!(short_code = %short_code, "short link has no original URL");
            state.notifier.error("URL not found");
            vec![]
        }
        ApiResponse::RedirectFailed { short_code, reason } => {
            tracing::debug!(short_code = %short_code, reason = %reason, "redirect failed");
            state.notifier.error(format!("Failed to open {short_code}: {reason}"));
            vec![]
        }
    }
}
