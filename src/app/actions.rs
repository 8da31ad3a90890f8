//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) never talks to Zellij. It returns
//! `Action`s and the plugin runtime in `main.rs` performs them, which keeps
//! every network call and follow-up fetch visible to tests.

use crate::api::ApiRequest;

/// Commands executed by the plugin runtime after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues a backend operation through Zellij's `web_request`.
    ///
    /// The response comes back later as an
    /// [`Event::Api`](super::Event::Api) carrying the decoded outcome.
    Send(ApiRequest),

    /// Opens an original URL with the configured opener command.
    OpenUrl {
        /// URL returned by the backend's redirect endpoint.
        url: String,
    },

    /// Hides the plugin pane.
    CloseFocus,
}

impl Action {
    /// The list re-fetch issued after every successful mutation.
    #[must_use]
    pub const fn refetch() -> Self {
        Self::Send(ApiRequest::FetchUrls)
    }
}
