//! End-to-end flows through the plugin's library layer.
//!
//! A small fake host stands in for Zellij: it turns `Action::Send` into the
//! built HTTP request, answers it with a canned status and body, echoes the
//! context map back like `WebRequestResult` does, and feeds the decoded
//! response into the handler.

use std::collections::{BTreeMap, VecDeque};
use zshort::api::{HttpMethod, HttpRequest, RequestContext};
use zshort::domain::NotificationKind;
use zshort::{handle_event, initialize, Action, ApiRequest, ApiResponse, AppState, Config, Event};

// =============================================================================
// Fake host
// =============================================================================

struct FakeHost {
    state: AppState,
    /// Requests issued so far, in order.
    sent: Vec<HttpRequest>,
    /// URLs handed to the opener.
    opened: Vec<String>,
    /// Requests waiting for a reply.
    in_flight: VecDeque<HttpRequest>,
}

impl FakeHost {
    fn new() -> Self {
        let mut options = BTreeMap::new();
        options.insert("api_url".to_string(), "https://sho.rt/api/".to_string());
        options.insert("api_key".to_string(), "secret".to_string());

        Self {
            state: initialize(&Config::from_zellij(&options)),
            sent: Vec::new(),
            opened: Vec::new(),
            in_flight: VecDeque::new(),
        }
    }

    fn dispatch(&mut self, event: Event) {
        let (_, actions) = handle_event(&mut self.state, &event);
        for action in actions {
            match action {
                Action::Send(request) => {
                    let http = self.state.build_request(&request).unwrap();
                    self.sent.push(http.clone());
                    self.in_flight.push_back(http);
                }
                Action::OpenUrl { url } => self.opened.push(url),
                Action::CloseFocus => {}
            }
        }
    }

    /// Answers the oldest in-flight request.
    fn reply(&mut self, status: u16, body: &str) {
        let http = self.in_flight.pop_front().expect("no request in flight");
        let context = RequestContext::from_map(&http.context).unwrap();
        let response = ApiResponse::decode(&context.request, status, body.as_bytes());
        self.dispatch(Event::Api(response));
    }

    fn type_url(&mut self, url: &str) {
        self.dispatch(Event::EditInput);
        for c in url.chars() {
            self.dispatch(Event::Char(c));
        }
    }

    fn notification(&self) -> (&str, NotificationKind) {
        let current = self.state.notifier.current();
        (current.message.as_str(), current.kind)
    }
}

const TWO_RECORDS: &str = r#"[
    {"id":1,"originalUrl":"https://rust-lang.org","shortCode":"rust","clicks":4},
    {"id":2,"originalUrl":"https://zellij.dev","shortCode":"zj","clicks":0}
]"#;

// =============================================================================
// Fetcher
// =============================================================================

#[test]
fn permission_grant_loads_the_list() {
    let mut host = FakeHost::new();
    host.dispatch(Event::PermissionsGranted);

    assert_eq!(host.sent.len(), 1);
    let request = &host.sent[0];
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "https://sho.rt/api/urls");
    assert_eq!(request.headers["Authorization"], "Bearer secret");

    host.reply(200, TWO_RECORDS);
    assert_eq!(host.state.records.len(), 2);
    assert_eq!(host.state.records[0].short_code, "rust");
}

#[test]
fn envelope_and_bare_lists_populate_identically() {
    let mut bare = FakeHost::new();
    bare.dispatch(Event::Refresh);
    bare.reply(200, TWO_RECORDS);

    let mut enveloped = FakeHost::new();
    enveloped.dispatch(Event::Refresh);
    enveloped.reply(200, &format!(r#"{{"total":2,"urls":{TWO_RECORDS}}}"#));

    assert_eq!(bare.state.records, enveloped.state.records);
}

#[test]
fn null_urls_yield_an_empty_list_and_an_error() {
    let mut host = FakeHost::new();
    host.dispatch(Event::Refresh);
    host.reply(200, TWO_RECORDS);

    host.dispatch(Event::Refresh);
    host.reply(200, r#"{"urls":null}"#);

    assert!(host.state.records.is_empty());
    assert_eq!(host.notification().1, NotificationKind::Error);

    let vm = host.state.compute_viewmodel(24, 80);
    assert_eq!(vm.empty_state.unwrap().message, "No URLs shortened yet");
}

#[test]
fn last_fetch_response_wins() {
    let mut host = FakeHost::new();
    host.dispatch(Event::Refresh);
    host.dispatch(Event::Refresh);

    host.reply(200, TWO_RECORDS);
    host.reply(200, "[]");

    assert!(host.state.records.is_empty());
}

// =============================================================================
// Submitter
// =============================================================================

#[test]
fn empty_submission_sends_nothing_and_changes_nothing() {
    let mut host = FakeHost::new();
    host.dispatch(Event::EditInput);
    host.dispatch(Event::Submit);

    assert!(host.sent.is_empty());
    assert!(!host.state.submitting);
    assert!(!host.state.notifier.is_visible());
}

#[test]
fn successful_submission_clears_input_and_fetches_once() {
    let mut host = FakeHost::new();
    host.type_url("https://example.com/some/long/path");
    host.dispatch(Event::Submit);

    assert!(host.state.submitting);
    let shorten = &host.sent[0];
    assert_eq!(shorten.method, HttpMethod::Post);
    assert_eq!(shorten.url, "https://sho.rt/api/shorten");
    assert_eq!(shorten.headers["Content-Type"], "application/json");
    let body: serde_json::Value = serde_json::from_slice(&shorten.body).unwrap();
    assert_eq!(body, serde_json::json!({ "url": "https://example.com/some/long/path" }));

    host.reply(
        201,
        r#"{"id":7,"originalUrl":"https://example.com/some/long/path","shortCode":"x7","clicks":0}"#,
    );

    assert!(!host.state.submitting);
    assert!(host.state.input.is_empty());
    assert_eq!(host.notification(), ("Shortened to https://sho.rt/api/redirect/x7", NotificationKind::Success));

    let fetches: Vec<_> = host.sent[1..].iter().filter(|r| r.url.ends_with("/urls")).collect();
    assert_eq!(host.sent.len(), 2);
    assert_eq!(fetches.len(), 1);
}

#[test]
fn failed_submission_keeps_input_and_shows_backend_message() {
    let mut host = FakeHost::new();
    host.type_url("https://example.com");
    host.dispatch(Event::Submit);
    host.reply(409, r#"{"message":{"message":"URL already shortened"}}"#);

    assert_eq!(host.state.input, "https://example.com");
    assert!(!host.state.submitting);
    assert_eq!(host.notification(), ("URL already shortened", NotificationKind::Error));
    assert_eq!(host.sent.len(), 1);
}

#[test]
fn busy_flag_spans_exactly_one_submission() {
    let mut host = FakeHost::new();
    host.type_url("https://example.com");
    assert!(!host.state.submitting);

    host.dispatch(Event::Submit);
    assert!(host.state.submitting);
    assert_eq!(host.state.compute_viewmodel(24, 80).input_bar.button_label, "Shortening...");

    host.dispatch(Event::Submit);
    assert_eq!(host.sent.len(), 1);

    host.reply(500, "");
    assert!(!host.state.submitting);

    host.dispatch(Event::Submit);
    assert_eq!(host.sent.len(), 2);
}

// =============================================================================
// Redirector
// =============================================================================

#[test]
fn following_a_link_opens_it_once_and_refreshes_clicks() {
    let mut host = FakeHost::new();
    host.dispatch(Event::Refresh);
    host.reply(200, TWO_RECORDS);

    host.dispatch(Event::KeyDown);
    host.dispatch(Event::FollowSelected);
    assert_eq!(host.sent.last().unwrap().url, "https://sho.rt/api/redirect/zj");

    host.reply(200, r#"{"originalUrl":"https://zellij.dev"}"#);
    assert_eq!(host.opened, vec!["https://zellij.dev".to_string()]);
    assert!(host.sent.last().unwrap().url.ends_with("/urls"));

    host.reply(
        200,
        r#"[{"id":1,"originalUrl":"https://rust-lang.org","shortCode":"rust","clicks":4},
            {"id":2,"originalUrl":"https://zellij.dev","shortCode":"zj","clicks":1}]"#,
    );
    assert_eq!(host.state.records[1].clicks, 1);
    assert_eq!(host.state.selected_index, 1);
}

#[test]
fn unknown_short_code_opens_nothing() {
    let mut host = FakeHost::new();
    host.dispatch(Event::Refresh);
    host.reply(200, TWO_RECORDS);

    host.dispatch(Event::FollowSelected);
    host.reply(200, r#"{"error":"gone"}"#);

    assert!(host.opened.is_empty());
    assert_eq!(host.notification(), ("URL not found", NotificationKind::Error));
    assert!(host.in_flight.is_empty());
}

#[test]
fn non_web_original_url_never_reaches_the_opener() {
    let mut host = FakeHost::new();
    host.dispatch(Event::Refresh);
    host.reply(200, TWO_RECORDS);
    let sent_before = host.sent.len();

    host.dispatch(Event::FollowSelected);
    host.reply(200, r#"{"originalUrl":"--help"}"#);

    assert!(host.opened.is_empty());
    assert_eq!(host.sent.len(), sent_before + 1);
    let (message, kind) = host.notification();
    assert_eq!(kind, NotificationKind::Error);
    assert!(message.contains("--help"));
}

#[test]
fn redirect_transport_failure_is_reported_without_follow_up() {
    let mut host = FakeHost::new();
    host.dispatch(Event::Refresh);
    host.reply(200, TWO_RECORDS);
    let sent_before = host.sent.len();

    host.dispatch(Event::FollowSelected);
    host.reply(502, "<html>Bad gateway</html>");

    assert!(host.opened.is_empty());
    assert_eq!(host.sent.len(), sent_before + 1);
    assert_eq!(host.notification().1, NotificationKind::Error);
}

// =============================================================================
// Notifier
// =============================================================================

#[test]
fn dismissing_hides_the_banner() {
    let mut host = FakeHost::new();
    host.dispatch(Event::Refresh);
    host.reply(500, r#"{"message":"database down"}"#);

    let banner = host.state.compute_viewmodel(24, 80).notification.unwrap();
    assert!(banner.message.contains("database down"));

    host.dispatch(Event::DismissNotification);
    assert!(host.state.compute_viewmodel(24, 80).notification.is_none());
}

#[test]
fn unconfigured_plugin_explains_itself() {
    let config = Config {
        api_url: None,
        ..Config::default()
    };
    let mut state = initialize(&config);

    let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted);
    assert!(actions.is_empty());
    assert!(state.notifier.current().message.contains("api_url"));
    assert!(state.build_request(&ApiRequest::FetchUrls).is_err());
}
