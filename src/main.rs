//! Zellij plugin entry point.
//!
//! Thin shim between the zshort library and the Zellij host: it maps host
//! events to library `Event`s, runs `handle_event`, and performs the
//! returned `Action`s through host calls.
//!
//! # Event Mapping
//!
//! - `Key` → navigation, editing and command events
//! - `PermissionRequestResult` → `PermissionsGranted` / `PermissionsDenied`
//! - `WebRequestResult` → `Event::Api` decoded against the originating request
//! - `RunCommandResult` of the opener → `Event::OpenFailed` on a non-zero exit
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Follow the selected short link
//! - `i` or `/`: Edit the URL input
//! - `r`: Refresh
//! - `x`/`Esc`: Dismiss notification
//! - `q`: Hide plugin
//!
//! Editing mode:
//! - Printable keys: Edit the URL
//! - `Enter`: Shorten
//! - `Esc`: Back to the list, keeping the input
//!
//! # Native builds
//!
//! `register_plugin!` and the host shim only exist on `wasm` targets, where
//! the `zellij-tile` host functions link. A native build of this binary is a
//! stub `main` that prints how to build the plugin, so `cargo test` can build
//! the whole package on the host. All behavior lives in the library and is
//! tested there.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use plugin::State;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use zshort::api::{HttpMethod, HttpRequest, RequestContext};
    use zshort::{handle_event, Action, ApiResponse, Config, Event, InputMode};

    /// Context key marking a `run_command` call as an opener invocation.
    const COMMAND_KIND_KEY: &str = "zshort.command";
    const OPEN_COMMAND: &str = "open";
    const URL_KEY: &str = "zshort.url";

    /// Plugin state wrapper.
    pub struct State {
        app: zshort::AppState,
        opener: String,
    }

    impl Default for State {
        fn default() -> Self {
            let config = Config::default();
            Self {
                app: zshort::initialize(&config),
                opener: config.opener,
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            zshort::observability::init_tracing(&config);

            let _span = tracing::debug_span!("plugin_load").entered();

            self.app = zshort::initialize(&config);
            self.opener.clone_from(&config.opener);

            request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::RunCommandResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::event_name(&event);
            let span = tracing::debug_span!("plugin_update", otel.name = %format!("plugin_update::{event_name}"));
            let _guard = span.entered();

            match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => self.dispatch(&event),
                    None => false,
                },
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    let event = match status {
                        PermissionStatus::Granted => Event::PermissionsGranted,
                        PermissionStatus::Denied => Event::PermissionsDenied,
                    };
                    self.dispatch(&event)
                }
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    self.handle_web_response(status, &body, &context)
                }
                zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                    match Self::map_command_result(exit_code, &stderr, &context) {
                        Some(event) => self.dispatch(&event),
                        None => false,
                    }
                }
                _ => false,
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            zshort::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
                zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
                zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
                _ => "Other".to_string(),
            }
        }

        /// Runs the handler and performs its actions. Returns whether to render.
        fn dispatch(&mut self, event: &Event) -> bool {
            let (mut should_render, actions) = handle_event(&mut self.app, event);
            tracing::debug!(action_count = actions.len(), should_render, "event handled");

            for action in actions {
                should_render |= self.execute_action(&action);
            }
            should_render
        }

        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            if self.app.input_mode == InputMode::Editing {
                return match key.bare_key {
                    BareKey::Enter => Some(Event::Submit),
                    BareKey::Esc => Some(Event::LeaveEditing),
                    BareKey::Backspace => Some(Event::Backspace),
                    BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Some(Event::Char(c)),
                    _ => None,
                };
            }

            Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::FollowSelected,
                BareKey::Char('i' | '/') => Event::EditInput,
                BareKey::Char('r') => Event::Refresh,
                BareKey::Char('x') | BareKey::Esc => Event::DismissNotification,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            })
        }

        /// Decodes a web response against the request recorded in its context
        /// and handles it inside the trace that issued the request.
        fn handle_web_response(&mut self, status: u16, body: &[u8], context: &BTreeMap<String, String>) -> bool {
            let context = match RequestContext::from_map(context) {
                Ok(context) => context,
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring web response without request context");
                    return false;
                }
            };

            let _span = context.response_span(status).entered();

            let response = ApiResponse::decode(&context.request, status, body);
            self.dispatch(&Event::Api(response))
        }

        /// Maps the opener's exit status; results of other commands are ignored.
        fn map_command_result(exit_code: Option<i32>, stderr: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
            if context.get(COMMAND_KIND_KEY).map(String::as_str) != Some(OPEN_COMMAND) {
                return None;
            }
            if exit_code == Some(0) {
                tracing::debug!("opener finished");
                return None;
            }

            let stderr = String::from_utf8_lossy(stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                exit_code.map_or_else(|| "terminated by signal".to_string(), |code| format!("exit code {code}"))
            } else {
                stderr
            };

            Some(Event::OpenFailed {
                url: context.get(URL_KEY).cloned().unwrap_or_default(),
                reason,
            })
        }

        /// Performs one action. Returns `true` if it changed the state.
        #[tracing::instrument(level = "debug", skip(self))]
        fn execute_action(&mut self, action: &Action) -> bool {
            match action {
                Action::CloseFocus => {
                    hide_self();
                    false
                }
                Action::Send(request) => match self.app.build_request(request) {
                    Ok(http) => {
                        Self::send(http);
                        false
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, op = request.name(), "failed to build request");
                        let (should_render, _) = handle_event(
                            &mut self.app,
                            &Event::RequestFailed {
                                request: request.clone(),
                                reason: e.to_string(),
                            },
                        );
                        should_render
                    }
                },
                Action::OpenUrl { url } => {
                    let mut context = BTreeMap::new();
                    context.insert(COMMAND_KIND_KEY.to_string(), OPEN_COMMAND.to_string());
                    context.insert(URL_KEY.to_string(), url.clone());
                    run_command(&[self.opener.as_str(), url.as_str()], context);
                    false
                }
            }
        }

        fn send(request: HttpRequest) {
            let verb = match request.method {
                HttpMethod::Get => HttpVerb::Get,
                HttpMethod::Post => HttpVerb::Post,
            };
            tracing::debug!(url = %request.url, "issuing web request");
            web_request(request.url, verb, request.headers, request.body, request.context);
        }
    }
}

/// Native builds only exist so the library's tests can link.
#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("zshort is a Zellij plugin: build it with `cargo build --target wasm32-wasip1` and load the .wasm in Zellij");
}
