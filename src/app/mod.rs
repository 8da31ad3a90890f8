//! Application layer: state, events and actions.
//!
//! ```text
//! key press / host callback → Event → handle_event → AppState mutation
//!                                          │
//!                                          └→ Vec<Action> → main.rs → web_request / run_command
//!                                                                         │
//!                     Event::Api(ApiResponse) ←───────── WebRequestResult ┘
//! ```
//!
//! - [`actions`]: Side effects returned by the handler
//! - [`handler`]: Event processing and the fetch/submit/redirect flows
//! - [`modes`]: Input mode state machine
//! - [`state`]: Application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
