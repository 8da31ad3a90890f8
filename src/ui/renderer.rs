//! Rendering entry point.
//!
//! Rendering is two steps: `AppState::compute_viewmodel` turns the state into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel), then the components print
//! it as ANSI-styled text to stdout, which Zellij draws into the plugin pane.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI for a pane of `rows` x `cols` cells.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_frame(&viewmodel, &state.theme, cols, rows);
}
