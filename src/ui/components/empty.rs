//! Empty state component renderer.
//!
//! Shown in place of the table rows when the backend returned no records,
//! including after a failed or malformed list response.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message below the table headers.
///
/// # Parameters
///
/// * `row` - First row below the table headers (1-indexed)
/// * `empty` - Message and subtitle
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
///
/// # Returns
///
/// The next free row (`row + 3`).
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] No URLs shortened yet [right padding]
/// [left padding] Press i to shorten your first URL [right padding]
/// ```
///
/// The message uses `empty_state_fg`, the subtitle `text_dim`. The subtitle
/// explains a missing `api_url` when the plugin has no backend.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = visual_len(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = visual_len(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(row + 2, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());

    row + 3
}
