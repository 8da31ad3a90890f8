//! Header component renderer.
//!
//! Draws the plugin title, centered, in the theme's header colors. The title
//! carries the record count, so it doubles as a quick status line.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at the specified row.
///
/// The title is bold and centered; the line is padded to the full pane width
/// so `header_bg`, when the theme sets one, spans the whole row.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `header` - Title text, e.g. `" Shortened URLs (3) "`
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
///
/// # Returns
///
/// The next free row (`row + 1`).
///
/// # Layout
///
/// ```text
/// [left padding] Shortened URLs (3) [right padding]
/// ```
///
/// Padding is measured in characters. An odd remainder goes to the right.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = visual_len(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
