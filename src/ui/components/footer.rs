//! Footer component renderer.
//!
//! The footer lists the keys of the current input mode. Its text comes from
//! [`FooterInfo`], which the view model fills per mode.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints at the specified row.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed), normally the last row of the pane
/// * `footer` - Hint text for the current mode
/// * `theme` - Active color theme; hints use `text_dim`
/// * `cols` - Pane width in columns
///
/// # Returns
///
/// The next free row (`row + 1`).
///
/// Hints wider than the pane are cut with `...` instead of wrapping onto a row
/// the frame does not own.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = visual_len(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
