//! Table component renderer.
//!
//! Renders the shortened URLs as a three-column table: ORIGINAL, SHORT LINK
//! and CLICKS. Column widths come precomputed in [`ColumnWidths`] so the
//! headers and every row line up; text is already truncated by the view model.

use crate::app::state::CLICKS_COLUMN_WIDTH;
use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnWidths, DisplayItem};

/// Renders the table column headers at the specified row.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `columns` - Widths of the ORIGINAL and SHORT LINK columns
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next free row (`row + 1`).
///
/// # Layout
///
/// ```text
///  ORIGINAL                        SHORT LINK                  CLICKS
/// ```
///
/// The leading space lines the headers up with the selection marker column.
pub fn render_table_headers(row: usize, columns: ColumnWidths, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        " {:<original$}{:<short$}{:>clicks$}",
        "ORIGINAL",
        "SHORT LINK",
        "CLICKS",
        original = columns.original,
        short = columns.short_link,
        clicks = CLICKS_COLUMN_WIDTH,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the visible records starting at the specified row.
///
/// # Parameters
///
/// * `row` - First row of the table body (1-indexed)
/// * `items` - Records in the visible window, already truncated
/// * `columns` - Column widths shared with the headers
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns, used to pad selected rows
///
/// # Returns
///
/// The next free row (`row + items.len()`).
pub fn render_table_rows(row: usize, items: &[DisplayItem], columns: ColumnWidths, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, columns, theme, cols);
    }
    current_row
}

/// Renders one record.
///
/// ```text
/// >https://example.com/some/long/pa...  https://sho.rt/redirect/x7       12
/// ```
///
/// Selected rows get the `>` marker and the selection colors across the full
/// pane width. Other rows draw the short link in `link_fg`.
fn render_table_row(row: usize, item: &DisplayItem, columns: ColumnWidths, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    let marker = if item.is_selected { ">" } else { " " };
    print!("{}{marker}{}", Theme::fg(base_fg), item.original_url);
    print!("{}", " ".repeat(columns.original.saturating_sub(visual_len(&item.original_url))));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.link_fg));
    }
    print!("{}", item.short_link);
    print!("{}", " ".repeat(columns.short_link.saturating_sub(visual_len(&item.short_link))));

    print!("{}{:>width$}", Theme::fg(base_fg), item.clicks, width = CLICKS_COLUMN_WIDTH);

    let line_len = 1 + columns.original + columns.short_link + CLICKS_COLUMN_WIDTH;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
