//! Component renderers and the frame layout.
//!
//! - [`header`]: Title bar
//! - [`input`]: URL input box and submit button
//! - [`notification`]: Notification banner
//! - [`table`]: Record table
//! - [`empty`]: Message shown instead of an empty table
//! - [`footer`]: Keybinding hints

mod empty;
mod footer;
mod header;
mod input;
mod notification;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use input::render_input_bar;
use notification::render_notification;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal rule on `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one full frame.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Input box - 3 lines]
/// [Notification]
/// [Table headers]
/// [Table rows or empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_input_bar(current_row, &vm.input_bar, theme, cols);
    current_row = render_notification(current_row, vm.notification.as_ref(), theme, cols);
    current_row = render_table_headers(current_row, vm.columns, theme);

    match &vm.empty_state {
        Some(empty) => {
            render_empty_state(current_row, empty, theme, cols);
        }
        None => {
            render_table_rows(current_row, &vm.display_items, vm.columns, theme, cols);
        }
    }

    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
