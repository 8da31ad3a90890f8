//! One-line notification banner.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NotificationBanner;

/// Renders the banner on `row`, or blanks the row when there is none.
///
/// The row is always drawn so a dismissed banner leaves no stale text behind.
/// Color follows the notification kind (`success_fg` or `error_fg`).
///
/// ```text
///  Shortened to https://sho.rt/redirect/x7  (x: dismiss)
/// ```
pub fn render_notification(row: usize, banner: Option<&NotificationBanner>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(banner) = banner else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let text = truncate(&format!(" {}  (x: dismiss)", banner.message), cols);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(theme.notification_fg(banner.kind)));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(visual_len(&text))));
    print!("{}", Theme::reset());
    row + 1
}
