//! URL input box with its submit button.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBarInfo;

/// Spaces left and right of the box.
const INPUT_BOX_MARGIN: usize = 2;

const PROMPT: &str = " URL: ";

/// Renders the three-line input box starting at `row` and returns the next
/// free row.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ URL: https://example.com/pa_    [ Shorten ] │
/// └──────────────────────────────────────────────┘
/// ```
///
/// The border takes the `input_border` color while the input has focus. When
/// the text does not fit, its tail is shown so the cursor stays visible.
pub fn render_input_bar(row: usize, input: &InputBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if input.focused {
        &theme.colors.input_border
    } else {
        &theme.colors.border
    };

    let button = format!("[ {} ] ", input.button_label);
    let cursor = if input.focused { "_" } else { "" };
    let text_width = inner_width.saturating_sub(visual_len(PROMPT) + visual_len(&button) + visual_len(cursor));
    let text = tail(&input.text, text_width);

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let used = visual_len(PROMPT) + visual_len(&text) + visual_len(cursor) + visual_len(&button);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}│", Theme::fg(border));
    print!("{}{PROMPT}", Theme::fg(&theme.colors.text_dim));
    print!("{}{text}{cursor}", Theme::fg(&theme.colors.text_normal));
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}{}{}", Theme::bold(), Theme::fg(&theme.colors.input_border), truncate(&button, inner_width));
    print!("{}{}│", Theme::reset(), Theme::fg(border));
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Last `width` characters of `text`.
fn tail(text: &str, width: usize) -> String {
    let len = visual_len(text);
    text.chars().skip(len.saturating_sub(width)).collect()
}

#[cfg(test)]
mod tests {
    use super::tail;

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail("https://example.com", 11), "example.com");
        assert_eq!(tail("abc", 10), "abc");
        assert_eq!(tail("abc", 0), "");
    }
}
