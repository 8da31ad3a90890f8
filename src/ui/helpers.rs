//! Shared rendering utilities.

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
///
/// Works on characters, not bytes, so multi-byte URLs never split a code
/// point.
///
/// ```
/// use zshort::ui::helpers::truncate;
///
/// assert_eq!(truncate("https://example.com/a/very/long/path", 16), "https://examp...");
/// assert_eq!(truncate("short", 16), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return ".".repeat(width);
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Number of terminal cells `text` occupies, assuming one cell per character.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("https://ü.example/ä", 12), "https://ü...");
        assert_eq!(visual_len("ü.example"), 9);
    }

    #[test]
    fn truncate_degenerate_widths() {
        assert_eq!(truncate("abcdef", 0), "");
        assert_eq!(truncate("abcdef", 2), "..");
        assert_eq!(truncate("abcdef", 6), "abcdef");
    }
}
