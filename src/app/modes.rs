//! Input mode state machine.
//!
//! The plugin is either browsing the record table or editing the URL input.
//! The mode decides how a key press is translated into an [`Event`](super::Event)
//! and which hints the footer shows.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Table navigation and commands.
    ///
    /// Keybindings: j/k (navigate), Enter (follow link), i or / (edit input),
    /// r (refresh), x/Esc (dismiss notification), q (hide).
    #[default]
    Normal,

    /// The URL input has focus.
    ///
    /// Printable keys edit the input, Enter submits it and Esc returns to
    /// [`InputMode::Normal`] without discarding the text.
    Editing,
}
