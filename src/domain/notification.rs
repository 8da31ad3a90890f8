//! Single-slot transient notification store.
//!
//! The [`Notifier`] holds the last user-facing status message. It is owned by
//! [`AppState`](crate::app::AppState) and handed to the view through the view
//! model, so there is exactly one active notification per plugin instance and
//! no process-wide mutable state.
//!
//! There is no queue and no expiry: a new notification always overwrites the
//! pending one, and a notification stays visible until it is dismissed or
//! replaced.

/// Category of a notification, driving its color in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// No notification is active.
    #[default]
    None,
    /// The last operation completed successfully.
    Success,
    /// The last operation failed.
    Error,
}

/// Snapshot of the notification slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notification {
    /// Text shown to the user. Empty when cleared.
    pub message: String,
    /// Category of the message.
    pub kind: NotificationKind,
    /// Whether the view should show the notification.
    pub visible: bool,
}

/// Owner of the single notification slot.
///
/// # Examples
///
/// ```
/// use zshort::domain::{NotificationKind, Notifier};
///
/// let mut notifier = Notifier::default();
/// notifier.set("Link shortened", NotificationKind::Success);
/// notifier.set("Backend unreachable", NotificationKind::Error);
/// assert_eq!(notifier.current().message, "Backend unreachable");
///
/// notifier.clear();
/// assert!(!notifier.current().visible);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Notification,
}

impl Notifier {
    /// Replaces the current notification and marks it visible.
    pub fn set(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        tracing::debug!(kind = ?kind, message = %message, "notification set");
        self.current = Notification {
            message,
            kind,
            visible: true,
        };
    }

    /// Shorthand for `set(message, NotificationKind::Success)`.
    pub fn success(&mut self, message: impl Into<String>) {
        self.set(message, NotificationKind::Success);
    }

    /// Shorthand for `set(message, NotificationKind::Error)`.
    pub fn error(&mut self, message: impl Into<String>) {
        self.set(message, NotificationKind::Error);
    }

    /// Empties the message and hides the notification.
    pub fn clear(&mut self) {
        self.current = Notification::default();
    }

    /// Returns the current notification.
    #[must_use]
    pub const fn current(&self) -> &Notification {
        &self.current
    }

    /// Returns `true` if a notification is currently shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.current.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_empty() {
        let notifier = Notifier::default();
        assert_eq!(notifier.current(), &Notification::default());
        assert!(!notifier.is_visible());
        assert_eq!(notifier.current().kind, NotificationKind::None);
    }

    #[test]
    fn set_overwrites_pending_notification() {
        let mut notifier = Notifier::default();
        notifier.error("first");
        notifier.success("second");

        let current = notifier.current();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotificationKind::Success);
        assert!(current.visible);
    }

    #[test]
    fn clear_resets_every_field() {
        let mut notifier = Notifier::default();
        notifier.error("boom");
        notifier.clear();

        assert_eq!(notifier.current().message, "");
        assert_eq!(notifier.current().kind, NotificationKind::None);
        assert!(!notifier.is_visible());
    }
}
