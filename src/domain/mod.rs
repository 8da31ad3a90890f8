//! Domain layer for the zshort plugin.
//!
//! Core types independent of Zellij APIs and of the HTTP wire details:
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: The shortened URL record served by the backend
//! - [`notification`]: The single-slot notification store

pub mod error;
pub mod notification;
pub mod record;

pub use error::{Result, ZshortError};
pub use notification::{Notification, NotificationKind, Notifier};
pub use record::ShortenedUrlRecord;
