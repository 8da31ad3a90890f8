//! Terminal UI.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! - [`viewmodel`]: Display-ready state
//! - [`renderer`]: Entry point called from the plugin's `render`
//! - [`components`]: Header, input box, notification, table, footer
//! - [`helpers`]: Cursor positioning and truncation
//! - [`theme`]: Color themes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ColumnWidths, DisplayItem, EmptyState, FooterInfo, HeaderInfo, InputBarInfo, NotificationBanner, UIViewModel,
};
