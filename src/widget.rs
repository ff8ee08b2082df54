//! Suggestion widget
//!
//! An input bar with a suggestions panel above it. Composes the substring
//! filter, the keyboard navigator and the disclosure controller, and hands
//! committed values to a caller-supplied callback.

mod panel;
mod widget_events;
mod widget_render;
mod widget_state;

pub use panel::{PanelRow, panel_rows};
pub use widget_render::render;
pub use widget_state::{Commit, SuggestionWidget, WidgetOptions, WidgetRegions};
