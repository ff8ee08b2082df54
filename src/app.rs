//! Host screen
//!
//! A log of committed selections with the suggestion bar floating at the
//! bottom, a status line, and a help popup.

mod app_events;
mod app_render;
mod app_state;
mod mouse_events;

pub use app_state::{App, Focus, SelectionRecord};
