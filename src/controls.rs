//! Reusable suggestion controllers
//!
//! Both controllers are plain state machines with no rendering dependency;
//! the widget shell feeds them key, focus and pointer events.

mod disclosure;
mod navigator;

pub use disclosure::{Disclosure, DisclosureController, FocusPolicy};
pub use navigator::{KeyboardNavigator, NavKey, NavOutcome};
