//! Ask/search bar with a keyboard-navigable suggestions panel
//!
//! The reusable pieces are the [`suggestions`] filter, the [`controls`]
//! (keyboard navigator and disclosure controller) and the
//! [`widget::SuggestionWidget`] that composes them. [`app`] is the host
//! screen used by the `askbar` binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod controls;
pub mod error;
pub mod help;
pub mod layout;
pub mod logging;
pub mod suggestions;
pub mod theme;
pub mod widget;
pub mod widgets;
