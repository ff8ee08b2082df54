//! Open/closed state of the suggestions panel

use ratatui::layout::Position;
use serde::Deserialize;

/// Panel visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

/// Whether focusing the input opens the panel on its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FocusPolicy {
    /// Open on every focus
    Always,
    /// Open on focus only if the input already holds text
    #[default]
    NonEmptyQuery,
}

/// Decides when the suggestions panel is open
///
/// The panel is only drawn when this is `Open` *and* there is at least one
/// filtered candidate; see [`DisclosureController::is_visible`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureController {
    state: Disclosure,
    policy: FocusPolicy,
}

impl DisclosureController {
    pub fn new(policy: FocusPolicy) -> Self {
        Self {
            state: Disclosure::Closed,
            policy,
        }
    }

    pub fn state(&self) -> Disclosure {
        self.state
    }

    pub fn policy(&self) -> FocusPolicy {
        self.policy
    }

    pub fn is_open(&self) -> bool {
        self.state == Disclosure::Open
    }

    pub fn is_visible(&self, candidate_count: usize) -> bool {
        self.is_open() && candidate_count > 0
    }

    pub fn open(&mut self) {
        self.state = Disclosure::Open;
    }

    pub fn close(&mut self) {
        self.state = Disclosure::Closed;
    }

    pub fn on_focus(&mut self, query: &str) {
        match self.policy {
            FocusPolicy::Always => self.open(),
            FocusPolicy::NonEmptyQuery => {
                if !query.trim().is_empty() {
                    self.open();
                }
            }
        }
    }

    /// A keystroke changed the query
    ///
    /// Blank input leaves the state alone; the filter yields nothing so the
    /// panel hides anyway.
    pub fn on_input(&mut self, query: &str) {
        if !query.trim().is_empty() {
            self.open();
        }
    }

    /// Pointer pressed somewhere on screen
    ///
    /// `is_inside` is the rendering layer's membership test for the input and
    /// the panel. Returns `true` if this press closed the panel.
    pub fn on_pointer_down(
        &mut self,
        position: Position,
        is_inside: impl Fn(Position) -> bool,
    ) -> bool {
        if !self.is_open() || is_inside(position) {
            return false;
        }
        self.close();
        true
    }

    pub fn on_escape(&mut self) {
        self.close();
    }

    pub fn on_commit(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "disclosure_tests.rs"]
mod disclosure_tests;
