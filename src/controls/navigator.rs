//! Keyboard selection over a flat (or group-flattened) suggestion list

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys the navigator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

impl NavKey {
    /// Map a key press to a navigation key
    ///
    /// Chords with Ctrl or Alt are left to the host.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Down => Some(NavKey::Down),
            KeyCode::Up => Some(NavKey::Up),
            KeyCode::Enter => Some(NavKey::Enter),
            KeyCode::Esc => Some(NavKey::Escape),
            _ => None,
        }
    }
}

/// What a navigation key did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Highlight moved
    Moved,
    /// Key had no effect (clamped, empty list, or Enter with nothing selected)
    Unchanged,
    /// Enter on a highlighted item; carries its flattened index
    Commit(usize),
    /// Escape; selection cleared
    Cancelled,
}

/// Selection index over the filtered candidates
///
/// `None` is the "no selection" state. A selected index is always below
/// the item count it was moved with; callers must `reset()` whenever the
/// filtered list changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardNavigator {
    selected: Option<usize>,
}

impl KeyboardNavigator {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Move down one item, clamping at the last one (no wraparound)
    pub fn move_down(&mut self, count: usize) -> NavOutcome {
        if count == 0 {
            return NavOutcome::Unchanged;
        }

        let next = match self.selected {
            None => 0,
            Some(current) => (current + 1).min(count - 1),
        };

        if self.selected == Some(next) {
            NavOutcome::Unchanged
        } else {
            self.selected = Some(next);
            NavOutcome::Moved
        }
    }

    /// Move up one item; moving up from the first item clears the selection
    pub fn move_up(&mut self) -> NavOutcome {
        match self.selected {
            None => NavOutcome::Unchanged,
            Some(0) => {
                self.selected = None;
                NavOutcome::Moved
            }
            Some(current) => {
                self.selected = Some(current - 1);
                NavOutcome::Moved
            }
        }
    }

    /// Highlight a specific item (mouse hover)
    ///
    /// Ignored when `index` is outside the list.
    pub fn select(&mut self, index: usize, count: usize) {
        if index < count {
            self.selected = Some(index);
        }
    }

    /// Apply a navigation key against a list of `count` items
    pub fn handle(&mut self, key: NavKey, count: usize) -> NavOutcome {
        match key {
            NavKey::Down => self.move_down(count),
            NavKey::Up => self.move_up(),
            NavKey::Enter => match self.selected.take() {
                Some(index) => NavOutcome::Commit(index),
                None => NavOutcome::Unchanged,
            },
            NavKey::Escape => {
                self.selected = None;
                NavOutcome::Cancelled
            }
        }
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod navigator_tests;
