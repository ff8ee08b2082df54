use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Position;
use tui_textarea::Input;

use super::panel::{PanelRow, panel_rows, row_of_item, scroll_to_show};
use super::widget_state::SuggestionWidget;
use crate::controls::{NavKey, NavOutcome};

impl SuggestionWidget {
    /// Handle a key press while the widget has focus
    ///
    /// Navigation keys go to the navigator first; everything else edits the
    /// query. Returns `false` for keys left to the host: Enter with nothing
    /// highlighted, Esc with the panel already closed, arrows with no panel, Tab.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }

        if let Some(nav_key) = NavKey::from_key(&key) {
            return self.handle_nav_key(nav_key);
        }

        if inserts_line_break(&key) || matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            return false;
        }

        if self.textarea.input(Input::from(key)) {
            self.on_text_changed();
        }
        true
    }

    fn handle_nav_key(&mut self, nav_key: NavKey) -> bool {
        let visible = self.is_visible();
        let count = self.filtered.len();

        match nav_key {
            NavKey::Down | NavKey::Up => {
                if !visible {
                    return false;
                }
                if self.navigator.handle(nav_key, count) == NavOutcome::Moved {
                    self.scroll_to_selection();
                }
                true
            }
            NavKey::Enter => {
                if !visible {
                    return false;
                }
                match self.navigator.handle(nav_key, count) {
                    NavOutcome::Commit(index) => {
                        self.commit_index(index);
                        true
                    }
                    _ => false,
                }
            }
            NavKey::Escape => {
                // Open with no matches still counts: the first Esc only closes
                let was_open = self.disclosure.is_open();
                self.navigator.handle(nav_key, count);
                self.disclosure.on_escape();
                was_open
            }
        }
    }

    /// Handle a left-button press anywhere on screen
    ///
    /// Returns `true` when the press landed on the widget.
    pub fn handle_pointer_down(&mut self, position: Position) -> bool {
        if let Some(index) = self.item_at(position) {
            self.commit_index(index);
            return true;
        }

        if self.regions.input.is_some_and(|r| r.contains(position)) {
            self.focus();
            return true;
        }

        let regions = self.regions;
        if self
            .disclosure
            .on_pointer_down(position, |p| regions.contains(p))
        {
            log::debug!("Closed suggestions on outside click at {:?}", position);
        }

        if regions.contains(position) {
            return true;
        }

        self.navigator.reset();
        self.focused = false;
        false
    }

    /// Highlight the item under the pointer
    pub fn handle_pointer_move(&mut self, position: Position) -> bool {
        match self.item_at(position) {
            Some(index) => {
                self.navigator.select(index, self.filtered.len());
                true
            }
            None => false,
        }
    }

    /// Flattened index of the item drawn at `position`, if any
    pub fn item_at(&self, position: Position) -> Option<usize> {
        if !self.is_visible() {
            return None;
        }

        let panel = self.regions.panel?;
        let inner_x = panel.x.saturating_add(1);
        let inner_y = panel.y.saturating_add(1);
        let inner_width = panel.width.saturating_sub(2);
        let inner_height = panel.height.saturating_sub(2);

        if position.x < inner_x
            || position.x >= inner_x.saturating_add(inner_width)
            || position.y < inner_y
            || position.y >= inner_y.saturating_add(inner_height)
        {
            return None;
        }

        let row = self.panel_scroll + (position.y - inner_y) as usize;
        match panel_rows(&self.filtered).get(row) {
            Some(PanelRow::Item { index, .. }) => Some(*index),
            _ => None,
        }
    }

    fn scroll_to_selection(&mut self) {
        let Some(selected) = self.navigator.selected() else {
            self.panel_scroll = 0;
            return;
        };

        let rows = panel_rows(&self.filtered);
        if let Some(row) = row_of_item(&rows, selected) {
            self.panel_scroll = scroll_to_show(&rows, self.panel_scroll, row, self.panel_viewport);
        }
    }
}

/// Keys the textarea would turn into a second line
fn inserts_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "widget_events_tests.rs"]
mod widget_events_tests;
