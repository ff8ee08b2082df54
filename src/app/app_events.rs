use std::io;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use super::mouse_events;

impl App {
    /// Block on the next terminal event and apply it
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Only key presses; releases and repeats would double-apply
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => mouse_events::handle_mouse(self, mouse),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputBar => {
                if !self.widget.handle_key(key) {
                    self.handle_unclaimed_key(key);
                }
                self.drain_commits();
            }
            Focus::SelectionLog => self.handle_unclaimed_key(key),
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help blocks everything else while shown
        if self.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => self.help_visible = false,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                _ => {}
            }
            return true;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        if key.code == KeyCode::F(1) {
            self.help_visible = true;
            return true;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.toggle_focus();
            return true;
        }

        false
    }

    /// Keys neither the widget nor the global table used
    fn handle_unclaimed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.focus == Focus::SelectionLog => self.should_quit = true,
            KeyCode::Char('i') if self.focus == Focus::SelectionLog => {
                self.set_focus(Focus::InputBar)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
