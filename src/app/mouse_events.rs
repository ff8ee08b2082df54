//! Mouse handling
//!
//! Left presses go to the suggestion widget first, which decides between
//! committing, focusing and closing on an outside click. Movement drives
//! the hover highlight.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::app_state::{App, Focus};
use crate::layout::{Region, region_at};

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_down(app, position),
        MouseEventKind::Moved => {
            if !app.help_visible {
                app.widget.handle_pointer_move(position);
            }
        }
        _ => {}
    }
}

fn handle_left_down(app: &mut App, position: Position) {
    let region = region_at(&app.layout_regions, position);

    if app.help_visible {
        if region != Some(Region::HelpPopup) {
            app.help_visible = false;
        }
        return;
    }

    app.widget.handle_pointer_down(position);
    app.drain_commits();

    app.focus = if app.widget.is_focused() {
        Focus::InputBar
    } else {
        Focus::SelectionLog
    };
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
