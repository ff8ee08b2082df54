//! Key help popup

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme;
use crate::widgets::popup;

pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Type", "Filter suggestions"),
    ("↑ / ↓", "Move highlight"),
    ("Enter", "Accept highlighted suggestion"),
    ("Esc", "Close suggestions, or quit"),
    ("Click", "Accept suggestion / close panel"),
    ("Tab", "Switch focus (Selections / Input)"),
    ("F1", "Toggle this help"),
    ("Ctrl+C", "Quit"),
];

const KEY_COLUMN_WIDTH: usize = 10;
const POPUP_WIDTH: u16 = 50;

/// Render the help popup centered in `frame_area`; returns its area
pub fn render_popup(frame: &mut Frame, frame_area: Rect) -> Rect {
    let height = HELP_ENTRIES.len() as u16 + 2;
    let area = popup::centered_popup(frame_area, POPUP_WIDTH, height);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", key, width = KEY_COLUMN_WIDTH),
                    Style::default().fg(theme::help::KEY),
                ),
                Span::styled(*description, Style::default().fg(theme::help::DESCRIPTION)),
            ])
        })
        .collect();

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Keys (F1 to close) ")
            .border_style(Style::default().fg(theme::help::BORDER)),
    );
    frame.render_widget(paragraph, area);

    area
}
