use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::{App, Focus, SelectionRecord};
use crate::widgets::popup;
use crate::{help, theme, widget};

const INPUT_BAR_HEIGHT: u16 = 3;
const INPUT_BAR_BOTTOM_MARGIN: u16 = 1;
const STATUS_HINT: &str = "F1 help · Tab switch focus · Ctrl+C quit";
const EMPTY_LOG: &str = "Nothing selected yet. Type below and press Enter on a suggestion.";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let frame_area = frame.area();
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(INPUT_BAR_HEIGHT), Constraint::Length(1)])
                .areas(frame_area);

        let input_area = popup::bottom_centered(
            main_area,
            self.widget.options().width,
            INPUT_BAR_HEIGHT,
            INPUT_BAR_BOTTOM_MARGIN,
        );
        let log_area = Rect {
            height: input_area.y.saturating_sub(main_area.y),
            ..main_area
        };

        self.layout_regions.clear();

        if log_area.height > 0 {
            self.render_selection_log(frame, log_area);
            self.layout_regions.selection_log = Some(log_area);
        }

        widget::render(&mut self.widget, frame, input_area);
        let regions = self.widget.regions();
        self.layout_regions.input_bar = regions.input;
        self.layout_regions.suggestions_panel = regions.panel;

        self.render_status(frame, status_area);

        if self.help_visible {
            self.layout_regions.help_popup = Some(help::render_popup(frame, frame_area));
        }
    }

    fn render_selection_log(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::SelectionLog {
            theme::log::BORDER_FOCUSED
        } else {
            theme::log::BORDER_UNFOCUSED
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Selections ({}) ", self.selections.len()))
            .border_style(Style::default().fg(border_color));

        let inner_height = block.inner(area).height as usize;

        let lines: Vec<Line> = if self.selections.is_empty() {
            vec![Line::from(Span::styled(
                EMPTY_LOG,
                Style::default().fg(theme::log::EMPTY),
            ))]
        } else {
            // Newest at the bottom, oldest scrolled off the top
            let skip = self.selections.len().saturating_sub(inner_height);
            self.selections.iter().skip(skip).map(selection_line).collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(warning) = &self.warning {
            Line::from(Span::styled(
                format!(" ⚠ {}", warning),
                Style::default().fg(theme::status::WARNING),
            ))
        } else if !self.widget.query().trim().is_empty() {
            Line::from(vec![
                Span::styled(" Searching for: ", Style::default().fg(theme::status::LABEL)),
                Span::styled(
                    self.widget.query().to_string(),
                    Style::default().fg(theme::status::QUERY),
                ),
            ])
        } else {
            Line::from(Span::styled(
                format!(" {}", STATUS_HINT),
                Style::default().fg(theme::status::LABEL),
            ))
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn selection_line(record: &SelectionRecord) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{} ", record.at.format("%H:%M:%S")),
            Style::default().fg(theme::log::TIMESTAMP),
        ),
        Span::styled(
            record.commit.text.clone(),
            Style::default().fg(theme::log::TEXT),
        ),
    ];
    if let Some(group) = &record.commit.group {
        spans.push(Span::styled(
            format!(" [{}]", group),
            Style::default().fg(theme::log::GROUP),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
