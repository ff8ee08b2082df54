//! Input bar and suggestions panel rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::panel::{PanelRow, max_scroll, panel_rows, row_of_item, scroll_to_show};
use super::widget_state::SuggestionWidget;
use crate::theme;
use crate::widgets::popup;

const ICON: &str = "✱";
const ICON_WIDTH: u16 = 2;
const PANEL_BORDER_HEIGHT: u16 = 2;
const ITEM_PREFIX_WIDTH: usize = 2;

/// Render the input bar into `area` and the panel directly above it
///
/// Records both rectangles so pointer events can be tested against what is
/// actually on screen.
pub fn render(widget: &mut SuggestionWidget, frame: &mut Frame, area: Rect) {
    render_input(widget, frame, area);
    widget.regions.input = Some(area);

    widget.regions.panel = if widget.is_visible() {
        render_panel(widget, frame, area)
    } else {
        None
    };
}

fn render_input(widget: &mut SuggestionWidget, frame: &mut Frame, area: Rect) {
    let (border_color, icon_color) = if widget.focused {
        (theme::input::BORDER_FOCUSED, theme::input::ICON_FOCUSED)
    } else {
        (theme::input::BORDER_UNFOCUSED, theme::input::ICON_UNFOCUSED)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    if widget.is_visible() {
        block = block.title_bottom(
            Line::from(Span::styled(
                " ↑↓ select · Enter accept · Esc close ",
                Style::default().fg(theme::input::HINT),
            ))
            .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [icon_area, text_area] =
        Layout::horizontal([Constraint::Length(ICON_WIDTH), Constraint::Min(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(ICON, Style::default().fg(icon_color))),
        icon_area,
    );

    // Hide the cursor block when focus is elsewhere
    let cursor_style = if widget.focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    widget.textarea.set_cursor_style(cursor_style);
    frame.render_widget(&widget.textarea, text_area);
}

fn render_panel(widget: &mut SuggestionWidget, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    let rows = panel_rows(&widget.filtered);
    let visible_rows = rows.len().min(widget.options.max_visible.max(1));
    let popup_height = visible_rows as u16 + PANEL_BORDER_HEIGHT;

    let panel_area = popup::popup_above_anchor(input_area, input_area.width, popup_height, 0);
    if panel_area.height <= PANEL_BORDER_HEIGHT || panel_area.width <= PANEL_BORDER_HEIGHT {
        return None;
    }

    let viewport = (panel_area.height - PANEL_BORDER_HEIGHT) as usize;
    widget.panel_viewport = viewport;

    let selected = widget.navigator.selected();
    let mut scroll = widget.panel_scroll.min(max_scroll(rows.len(), viewport));
    if let Some(row) = selected.and_then(|index| row_of_item(&rows, index)) {
        scroll = scroll_to_show(&rows, scroll, row, viewport);
    }

    let text_width = (panel_area.width - PANEL_BORDER_HEIGHT) as usize;
    let items: Vec<ListItem> = rows
        .iter()
        .skip(scroll)
        .take(viewport)
        .map(|row| ListItem::new(panel_line(*row, selected, text_width)))
        .collect();

    popup::clear_area(frame, panel_area);

    let title = format!(" Suggestions ({}) ", widget.filtered.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(theme::suggestions::BORDER))
            .style(Style::default().bg(theme::suggestions::BACKGROUND)),
    );
    frame.render_widget(list, panel_area);

    widget.panel_scroll = scroll;
    Some(panel_area)
}

fn panel_line(row: PanelRow<'_>, selected: Option<usize>, width: usize) -> Line<'static> {
    match row {
        PanelRow::Header(title) => Line::from(Span::styled(
            truncate_to_width(title, width),
            Style::default()
                .fg(theme::suggestions::GROUP_TITLE)
                .add_modifier(theme::suggestions::GROUP_TITLE_MODIFIER),
        )),
        PanelRow::Item { index, text } => {
            let text = truncate_to_width(text, width.saturating_sub(ITEM_PREFIX_WIDTH));
            if selected == Some(index) {
                let padding = width.saturating_sub(ITEM_PREFIX_WIDTH + text.width());
                Line::from(Span::styled(
                    format!("► {}{}", text, " ".repeat(padding)),
                    Style::default()
                        .fg(theme::suggestions::SELECTED_FG)
                        .bg(theme::suggestions::SELECTED_BG)
                        .add_modifier(theme::suggestions::SELECTED_MODIFIER),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", text),
                    Style::default().fg(theme::suggestions::ITEM_FG),
                ))
            }
        }
    }
}

/// Cut `text` to at most `max_width` display columns, ending in `…` if cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width - 1 {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "widget_render_tests.rs"]
mod widget_render_tests;
