use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(anchor.y),
    }
}

/// Horizontally centered bar resting `bottom_margin` rows above the bottom edge
pub fn bottom_centered(frame_area: Rect, width: u16, height: u16, bottom_margin: u16) -> Rect {
    let bar_width = width.min(frame_area.width);
    let bar_height = height.min(frame_area.height);

    let bar_x = frame_area.x + (frame_area.width - bar_width) / 2;
    let bottom = frame_area.bottom().saturating_sub(bottom_margin);
    let bar_y = bottom.saturating_sub(bar_height).max(frame_area.y);

    Rect {
        x: bar_x,
        y: bar_y,
        width: bar_width,
        height: bar_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
