use ratatui::layout::Rect;

/// A clickable component of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SelectionLog,
    InputBar,
    SuggestionsPanel,
    HelpPopup,
}

/// Areas drawn on the last frame; `None` when a component was not drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub selection_log: Option<Rect>,
    pub input_bar: Option<Rect>,
    pub suggestions_panel: Option<Rect>,
    pub help_popup: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
