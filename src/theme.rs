//! Colour palette, grouped by the component that draws it

pub mod input {
    use ratatui::style::Color;

    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const BORDER_UNFOCUSED: Color = Color::DarkGray;
    pub const ICON_FOCUSED: Color = Color::Cyan;
    pub const ICON_UNFOCUSED: Color = Color::DarkGray;
    pub const PLACEHOLDER: Color = Color::DarkGray;
    pub const HINT: Color = Color::DarkGray;
}

pub mod suggestions {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::Cyan;
    pub const BACKGROUND: Color = Color::Black;
    pub const ITEM_FG: Color = Color::White;
    pub const SELECTED_FG: Color = Color::Black;
    pub const SELECTED_BG: Color = Color::Cyan;
    pub const SELECTED_MODIFIER: Modifier = Modifier::BOLD;
    pub const GROUP_TITLE: Color = Color::Yellow;
    pub const GROUP_TITLE_MODIFIER: Modifier = Modifier::BOLD;
}

pub mod log {
    use ratatui::style::Color;

    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const BORDER_UNFOCUSED: Color = Color::DarkGray;
    pub const TIMESTAMP: Color = Color::DarkGray;
    pub const GROUP: Color = Color::Yellow;
    pub const TEXT: Color = Color::White;
    pub const EMPTY: Color = Color::DarkGray;
}

pub mod status {
    use ratatui::style::Color;

    pub const LABEL: Color = Color::DarkGray;
    pub const QUERY: Color = Color::White;
    pub const WARNING: Color = Color::Yellow;
}

pub mod help {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Magenta;
    pub const KEY: Color = Color::Yellow;
    pub const DESCRIPTION: Color = Color::White;
}
