use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::controls::{DisclosureController, FocusPolicy, KeyboardNavigator};
use crate::suggestions::{FilteredCandidates, SuggestionSource};
use crate::theme;

pub const DEFAULT_PLACEHOLDER: &str = "ask anything";
pub const DEFAULT_MAX_VISIBLE: usize = 8;
pub const DEFAULT_WIDTH: u16 = 60;

/// A finalized selection, handed to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub text: String,
    pub group: Option<String>,
    /// Flattened index within the filtered list at commit time
    pub index: usize,
}

/// Caller-facing widget settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    pub placeholder: String,
    pub focus_policy: FocusPolicy,
    /// Panel rows shown before scrolling
    pub max_visible: usize,
    /// Preferred width of the input bar in columns
    pub width: u16,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            focus_policy: FocusPolicy::default(),
            max_visible: DEFAULT_MAX_VISIBLE,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Screen areas drawn on the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetRegions {
    pub input: Option<Rect>,
    pub panel: Option<Rect>,
}

impl WidgetRegions {
    pub fn contains(&self, position: Position) -> bool {
        self.input.is_some_and(|r| r.contains(position))
            || self.panel.is_some_and(|r| r.contains(position))
    }
}

type CommitCallback = Box<dyn FnMut(&Commit)>;

pub struct SuggestionWidget {
    pub(super) textarea: TextArea<'static>,
    source: Box<dyn SuggestionSource>,
    pub(super) filtered: FilteredCandidates,
    pub(super) navigator: KeyboardNavigator,
    pub(super) disclosure: DisclosureController,
    pub(super) options: WidgetOptions,
    pub(super) focused: bool,
    /// First panel row shown
    pub(super) panel_scroll: usize,
    /// Panel rows that fit on screen at the last render
    pub(super) panel_viewport: usize,
    pub(super) regions: WidgetRegions,
    commit_callback: Option<CommitCallback>,
}

impl SuggestionWidget {
    pub fn new(source: impl SuggestionSource + 'static, options: WidgetOptions) -> Self {
        Self {
            textarea: build_textarea(&options, ""),
            source: Box::new(source),
            filtered: FilteredCandidates::default(),
            navigator: KeyboardNavigator::new(),
            disclosure: DisclosureController::new(options.focus_policy),
            panel_viewport: options.max_visible,
            options,
            focused: false,
            panel_scroll: 0,
            regions: WidgetRegions::default(),
            commit_callback: None,
        }
    }

    /// Register the "selection made" notification
    pub fn on_commit(mut self, callback: impl FnMut(&Commit) + 'static) -> Self {
        self.commit_callback = Some(Box::new(callback));
        self
    }

    pub fn query(&self) -> &str {
        query_line(&self.textarea)
    }

    /// Replace the query text without opening the panel
    ///
    /// Line breaks and other control characters become spaces. The textarea
    /// is rebuilt rather than edited, and the user's yank buffer is carried
    /// over, so a commit never lands in it.
    pub fn set_query(&mut self, text: &str) {
        let yank = self.textarea.yank_text();
        self.textarea = build_textarea(&self.options, &single_line(text));
        self.textarea.set_yank_text(yank);
        self.refresh_suggestions();
    }

    pub fn filtered(&self) -> &FilteredCandidates {
        &self.filtered
    }

    pub fn selected(&self) -> Option<usize> {
        self.navigator.selected()
    }

    pub fn disclosure(&self) -> &DisclosureController {
        &self.disclosure
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn regions(&self) -> WidgetRegions {
        self.regions
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Panel is drawn only when open and something matched
    pub fn is_visible(&self) -> bool {
        self.disclosure.is_visible(self.filtered.len())
    }

    pub fn focus(&mut self) {
        if self.focused {
            return;
        }
        self.focused = true;
        self.disclosure.on_focus(query_line(&self.textarea));
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.close_panel();
    }

    pub(super) fn close_panel(&mut self) {
        self.disclosure.close();
        self.navigator.reset();
    }

    /// Recompute the filtered list; any list change drops the selection
    pub(super) fn refresh_suggestions(&mut self) {
        self.filtered = self.source.suggest(self.query());
        self.navigator.reset();
        self.panel_scroll = 0;
    }

    pub(super) fn on_text_changed(&mut self) {
        self.refresh_suggestions();
        self.disclosure.on_input(query_line(&self.textarea));
    }

    /// Commit the candidate at a flattened index
    ///
    /// Indices that no longer resolve are ignored.
    pub fn commit_index(&mut self, index: usize) -> Option<Commit> {
        let Some(resolved) = self.filtered.resolve(index) else {
            log::debug!(
                "Ignoring commit of index {} ({} candidates)",
                index,
                self.filtered.len()
            );
            return None;
        };

        let commit = Commit {
            text: single_line(resolved.item),
            group: resolved.group.map(str::to_string),
            index,
        };
        log::debug!("Committed {:?}", commit.text);

        self.set_query(&commit.text);
        self.disclosure.on_commit();
        self.navigator.reset();
        self.focused = true;

        if let Some(callback) = self.commit_callback.as_mut() {
            callback(&commit);
        }

        Some(commit)
    }
}

fn build_textarea(options: &WidgetOptions, text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(options.placeholder.clone());
    textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
    textarea.move_cursor(CursorMove::End);
    textarea
}

fn query_line<'a>(textarea: &'a TextArea<'_>) -> &'a str {
    textarea.lines().first().map(String::as_str).unwrap_or("")
}

/// The query is one line; candidates are flattened to fit it
fn single_line(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "widget_state_tests.rs"]
mod widget_state_tests;
