use std::sync::mpsc::{self, Receiver};

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::suggestions::CandidateSource;
use crate::widget::{Commit, SuggestionWidget, WidgetOptions};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputBar,
    SelectionLog,
}

/// A commit as shown in the selection log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRecord {
    pub commit: Commit,
    pub at: DateTime<Local>,
}

/// Application state
pub struct App {
    pub widget: SuggestionWidget,
    pub focus: Focus,
    pub selections: Vec<SelectionRecord>,
    pub layout_regions: LayoutRegions,
    pub help_visible: bool,
    pub warning: Option<String>,
    pub should_quit: bool,
    commit_rx: Receiver<Commit>,
}

impl App {
    pub fn new(source: CandidateSource, config: &Config) -> Self {
        Self::with_options(source, config.widget_options())
    }

    pub fn with_options(source: CandidateSource, options: WidgetOptions) -> Self {
        let (commit_tx, commit_rx) = mpsc::channel();
        let mut widget = SuggestionWidget::new(source, options).on_commit(move |commit| {
            let _ = commit_tx.send(commit.clone());
        });
        widget.focus();

        Self {
            widget,
            focus: Focus::InputBar,
            selections: Vec::new(),
            layout_regions: LayoutRegions::new(),
            help_visible: false,
            warning: None,
            should_quit: false,
            commit_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_warning(&mut self, warning: impl Into<String>) {
        self.warning = Some(warning.into());
    }

    /// Text of the most recent commit
    pub fn last_committed(&self) -> Option<&str> {
        self.selections.last().map(|r| r.commit.text.as_str())
    }

    /// Move commits delivered by the widget callback into the log
    pub fn drain_commits(&mut self) {
        while let Ok(commit) = self.commit_rx.try_recv() {
            self.selections.push(SelectionRecord {
                commit,
                at: Local::now(),
            });
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        match focus {
            Focus::InputBar => self.widget.focus(),
            Focus::SelectionLog => self.widget.blur(),
        }
    }

    pub fn toggle_focus(&mut self) {
        let next = match self.focus {
            Focus::InputBar => Focus::SelectionLog,
            Focus::SelectionLog => Focus::InputBar,
        };
        self.set_focus(next);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
