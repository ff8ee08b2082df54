// Configuration type definitions

use serde::Deserialize;

use crate::controls::FocusPolicy;
use crate::suggestions::{CandidateSource, SuggestionGroup};
use crate::widget::WidgetOptions;

/// Input bar and panel settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub placeholder: String,
    pub open_on_focus: FocusPolicy,
    pub max_visible: usize,
    pub width: u16,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        let options = WidgetOptions::default();
        WidgetConfig {
            placeholder: options.placeholder,
            open_on_focus: options.focus_policy,
            max_visible: options.max_visible,
            width: options.width,
        }
    }
}

/// Candidates declared in the config file
///
/// `groups` wins over `items` when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub groups: Vec<SuggestionGroup>,
}

impl SuggestionsConfig {
    pub fn source(&self) -> Option<CandidateSource> {
        if !self.groups.is_empty() {
            Some(CandidateSource::Grouped(self.groups.clone()))
        } else if !self.items.is_empty() {
            Some(CandidateSource::Flat(self.items.clone()))
        } else {
            None
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

impl Config {
    pub fn widget_options(&self) -> WidgetOptions {
        WidgetOptions {
            placeholder: self.widget.placeholder.clone(),
            focus_policy: self.widget.open_on_focus,
            max_visible: self.widget.max_visible,
            width: self.widget.width,
        }
    }
}
