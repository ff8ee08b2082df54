//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::controls::FocusPolicy;
use crate::suggestions::FilteredCandidates;

#[derive(Parser, Debug, Default)]
#[command(
    name = "askbar",
    version,
    about = "Ask/search bar with keyboard-navigable suggestions"
)]
pub struct Args {
    /// JSON candidates: ["a", "b"] or [{"title": "T", "items": ["a"]}] (reads stdin when piped)
    pub file: Option<PathBuf>,

    /// Config file (default: ~/.config/askbar/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Placeholder shown in the empty input
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// When focusing the input opens the suggestions panel
    #[arg(long, value_enum, value_name = "POLICY")]
    pub open_on_focus: Option<FocusPolicy>,

    /// Suggestion rows shown before scrolling
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub max_visible: Option<u16>,

    /// Print candidates matching QUERY and exit without starting the UI
    #[arg(long, value_name = "QUERY")]
    pub filter: Option<String>,
}

impl Args {
    /// Command-line flags take precedence over the config file
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(placeholder) = &self.placeholder {
            config.widget.placeholder = placeholder.clone();
        }
        if let Some(policy) = self.open_on_focus {
            config.widget.open_on_focus = policy;
        }
        if let Some(max_visible) = self.max_visible {
            config.widget.max_visible = max_visible as usize;
        }
    }
}

/// Plain-text rendering of a filtered list for `--filter`
///
/// Flat lists print one item per line; grouped lists print `Title:` followed
/// by indented items.
pub fn format_filtered(filtered: &FilteredCandidates) -> String {
    let mut out = String::new();
    match filtered {
        FilteredCandidates::Flat(items) => {
            for item in items {
                out.push_str(item);
                out.push('\n');
            }
        }
        FilteredCandidates::Grouped(groups) => {
            for group in groups {
                out.push_str(&group.title);
                out.push_str(":\n");
                for item in &group.items {
                    out.push_str("  ");
                    out.push_str(item);
                    out.push('\n');
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
