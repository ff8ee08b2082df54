use serde::Deserialize;

use super::filter::{filter_groups, filter_items};

/// A named category of candidates
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl SuggestionGroup {
    pub fn new<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Anything the widget can ask for suggestions
pub trait SuggestionSource {
    /// Candidates matching `query`, in display order
    fn suggest(&self, query: &str) -> FilteredCandidates;
}

/// Caller-supplied candidate list
///
/// Deserializes from either a JSON array of strings or an array of
/// `{"title": ..., "items": [...]}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CandidateSource {
    Flat(Vec<String>),
    Grouped(Vec<SuggestionGroup>),
}

impl CandidateSource {
    pub fn flat<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CandidateSource::Flat(items.into_iter().map(Into::into).collect())
    }

    /// Total number of candidates across all groups
    pub fn len(&self) -> usize {
        match self {
            CandidateSource::Flat(items) => items.len(),
            CandidateSource::Grouped(groups) => groups.iter().map(|g| g.items.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SuggestionSource for CandidateSource {
    fn suggest(&self, query: &str) -> FilteredCandidates {
        match self {
            CandidateSource::Flat(items) => FilteredCandidates::Flat(filter_items(query, items)),
            CandidateSource::Grouped(groups) => {
                FilteredCandidates::Grouped(filter_groups(query, groups))
            }
        }
    }
}

/// A candidate located by its flattened index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub group: Option<&'a str>,
    pub item: &'a str,
}

/// Result of filtering, same shape as the source it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilteredCandidates {
    Flat(Vec<String>),
    Grouped(Vec<SuggestionGroup>),
}

impl Default for FilteredCandidates {
    fn default() -> Self {
        FilteredCandidates::Flat(Vec::new())
    }
}

impl FilteredCandidates {
    /// Number of selectable items (group titles are not counted)
    pub fn len(&self) -> usize {
        match self {
            FilteredCandidates::Flat(items) => items.len(),
            FilteredCandidates::Grouped(groups) => groups.iter().map(|g| g.items.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Map a flattened index back to its `(group, item)` pair
    ///
    /// The index space is every group's items concatenated in group order.
    /// Returns `None` when the index is past the end.
    pub fn resolve(&self, index: usize) -> Option<Resolved<'_>> {
        match self {
            FilteredCandidates::Flat(items) => items.get(index).map(|item| Resolved {
                group: None,
                item: item.as_str(),
            }),
            FilteredCandidates::Grouped(groups) => {
                let mut offset = index;
                for group in groups {
                    if offset < group.items.len() {
                        return Some(Resolved {
                            group: Some(group.title.as_str()),
                            item: group.items[offset].as_str(),
                        });
                    }
                    offset -= group.items.len();
                }
                None
            }
        }
    }

    /// All items in flattened order
    pub fn items(&self) -> Vec<&str> {
        match self {
            FilteredCandidates::Flat(items) => items.iter().map(String::as_str).collect(),
            FilteredCandidates::Grouped(groups) => groups
                .iter()
                .flat_map(|g| g.items.iter().map(String::as_str))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "candidates_tests.rs"]
mod candidates_tests;
