//! Row model for the suggestions panel
//!
//! Grouped candidates render a title row before each group's items, so panel
//! rows and flattened item indices differ. Rendering and mouse hit-testing
//! both go through these rows.

use crate::suggestions::FilteredCandidates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRow<'a> {
    Header(&'a str),
    Item { index: usize, text: &'a str },
}

pub fn panel_rows(filtered: &FilteredCandidates) -> Vec<PanelRow<'_>> {
    match filtered {
        FilteredCandidates::Flat(items) => items
            .iter()
            .enumerate()
            .map(|(index, text)| PanelRow::Item {
                index,
                text: text.as_str(),
            })
            .collect(),
        FilteredCandidates::Grouped(groups) => {
            let mut rows = Vec::new();
            let mut index = 0;
            for group in groups {
                rows.push(PanelRow::Header(group.title.as_str()));
                for text in &group.items {
                    rows.push(PanelRow::Item {
                        index,
                        text: text.as_str(),
                    });
                    index += 1;
                }
            }
            rows
        }
    }
}

/// Row position of the item with the given flattened index
pub fn row_of_item(rows: &[PanelRow<'_>], index: usize) -> Option<usize> {
    rows.iter()
        .position(|row| matches!(row, PanelRow::Item { index: i, .. } if *i == index))
}

/// Scroll offset that keeps `row` inside a viewport of `viewport` rows
///
/// When the row is the first item of a group, its title row is kept in view
/// too.
pub fn scroll_to_show(rows: &[PanelRow<'_>], scroll: usize, row: usize, viewport: usize) -> usize {
    if viewport == 0 {
        return scroll;
    }

    let top = match row.checked_sub(1).and_then(|above| rows.get(above)) {
        Some(PanelRow::Header(_)) => row - 1,
        _ => row,
    };

    if top < scroll {
        top
    } else if row >= scroll + viewport {
        row + 1 - viewport
    } else {
        scroll
    }
}

/// Largest scroll offset that still fills the viewport
pub fn max_scroll(row_count: usize, viewport: usize) -> usize {
    row_count.saturating_sub(viewport)
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod panel_tests;
