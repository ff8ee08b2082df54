use super::candidates::SuggestionGroup;

/// Items whose lowercase form contains the lowercase query, in input order
///
/// A blank query suppresses suggestions entirely rather than showing all.
pub fn filter_items(query: &str, items: &[String]) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}

/// Filter each group independently, dropping groups left with no items
pub fn filter_groups(query: &str, groups: &[SuggestionGroup]) -> Vec<SuggestionGroup> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    groups
        .iter()
        .map(|group| SuggestionGroup {
            title: group.title.clone(),
            items: filter_items(query, &group.items),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
