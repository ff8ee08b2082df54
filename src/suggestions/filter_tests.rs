//! Tests for suggestions/filter

use super::*;
use proptest::prelude::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_substring_match_keeps_input_order() {
    let items = strings(&["Apple", "Banana", "Orange"]);
    assert_eq!(filter_items("an", &items), strings(&["Banana", "Orange"]));
}

#[test]
fn test_case_insensitive() {
    let items = strings(&["JavaScript", "TypeScript", "React"]);
    assert_eq!(
        filter_items("SCRIPT", &items),
        strings(&["JavaScript", "TypeScript"])
    );
}

#[test]
fn test_empty_query_suppresses_suggestions() {
    let items = strings(&["Apple", "Banana"]);
    assert!(filter_items("", &items).is_empty());
}

#[test]
fn test_whitespace_query_suppresses_suggestions() {
    let items = strings(&["Bell Pepper", "Apple"]);
    assert!(filter_items("   ", &items).is_empty());
}

#[test]
fn test_inner_whitespace_is_significant() {
    let items = strings(&["Bell Pepper", "Bellpepper"]);
    assert_eq!(filter_items("l p", &items), strings(&["Bell Pepper"]));
}

#[test]
fn test_no_match_returns_empty() {
    let items = strings(&["Apple", "Banana"]);
    assert!(filter_items("xyz", &items).is_empty());
}

#[test]
fn test_empty_candidate_list() {
    assert!(filter_items("a", &[]).is_empty());
}

#[test]
fn test_no_diacritic_folding() {
    let items = strings(&["Café", "Cafe"]);
    assert_eq!(filter_items("cafe", &items), strings(&["Cafe"]));
}

#[test]
fn test_duplicates_are_kept() {
    let items = strings(&["Kiwi", "Kiwi"]);
    assert_eq!(filter_items("kiwi", &items).len(), 2);
}

#[test]
fn test_groups_filtered_independently() {
    let groups = vec![
        SuggestionGroup::new("Fruits", ["Apple", "Banana", "Mango"]),
        SuggestionGroup::new("Vegetables", ["Carrot", "Onion"]),
    ];

    let result = filter_groups("an", &groups);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Fruits");
    assert_eq!(result[0].items, strings(&["Banana", "Mango"]));
}

#[test]
fn test_empty_groups_dropped_order_preserved() {
    let groups = vec![
        SuggestionGroup::new("A", ["tomato"]),
        SuggestionGroup::new("B", ["lettuce"]),
        SuggestionGroup::new("C", ["potato"]),
    ];

    let titles: Vec<String> = filter_groups("to", &groups)
        .into_iter()
        .map(|g| g.title)
        .collect();

    assert_eq!(titles, strings(&["A", "C"]));
}

#[test]
fn test_groups_empty_query() {
    let groups = vec![SuggestionGroup::new("Fruits", ["Apple"])];
    assert!(filter_groups(" ", &groups).is_empty());
}

// =========================================================================
// Property-Based Tests
// =========================================================================

fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

// Filtered output is an order-preserving subsequence of the input, and
// every kept item contains the query case-insensitively.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_filter_is_matching_subsequence(
        items in prop::collection::vec("[a-zA-Z ]{0,8}", 0..20),
        query in "[a-zA-Z]{1,3}"
    ) {
        let result = filter_items(&query, &items);

        prop_assert!(is_subsequence(&result, &items));
        let query_lower = query.to_lowercase();
        for item in &result {
            prop_assert!(item.to_lowercase().contains(&query_lower));
        }
        let expected = items
            .iter()
            .filter(|i| i.to_lowercase().contains(&query_lower))
            .count();
        prop_assert_eq!(result.len(), expected);
    }

    #[test]
    fn prop_blank_query_yields_nothing(
        items in prop::collection::vec("[a-z]{1,8}", 0..20),
        spaces in " {0,4}"
    ) {
        prop_assert!(filter_items(&spaces, &items).is_empty());
    }

    #[test]
    fn prop_grouped_filter_drops_empty_groups_in_order(
        groups in prop::collection::vec(
            ("[A-Z]{1,4}", prop::collection::vec("[a-z]{1,6}", 0..6)),
            0..6
        ),
        query in "[a-z]{1,2}"
    ) {
        let groups: Vec<SuggestionGroup> = groups
            .into_iter()
            .enumerate()
            .map(|(i, (title, items))| SuggestionGroup::new(format!("{}{}", title, i), items))
            .collect();

        let result = filter_groups(&query, &groups);

        prop_assert!(result.iter().all(|g| !g.items.is_empty()));

        let expected_titles: Vec<&str> = groups
            .iter()
            .filter(|g| !filter_items(&query, &g.items).is_empty())
            .map(|g| g.title.as_str())
            .collect();
        let titles: Vec<&str> = result.iter().map(|g| g.title.as_str()).collect();
        prop_assert_eq!(titles, expected_titles);
    }
}
