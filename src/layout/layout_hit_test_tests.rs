//! Tests for region hit-testing

use ratatui::layout::{Position, Rect};

use super::*;

fn sample_regions() -> LayoutRegions {
    LayoutRegions {
        selection_log: Some(Rect::new(0, 0, 80, 20)),
        input_bar: Some(Rect::new(10, 20, 60, 3)),
        suggestions_panel: Some(Rect::new(10, 14, 60, 6)),
        help_popup: None,
    }
}

#[test]
fn test_empty_regions_hit_nothing() {
    assert_eq!(region_at(&LayoutRegions::new(), Position::new(5, 5)), None);
}

#[test]
fn test_selection_log_hit() {
    assert_eq!(
        region_at(&sample_regions(), Position::new(2, 2)),
        Some(Region::SelectionLog)
    );
}

#[test]
fn test_panel_overlays_log() {
    assert_eq!(
        region_at(&sample_regions(), Position::new(15, 15)),
        Some(Region::SuggestionsPanel)
    );
}

#[test]
fn test_input_bar_hit() {
    assert_eq!(
        region_at(&sample_regions(), Position::new(15, 21)),
        Some(Region::InputBar)
    );
}

#[test]
fn test_help_popup_overlays_everything() {
    let mut regions = sample_regions();
    regions.help_popup = Some(Rect::new(10, 5, 60, 15));

    assert_eq!(
        region_at(&regions, Position::new(15, 15)),
        Some(Region::HelpPopup)
    );
}

#[test]
fn test_outside_everything() {
    assert_eq!(region_at(&sample_regions(), Position::new(79, 22)), None);
}

#[test]
fn test_clear_resets_regions() {
    let mut regions = sample_regions();
    regions.clear();
    assert_eq!(regions, LayoutRegions::default());
}
