//! Tests for keyboard navigation

use super::*;
use proptest::prelude::*;

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_new_has_no_selection() {
    assert_eq!(KeyboardNavigator::new().selected(), None);
}

#[test]
fn test_down_from_none_selects_first() {
    let mut nav = KeyboardNavigator::new();
    assert_eq!(nav.handle(NavKey::Down, 3), NavOutcome::Moved);
    assert_eq!(nav.selected(), Some(0));
}

#[test]
fn test_down_on_empty_list_stays_unselected() {
    let mut nav = KeyboardNavigator::new();
    assert_eq!(nav.handle(NavKey::Down, 0), NavOutcome::Unchanged);
    assert_eq!(nav.selected(), None);
}

#[test]
fn test_down_clamps_at_end() {
    let mut nav = KeyboardNavigator::new();
    nav.handle(NavKey::Down, 3);
    nav.handle(NavKey::Down, 3);
    nav.handle(NavKey::Down, 3);
    assert_eq!(nav.selected(), Some(2));

    assert_eq!(nav.handle(NavKey::Down, 3), NavOutcome::Unchanged);
    assert_eq!(nav.selected(), Some(2));
}

#[test]
fn test_up_from_first_clears_selection() {
    let mut nav = KeyboardNavigator::new();
    nav.handle(NavKey::Down, 3);
    assert_eq!(nav.handle(NavKey::Up, 3), NavOutcome::Moved);
    assert_eq!(nav.selected(), None);
}

#[test]
fn test_up_moves_back() {
    let mut nav = KeyboardNavigator::new();
    nav.select(2, 3);
    nav.handle(NavKey::Up, 3);
    assert_eq!(nav.selected(), Some(1));
}

#[test]
fn test_up_without_selection_is_noop() {
    let mut nav = KeyboardNavigator::new();
    assert_eq!(nav.handle(NavKey::Up, 3), NavOutcome::Unchanged);
    assert_eq!(nav.selected(), None);
}

#[test]
fn test_enter_commits_and_clears() {
    let mut nav = KeyboardNavigator::new();
    nav.select(1, 3);
    assert_eq!(nav.handle(NavKey::Enter, 3), NavOutcome::Commit(1));
    assert_eq!(nav.selected(), None);
}

#[test]
fn test_enter_without_selection_does_nothing() {
    let mut nav = KeyboardNavigator::new();
    assert_eq!(nav.handle(NavKey::Enter, 3), NavOutcome::Unchanged);
}

#[test]
fn test_escape_always_clears() {
    let mut nav = KeyboardNavigator::new();
    assert_eq!(nav.handle(NavKey::Escape, 3), NavOutcome::Cancelled);

    nav.select(2, 3);
    assert_eq!(nav.handle(NavKey::Escape, 3), NavOutcome::Cancelled);
    assert_eq!(nav.selected(), None);
}

#[test]
fn test_select_out_of_range_ignored() {
    let mut nav = KeyboardNavigator::new();
    nav.select(0, 2);
    nav.select(5, 2);
    assert_eq!(nav.selected(), Some(0));
}

#[test]
fn test_reset() {
    let mut nav = KeyboardNavigator::new();
    nav.select(1, 2);
    nav.reset();
    assert_eq!(nav.selected(), None);
}

mod nav_key_tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_keys_map() {
        assert_eq!(
            NavKey::from_key(&key(KeyCode::Down, KeyModifiers::NONE)),
            Some(NavKey::Down)
        );
        assert_eq!(
            NavKey::from_key(&key(KeyCode::Up, KeyModifiers::NONE)),
            Some(NavKey::Up)
        );
        assert_eq!(
            NavKey::from_key(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(NavKey::Enter)
        );
        assert_eq!(
            NavKey::from_key(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(NavKey::Escape)
        );
    }

    #[test]
    fn test_text_keys_do_not_map() {
        assert_eq!(
            NavKey::from_key(&key(KeyCode::Char('j'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            NavKey::from_key(&key(KeyCode::Left, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_ctrl_and_alt_chords_left_to_host() {
        assert_eq!(
            NavKey::from_key(&key(KeyCode::Down, KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            NavKey::from_key(&key(KeyCode::Enter, KeyModifiers::ALT)),
            None
        );
    }
}

// =========================================================================
// Property-Based Tests
// =========================================================================

fn nav_key() -> impl Strategy<Value = NavKey> {
    prop_oneof![
        Just(NavKey::Down),
        Just(NavKey::Up),
        Just(NavKey::Enter),
        Just(NavKey::Escape),
    ]
}

// Any key sequence keeps the selection inside [-1, count-1].
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_selection_stays_in_bounds(
        count in 0usize..8,
        keys in prop::collection::vec(nav_key(), 0..40)
    ) {
        let mut nav = KeyboardNavigator::new();
        for key in keys {
            if let NavOutcome::Commit(index) = nav.handle(key, count) {
                prop_assert!(index < count);
            }
            if let Some(selected) = nav.selected() {
                prop_assert!(selected < count);
            }
        }
    }

    #[test]
    fn prop_down_n_times_lands_on_last(count in 1usize..20, extra in 0usize..5) {
        let mut nav = KeyboardNavigator::new();
        for _ in 0..(count + extra) {
            nav.handle(NavKey::Down, count);
        }
        prop_assert_eq!(nav.selected(), Some(count - 1));
    }
}
