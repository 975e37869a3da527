//! Property-based tests for page arithmetic, filtering and cell formatting.
//!
//! Properties under test:
//! - The page window never leaves `[1, total]`, never exceeds five buttons,
//!   and is a run of consecutive pages
//! - Page navigation on `AppState` keeps the current page in range
//! - Query parameters always lead with `page` and `limit`
//! - Truncated last-update previews are prefixes of the original text

use crate::fetch::TripQuery;
use crate::model::trip::fixtures::trip;
use crate::model::{FilterField, FilterMap, Pagination, TripPage};
use crate::state::pagination::{can_next, can_prev, clamp_page, page_window, PAGE_WINDOW};
use crate::state::{AppState, FilterMode, RevealMode};
use crate::view::format::{ellipsize, truncate_last_update, LAST_UPDATE_PREVIEW_CHARS};
use proptest::prelude::*;
use unicode_width::UnicodeWidthStr;

// ===== Arbitrary Strategies =====

/// Strategy for a (current, total) pair with `current` in range.
fn arb_page_position() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=200).prop_flat_map(|total| (1..=total, Just(total)))
}

fn arb_field() -> impl Strategy<Value = FilterField> {
    prop::sample::select(FilterField::ALL.to_vec())
}

/// Strategy for a filter map with up to every field set.
fn arb_filters() -> impl Strategy<Value = FilterMap> {
    prop::collection::vec((arb_field(), "[a-zA-Z0-9 ]{0,12}"), 0..8).prop_map(|entries| {
        let mut filters = FilterMap::new();
        for (field, value) in entries {
            filters.set(field, value);
        }
        filters
    })
}

/// Navigation steps a user can take from the pagination control.
#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Prev,
    First,
    Last,
    Jump(u32),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Next),
        Just(Step::Prev),
        Just(Step::First),
        Just(Step::Last),
        (0u32..300).prop_map(Step::Jump),
    ]
}

fn loaded_state(total_pages: u32) -> AppState {
    let mut state = AppState::new(FilterMode::Modal, RevealMode::Hover);
    state.apply_page(TripPage {
        data: vec![trip("Trip 0")],
        pagination: Pagination {
            total_pages,
            current_page: 1,
        },
    });
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn page_window_stays_in_range((current, total) in arb_page_position()) {
        let window = page_window(current, total);

        prop_assert!(window.len() as u32 <= PAGE_WINDOW);
        prop_assert!(window.iter().all(|p| (1..=total).contains(p)));
        prop_assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
    }

    /// With at least three pages the current page always has a button.
    #[test]
    fn page_window_shows_current_page((current, total) in arb_page_position()) {
        prop_assume!(total >= 3);

        prop_assert!(page_window(current, total).contains(&current));
    }

    #[test]
    fn clamp_page_lands_in_range(page in 0u32..1000, total in 0u32..100) {
        let clamped = clamp_page(page, total);

        if total == 0 {
            prop_assert_eq!(clamped, 1);
        } else {
            prop_assert!((1..=total).contains(&clamped));
            if (1..=total).contains(&page) {
                prop_assert_eq!(clamped, page);
            }
        }
    }

    #[test]
    fn prev_and_next_agree_with_position((current, total) in arb_page_position()) {
        prop_assert_eq!(can_prev(current), current != 1);
        prop_assert_eq!(can_next(current, total), current != total);
    }

    #[test]
    fn navigation_never_leaves_known_pages(
        total in 1u32..50,
        steps in prop::collection::vec(arb_step(), 1..30),
    ) {
        let mut state = loaded_state(total);

        for step in steps {
            match step {
                Step::Next => { state.next_page(); }
                Step::Prev => { state.prev_page(); }
                Step::First => { state.first_page(); }
                Step::Last => { state.last_page(); }
                Step::Jump(page) => { state.go_to_page(page); }
            }
            prop_assert!((1..=total).contains(&state.current_page()));
        }
    }

    #[test]
    fn query_pairs_lead_with_page_and_limit(page in 1u32..500, filters in arb_filters()) {
        let query = TripQuery::new(page, filters.clone());
        let pairs = query.pairs();

        prop_assert_eq!(pairs.len(), 2 + filters.len());
        prop_assert_eq!(&pairs[0], &("page", page.to_string()));
        prop_assert_eq!(&pairs[1], &("limit", "10".to_string()));
        prop_assert!(pairs[2..].iter().all(|(_, value)| !value.is_empty()));
    }

    #[test]
    fn truncated_last_update_is_a_prefix(text in "\\PC{0,40}") {
        let preview = truncate_last_update(&text);
        let count = text.chars().count();

        if count > LAST_UPDATE_PREVIEW_CHARS {
            let head = preview.strip_suffix("...").unwrap_or(&preview);
            prop_assert_eq!(head.chars().count(), LAST_UPDATE_PREVIEW_CHARS);
            prop_assert!(text.starts_with(head));
        } else {
            prop_assert_eq!(preview, text);
        }
    }

    #[test]
    fn ellipsize_fits_the_width(text in "[a-zA-Z0-9 漢字かな]{0,40}", width in 0usize..30) {
        prop_assert!(ellipsize(&text, width).width() <= width);
    }
}
