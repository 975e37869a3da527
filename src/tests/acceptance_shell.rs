//! Acceptance tests: help overlay, quitting, refresh and fetch failures.

use crate::test_harness::{FakeTripApi, TableHarness};
use crossterm::event::{KeyCode, KeyModifiers};

fn harness() -> TableHarness {
    TableHarness::new(FakeTripApi::with_trip_count(35))
}

// ===== Help =====

#[test]
fn question_mark_toggles_help() {
    let mut h = harness();

    h.send_key(KeyCode::Char('?'));
    assert!(h.state().help_visible);
    assert!(h.render_to_string().contains("Show help overlay"));

    h.send_key(KeyCode::Char('?'));
    assert!(!h.state().help_visible);
}

#[test]
fn help_blocks_navigation_until_closed() {
    let mut h = harness();
    h.send_key(KeyCode::Char('?'));

    h.send_key(KeyCode::Char('l'));
    h.send_key(KeyCode::Char(' '));
    h.settle();

    assert_eq!(h.state().current_page(), 1);
    assert!(!h.state().is_liked(0));
    assert_eq!(h.requested_pages(), vec![1]);

    h.send_key(KeyCode::Esc);
    assert!(!h.state().help_visible);

    h.send_key(KeyCode::Char('l'));
    h.settle();
    assert_eq!(h.state().current_page(), 2);
}

#[test]
fn help_ignores_the_mouse() {
    let mut h = harness();
    h.send_key(KeyCode::Char('?'));

    let next = h.layout().pagination.next.expect("next button");
    h.click_at(next.x + 1, next.y);

    assert_eq!(h.requests_issued(), 1);
}

// ===== Quit =====

#[test]
fn q_quits() {
    let mut h = harness();

    h.send_key(KeyCode::Char('q'));

    assert!(!h.is_running());
}

#[test]
fn q_quits_from_the_help_overlay() {
    let mut h = harness();
    h.send_key(KeyCode::Char('?'));

    h.send_key(KeyCode::Char('q'));

    assert!(!h.is_running());
}

#[test]
fn q_is_typed_into_an_open_filter() {
    let mut h = harness();
    h.send_key(KeyCode::Char('f'));

    h.send_key(KeyCode::Char('q'));

    assert!(h.is_running());
    assert_eq!(h.state().editor.value(crate::model::FilterField::Name), "q");
}

#[test]
fn ctrl_c_quits() {
    let mut h = harness();

    h.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert!(!h.is_running());
}

// ===== Refresh =====

#[test]
fn refresh_requests_the_current_page_again() {
    let mut h = harness();
    h.send_key(KeyCode::Char('l'));
    h.settle();

    h.send_key(KeyCode::Char('r'));
    assert!(h.state().loading);
    h.settle();

    assert_eq!(h.requested_pages(), vec![1, 2, 2]);
    assert!(!h.state().loading);
}

#[test]
fn refresh_picks_up_server_side_changes() {
    let mut h = harness();
    h.api()
        .set_trips(crate::test_harness::numbered_trips(3));

    h.send_key(KeyCode::Char('r'));
    h.settle();

    assert_eq!(h.state().rows().len(), 3);
    assert_eq!(h.state().total_pages(), 1);
    assert!(h.render_to_string().contains("3 trips on this page"));
}

// ===== Failures =====

#[test]
fn failed_fetch_keeps_rows_and_reports_the_error() {
    let mut h = harness();
    h.api().set_failing(true);

    h.send_key(KeyCode::Char('r'));
    h.settle();

    assert!(!h.state().loading);
    let error = h.state().last_error.clone().expect("error recorded");
    assert!(error.contains("HTTP 500"), "unexpected error: {error}");
    assert_eq!(h.state().rows().len(), 10);

    let screen = h.render_to_string();
    assert!(screen.contains("Error: Server returned HTTP 500"));
    assert!(screen.contains("Trip 0"));
}

#[test]
fn failed_page_change_stays_on_the_requested_page() {
    let mut h = harness();
    h.api().set_failing(true);

    h.send_key(KeyCode::Char('l'));
    h.settle();

    assert_eq!(h.state().current_page(), 2);
    assert_eq!(h.state().rows()[0].name, "Trip 0");
    assert!(h.state().last_error.is_some());
}

#[test]
fn next_successful_fetch_clears_the_error() {
    let mut h = harness();
    h.api().set_failing(true);
    h.send_key(KeyCode::Char('r'));
    h.settle();
    assert!(h.state().last_error.is_some());

    h.api().set_failing(false);
    h.send_key(KeyCode::Char('r'));
    h.settle();

    assert!(h.state().last_error.is_none());
    assert!(!h.render_to_string().contains("Error:"));
}
