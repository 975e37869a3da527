//! Acceptance tests: selection, likes and detail popovers.

use crate::state::{FilterMode, Reveal, RevealField, RevealMode};
use crate::test_harness::{FakeTripApi, TableHarness};
use crate::view::layout::Column;
use crossterm::event::KeyCode;

fn hover_mode() -> TableHarness {
    TableHarness::new(FakeTripApi::with_trip_count(35))
}

fn click_mode() -> TableHarness {
    TableHarness::with_modes(
        FakeTripApi::with_trip_count(35),
        FilterMode::Modal,
        RevealMode::Click,
    )
}

const ORIGIN_0: Reveal = Reveal {
    row: 0,
    field: RevealField::Origin,
};

// ===== Likes =====

#[test]
fn space_likes_the_selected_row() {
    let mut h = hover_mode();

    h.send_key(KeyCode::Char('j'));
    h.send_key(KeyCode::Char(' '));

    assert!(!h.state().is_liked(0));
    assert!(h.state().is_liked(1));
    assert!(h.render_to_string().contains('♥'));

    h.send_key(KeyCode::Char(' '));
    assert!(!h.state().is_liked(1));
    assert!(!h.render_to_string().contains('♥'));
}

#[test]
fn clicking_the_heart_toggles_like_without_fetching() {
    let mut h = hover_mode();
    let row = h.layout().table.row_rect(2).expect("row 2");
    let name = h.layout().table.column(Column::Name);

    h.click_at(name.x, row.y);

    assert!(h.state().is_liked(2));
    assert_eq!(h.state().selected(), Some(2));
    assert_eq!(h.requests_issued(), 1);
}

#[test]
fn likes_survive_a_round_trip_through_other_pages() {
    let mut h = hover_mode();
    h.send_key(KeyCode::Char(' '));

    h.send_key(KeyCode::Char('l'));
    h.settle();
    assert!(!h.state().is_liked(0), "Trip 10 was never liked");

    h.send_key(KeyCode::Char('h'));
    h.settle();
    assert_eq!(h.state().rows()[0].name, "Trip 0");
    assert!(h.state().is_liked(0));
}

#[test]
fn likes_follow_the_trip_not_the_row_position() {
    let mut h = hover_mode();
    // Trip 3 is row 3 unfiltered and row 0 once filtered to itself
    h.send_key(KeyCode::Char('j'));
    h.send_key(KeyCode::Char('j'));
    h.send_key(KeyCode::Char('j'));
    h.send_key(KeyCode::Char(' '));

    h.send_key(KeyCode::Char('f'));
    h.type_text("Trip 3");
    h.send_key(KeyCode::Enter);
    h.settle();

    assert_eq!(h.state().rows()[0].name, "Trip 3");
    assert!(h.state().is_liked(0));
    assert!(!h.state().is_liked(1));
}

// ===== Selection =====

#[test]
fn wheel_moves_the_selection() {
    let mut h = hover_mode();
    let body = h.layout().table.body;

    h.scroll_down_at(body.x + 5, body.y);
    h.scroll_down_at(body.x + 5, body.y);
    assert_eq!(h.state().selected(), Some(2));

    h.scroll_up_at(body.x + 5, body.y);
    assert_eq!(h.state().selected(), Some(1));
}

#[test]
fn clicking_a_plain_cell_selects_the_row() {
    let mut h = hover_mode();
    let row = h.layout().table.row_rect(4).expect("row 4");
    let vehicle = h.layout().table.column(Column::Vehicle);

    h.click_at(vehicle.x + 1, row.y);

    assert_eq!(h.state().selected(), Some(4));
    assert!(!h.state().is_liked(4));
}

// ===== Hover popovers =====

#[test]
fn hovering_a_route_cell_opens_its_popover() {
    let mut h = hover_mode();
    let origin = h.layout().table.reveal_anchor(ORIGIN_0).expect("anchor");

    h.hover_at(origin.x + 1, origin.y);

    assert_eq!(h.state().reveal.current(), Some(ORIGIN_0));
    assert_eq!(h.state().revealed_text(), Some("Mumbai Central Warehouse"));
    assert!(h.layout().popover.is_some());
}

#[test]
fn pointer_on_the_popover_keeps_it_open() {
    let mut h = hover_mode();
    let origin = h.layout().table.reveal_anchor(ORIGIN_0).expect("anchor");
    h.hover_at(origin.x + 1, origin.y);

    let popover = h.layout().popover.expect("popover");
    h.hover_at(popover.x + 1, popover.y + 1);

    assert_eq!(h.state().reveal.current(), Some(ORIGIN_0));
}

#[test]
fn moving_away_closes_the_popover() {
    let mut h = hover_mode();
    let origin = h.layout().table.reveal_anchor(ORIGIN_0).expect("anchor");
    h.hover_at(origin.x + 1, origin.y);

    let title = h.layout().title;
    h.hover_at(title.x + 2, title.y);

    assert!(!h.state().reveal.is_open());
    assert!(h.layout().popover.is_none());
}

#[test]
fn hovering_another_cell_moves_the_popover() {
    let mut h = hover_mode();
    let last_update = Reveal {
        row: 1,
        field: RevealField::LastUpdate,
    };
    let origin = h.layout().table.reveal_anchor(ORIGIN_0).expect("anchor");
    let update = h.layout().table.reveal_anchor(last_update).expect("anchor");

    h.hover_at(origin.x + 1, origin.y);
    h.hover_at(update.x + 1, update.y);

    assert_eq!(h.state().reveal.current(), Some(last_update));
    assert_eq!(h.state().revealed_text(), Some("Crossed toll plaza"));
}

#[test]
fn clicks_do_not_toggle_popovers_in_hover_mode() {
    let mut h = hover_mode();
    let origin = h.layout().table.reveal_anchor(ORIGIN_0).expect("anchor");

    h.click_at(origin.x + 1, origin.y);

    assert!(!h.state().reveal.is_open());
    assert_eq!(h.state().selected(), Some(0));
}

// ===== Click popovers =====

#[test]
fn clicking_a_cell_toggles_its_popover() {
    let mut h = click_mode();
    let origin = h.layout().table.reveal_anchor(ORIGIN_0).expect("anchor");

    h.click_at(origin.x + 1, origin.y);
    assert_eq!(h.state().reveal.current(), Some(ORIGIN_0));

    h.click_at(origin.x + 1, origin.y);
    assert!(!h.state().reveal.is_open());
}

#[test]
fn hover_does_nothing_in_click_mode() {
    let mut h = click_mode();
    let origin = h.layout().table.reveal_anchor(ORIGIN_0).expect("anchor");

    h.hover_at(origin.x + 1, origin.y);

    assert!(!h.state().reveal.is_open());
}

#[test]
fn keyboard_reveals_the_selected_row() {
    let mut h = click_mode();
    h.send_key(KeyCode::Char('j'));

    h.send_key(KeyCode::Char('d'));
    assert_eq!(
        h.state().reveal.current(),
        Some(Reveal {
            row: 1,
            field: RevealField::Destination
        })
    );
    assert!(h.render_to_string().contains("Pune Distribution Hub"));

    h.send_key(KeyCode::Esc);
    assert!(!h.state().reveal.is_open());
}

#[test]
fn clicking_a_plain_cell_closes_the_popover() {
    let mut h = click_mode();
    h.send_key(KeyCode::Char('o'));
    assert!(h.state().reveal.is_open());

    let row = h.layout().table.row_rect(5).expect("row 5");
    let status = h.layout().table.column(Column::Status);
    h.click_at(status.x + 1, row.y);

    assert!(!h.state().reveal.is_open());
    assert_eq!(h.state().selected(), Some(5));
}

#[test]
fn changing_page_closes_the_popover() {
    let mut h = click_mode();
    h.send_key(KeyCode::Char('u'));
    assert!(h.state().reveal.is_open());

    h.send_key(KeyCode::Char('l'));
    assert!(!h.state().reveal.is_open());
    h.settle();

    assert!(h.layout().popover.is_none());
}
