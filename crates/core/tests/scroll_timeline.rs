//! Timeline tests for the section scroll controller.
//!
//! Each test scripts a sequence of inputs against a virtual clock and checks
//! where the page ends up and which sections were scrolled into view.

mod common;

use common::{DESKTOP_WIDTH, Harness, MOBILE_WIDTH};
use orin_core::{PanelGeometry, Phase, SectionId};

// ============================================================================
// WHEEL ACCUMULATION
// ============================================================================

#[test]
fn given_single_sub_threshold_event_when_debounce_elapses_then_index_unchanged() {
    let mut page = Harness::desktop();

    page.wheel(8.0);
    page.settle();

    assert_eq!(page.index(), 0);
    assert!(page.visits.is_empty());
    assert!(page.controller.accumulator().is_empty());
}

#[test]
fn given_trackpad_stream_when_total_reaches_threshold_then_navigates() {
    let mut page = Harness::desktop();

    page.wheel(25.0);
    page.advance(30.0);
    page.wheel(25.0);
    page.advance(30.0);
    assert!(!page.controller.is_transitioning(), "50 < 60 so no snap yet");

    page.wheel(25.0);
    assert!(page.controller.is_transitioning());

    page.settle();
    assert_eq!(page.index(), 1);
    assert_eq!(page.visits.len(), 1);
}

#[test]
fn given_events_spaced_beyond_window_when_scrolling_then_nothing_accumulates() {
    let mut page = Harness::desktop();

    for _ in 0..6 {
        page.wheel(8.0);
        page.advance(400.0);
    }

    assert_eq!(page.index(), 0);
    assert!(page.visits.is_empty());
}

#[test]
fn given_direction_flip_when_accumulating_then_total_restarts() {
    let mut page = Harness::desktop();
    page.dot(1);
    page.settle();

    page.wheel(25.0);
    page.advance(20.0);
    page.wheel(-25.0);
    page.advance(20.0);
    page.wheel(25.0);

    assert!(!page.controller.is_transitioning());
    assert!((page.controller.accumulator().magnitude() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn given_quiet_two_event_stream_past_trailing_ratio_when_debounce_elapses_then_navigates() {
    let mut page = Harness::desktop();

    // 40 is below the trackpad threshold of 60 but past
    // `trailing_commit_ratio` (0.5) of it, from two events, so the debounce
    // commits. A lone event of any size below 60 never does.

    page.wheel(20.0);
    page.advance(40.0);
    page.wheel(20.0);
    page.settle();

    assert_eq!(page.index(), 1);
}

#[test]
fn given_mouse_wheel_notch_when_scrolling_down_then_snaps_next_frame() {
    let mut page = Harness::desktop();

    let reaction = page.wheel(100.0);

    assert!(reaction.prevent_default);
    assert_eq!(page.index(), 0, "index commits on the animation frame");
    page.advance(20.0);
    assert_eq!(page.index(), 1);
    assert_eq!(page.visits.first().map(|v| v.1), Some(SectionId::Mission));
}

#[test]
fn given_line_mode_wheel_when_one_notch_then_snaps_without_waiting() {
    let mut page = Harness::desktop();

    // Firefox: 3 lines x 16px
    page.notch(48.0);
    page.advance(20.0);

    assert_eq!(page.index(), 1);
    assert_eq!(page.visits.first().map(|v| v.1), Some(SectionId::Mission));
}

#[test]
fn given_line_mode_wheel_when_notching_back_up_then_returns() {
    let mut page = Harness::desktop();
    page.notch(48.0);
    page.settle();

    page.notch(-48.0);
    page.settle();

    assert_eq!(page.index(), 0);
}

// ============================================================================
// BOUNDARIES
// ============================================================================

#[test]
fn given_first_section_when_scrolling_up_then_unchanged_and_accumulator_reset() {
    let mut page = Harness::desktop();

    page.wheel(-300.0);
    page.settle();

    assert_eq!(page.index(), 0);
    assert!(page.controller.accumulator().is_empty());
    assert!(page.visits.is_empty());
}

#[test]
fn given_last_section_when_scrolling_down_then_unchanged_and_accumulator_reset() {
    let mut page = Harness::desktop();
    page.dot(4);
    page.settle();
    assert_eq!(page.index(), 4);
    let visited = page.visits.len();

    page.wheel(300.0);
    page.settle();

    assert_eq!(page.index(), 4);
    assert!(page.controller.accumulator().is_empty());
    assert_eq!(page.visits.len(), visited);
}

// ============================================================================
// TRANSITION LOCK
// ============================================================================

#[test]
fn given_transition_in_flight_when_any_trigger_arrives_then_dropped() {
    let mut page = Harness::desktop();
    page.wheel(150.0);
    page.advance(20.0);
    assert_eq!(page.controller.phase(), Phase::Transitioning);

    page.wheel(150.0);
    page.swipe(700.0, 200.0);
    page.dot(4);
    page.advance(100.0);

    assert_eq!(page.index(), 1);
    assert_eq!(page.visits.len(), 1);
}

#[test]
fn given_settle_delay_elapsed_when_next_trigger_arrives_then_accepted() {
    let mut page = Harness::desktop();
    page.wheel(150.0);
    page.advance(799.0);
    assert!(page.controller.is_transitioning());

    page.advance(2.0);
    assert!(!page.controller.is_transitioning());

    page.wheel(150.0);
    page.settle();
    assert_eq!(page.index(), 2);
}

// ============================================================================
// DOT TRAVERSAL
// ============================================================================

#[test]
fn given_first_section_when_dot_three_clicked_then_visits_each_section_in_order() {
    let mut page = Harness::desktop();
    page.advance(1_000.0);
    let start = page.now;

    page.dot(3);
    page.advance(1_200.0);

    let visited: Vec<SectionId> = page.visits.iter().map(|v| v.1).collect();
    assert_eq!(
        visited,
        [SectionId::Mission, SectionId::Founders, SectionId::Pricing]
    );
    let times: Vec<f64> = page.visits.iter().map(|v| v.0 - start).collect();
    assert_eq!(times, [0.0, 500.0, 1_000.0]);

    assert!(page.controller.is_transitioning(), "lock held through the last settle");
    page.advance(800.0);
    assert!(!page.controller.is_transitioning());
    assert_eq!(page.index(), 3);
}

#[test]
fn given_last_section_when_dot_zero_clicked_then_walks_back_up() {
    let mut page = Harness::desktop();
    page.dot(4);
    page.settle();
    page.visits.clear();

    page.dot(0);
    page.settle();

    let visited: Vec<SectionId> = page.visits.iter().map(|v| v.1).collect();
    assert_eq!(
        visited,
        [
            SectionId::Pricing,
            SectionId::Founders,
            SectionId::Mission,
            SectionId::Home
        ]
    );
}

// ============================================================================
// OVERFLOWING SECTIONS
// ============================================================================

#[test]
fn given_overflowing_section_scrolled_to_interior_when_wheeling_then_never_navigates() {
    let mut page = Harness::desktop();
    page.panels
        .set(SectionId::Home, PanelGeometry::new(400.0, 2000.0, 900.0));

    for delta in [5.0, -5.0, 40.0, 150.0, -600.0, 1_000.0] {
        let reaction = page.wheel(delta);
        assert!(!reaction.prevent_default, "native scroll must handle {delta}");
        page.advance(50.0);
    }
    page.settle();

    assert_eq!(page.index(), 0);
    assert!(page.visits.is_empty());
}

#[test]
fn given_overflowing_section_at_bottom_when_wheeling_forward_then_navigates() {
    let mut page = Harness::desktop();
    page.panels
        .set(SectionId::Home, PanelGeometry::new(1_100.0, 2000.0, 900.0));

    let reaction = page.wheel(120.0);
    page.settle();

    assert!(reaction.prevent_default);
    assert_eq!(page.index(), 1);
}

#[test]
fn given_overflowing_section_at_bottom_when_wheeling_back_then_native() {
    let mut page = Harness::desktop();
    page.dot(1);
    page.settle();
    page.panels
        .set(SectionId::Mission, PanelGeometry::new(1_100.0, 2000.0, 900.0));

    let reaction = page.wheel(-120.0);
    page.settle();

    assert!(!reaction.prevent_default);
    assert_eq!(page.index(), 1);
}

#[test]
fn given_trailing_section_at_top_when_wheeling_back_then_returns_to_pricing() {
    let mut page = Harness::desktop();
    page.dot(4);
    page.settle();
    page.panels
        .set(SectionId::Newsletter, PanelGeometry::new(0.0, 1_800.0, 900.0));

    page.wheel(-120.0);
    page.settle();

    assert_eq!(page.index(), 3);
}

#[test]
fn given_overflowing_section_when_swiping_then_native() {
    let mut page = Harness::desktop();
    page.panels
        .set(SectionId::Home, PanelGeometry::new(0.0, 2000.0, 900.0));

    let reaction = page.swipe(700.0, 100.0);
    page.settle();

    assert!(reaction.commands.is_empty());
    assert_eq!(page.index(), 0);
}

// ============================================================================
// TOUCH
// ============================================================================

#[test]
fn given_fitted_section_when_swiping_down_then_goes_back() {
    let mut page = Harness::desktop();
    page.dot(2);
    page.settle();

    page.swipe(200.0, 500.0);
    page.settle();

    assert_eq!(page.index(), 1);
}

// ============================================================================
// VIEWPORT MODE
// ============================================================================

#[test]
fn given_breakpoint_crossings_when_resizing_then_lock_and_listeners_toggle_without_leaks() {
    let mut page = Harness::desktop();
    assert!(page.document_locked);
    assert_eq!(page.listeners_attached, 1);

    page.resize(MOBILE_WIDTH);
    assert!(!page.document_locked);
    assert_eq!(page.listeners_attached, 0);

    page.resize(DESKTOP_WIDTH);
    page.resize(DESKTOP_WIDTH + 200.0);
    page.resize(DESKTOP_WIDTH);
    assert!(page.document_locked);
    assert_eq!(page.listeners_attached, 1);
}

#[test]
fn given_same_mode_when_resizing_then_no_commands() {
    let mut page = Harness::desktop();
    let reaction = page.resize(DESKTOP_WIDTH - 300.0);
    assert!(reaction.commands.is_empty());
}

#[test]
fn given_pending_debounce_when_switching_to_mobile_then_cancelled() {
    let mut page = Harness::desktop();
    page.wheel(20.0);
    page.advance(20.0);
    page.wheel(20.0);

    page.resize(MOBILE_WIDTH);
    page.settle();

    assert_eq!(page.index(), 0);
    assert!(page.controller.accumulator().is_empty());
}

#[test]
fn given_mobile_when_wheeling_then_controller_inactive() {
    let mut page = Harness::new();
    page.mount(MOBILE_WIDTH);

    let reaction = page.wheel(400.0);
    page.settle();

    assert!(!reaction.prevent_default);
    assert_eq!(page.index(), 0);
}

// ============================================================================
// TEARDOWN
// ============================================================================

#[test]
fn given_traversal_in_flight_when_torn_down_then_no_callbacks_remain() {
    let mut page = Harness::desktop();
    page.dot(4);
    page.advance(100.0);

    page.teardown();

    assert!(!page.has_scheduled());
    assert_eq!(page.listeners_attached, 0);
    assert!(!page.document_locked);

    let visited = page.visits.len();
    page.settle();
    assert_eq!(page.visits.len(), visited);
}

// ============================================================================
// MOBILE NAVIGATION
// ============================================================================

#[test]
fn given_mobile_when_dot_clicked_after_native_scroll_back_then_scrolls_again() {
    let mut page = Harness::new();
    page.mount(MOBILE_WIDTH);

    page.dot(1);
    page.native_scroll_to(0);
    let reaction = page.dot(1);

    assert_eq!(reaction.scrolled_to(), Some(SectionId::Mission));
    assert_eq!(page.visits.len(), 2);
    assert_eq!(page.index(), 1);
    assert!(!page.has_scheduled());
}

#[test]
fn given_mobile_when_home_clicked_with_stale_index_then_still_scrolls() {
    let mut page = Harness::new();
    page.mount(MOBILE_WIDTH);

    // scrolled by hand; the index was never told
    let reaction = page.dot(0);

    assert_eq!(reaction.scrolled_to(), Some(SectionId::Home));
    assert!(!page.controller.is_transitioning());
}

#[test]
fn given_mobile_when_scrolling_natively_then_index_follows() {
    let mut page = Harness::new();
    page.mount(MOBILE_WIDTH);

    page.native_scroll_to(3);
    assert_eq!(page.index(), 3);
    page.native_scroll_to(1);
    assert_eq!(page.index(), 1);
    assert!(page.visits.is_empty());
}
