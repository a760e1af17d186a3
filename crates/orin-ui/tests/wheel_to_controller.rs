//! Integration tests for the path from raw wheel deltas to controller
//! decisions, using the embedded tuning the page ships with.

use orin_core::{Command, FittedPanels, SectionScrollController, SectionSequence, WheelInput};
use orin_ui::config::load_scroll_config;
use orin_ui::scroll::input::{DELTA_LINE, DELTA_PAGE, is_notched, normalize_wheel_delta};

const PAGE_HEIGHT: f64 = 900.0;

fn desktop_controller() -> SectionScrollController {
    let mut controller =
        SectionScrollController::new(load_scroll_config(), SectionSequence::default());
    let _ = controller.mount(1_440.0);
    controller
}

/// What the wheel listener builds from a raw `WheelEvent`.
fn decoded(delta_y: f64, delta_mode: u32, now: f64) -> WheelInput {
    let delta_y = normalize_wheel_delta(delta_y, delta_mode, PAGE_HEIGHT);
    if is_notched(delta_mode) {
        WheelInput::notched(delta_y, now)
    } else {
        WheelInput::pixels(delta_y, now)
    }
}

#[test]
fn given_one_firefox_line_notch_when_decoded_then_controller_snaps() {
    let mut controller = desktop_controller();

    // 3 lines per notch is 48px, trackpad-sized in pixels
    let reaction = controller.on_wheel(decoded(3.0, DELTA_LINE, 0.0), &FittedPanels);

    assert!(reaction.prevent_default);
    assert!(reaction.contains(Command::RequestFrame));
    let _ = controller.on_frame();
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn given_single_line_tick_when_decoded_then_still_one_click() {
    let mut controller = desktop_controller();

    let reaction = controller.on_wheel(decoded(1.0, DELTA_LINE, 0.0), &FittedPanels);

    assert!(reaction.prevent_default);
    assert!(reaction.contains(Command::RequestFrame));
}

#[test]
fn given_trackpad_pixels_of_notch_size_when_decoded_then_only_debounce_is_armed() {
    let mut controller = desktop_controller();

    let reaction = controller.on_wheel(decoded(48.0, 0, 0.0), &FittedPanels);

    assert!(reaction.prevent_default);
    assert!(!reaction.contains(Command::RequestFrame));
    assert!(!controller.is_transitioning());
}

#[test]
fn given_page_mode_delta_when_decoded_then_controller_snaps() {
    let mut controller = desktop_controller();

    let reaction = controller.on_wheel(decoded(1.0, DELTA_PAGE, 0.0), &FittedPanels);

    assert!(reaction.contains(Command::RequestFrame));
    let frame = controller.on_frame();
    assert_eq!(controller.current_index(), 1);
    assert_eq!(frame.scrolled_to(), SectionSequence::default().get(1));
}

#[test]
fn given_mobile_width_when_wheeling_then_browser_scrolls_natively() {
    let mut controller =
        SectionScrollController::new(load_scroll_config(), SectionSequence::default());
    let _ = controller.mount(390.0);

    let reaction = controller.on_wheel(decoded(3.0, DELTA_LINE, 0.0), &FittedPanels);

    assert!(!reaction.prevent_default);
    assert!(reaction.commands.is_empty());
}
