//! Raw input event decoding.

use orin_core::WheelInput;
use wasm_bindgen::JsCast;
use web_sys::{Event, TouchEvent, TouchList, WheelEvent};

/// `WheelEvent.DOM_DELTA_LINE`
pub const DELTA_LINE: u32 = 1;
/// `WheelEvent.DOM_DELTA_PAGE`
pub const DELTA_PAGE: u32 = 2;
/// Pixels per line for line-mode wheels.
pub const LINE_HEIGHT_PX: f64 = 16.0;

/// Convert a wheel delta to pixels.
///
/// Firefox with a mouse wheel reports lines and some devices report pages;
/// the gesture thresholds are calibrated in pixels.
#[must_use]
pub fn normalize_wheel_delta(delta_y: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        DELTA_LINE => delta_y * LINE_HEIGHT_PX,
        DELTA_PAGE => delta_y * page_height,
        _ => delta_y,
    }
}

/// Line and page deltas come from detented wheels.
#[must_use]
pub const fn is_notched(delta_mode: u32) -> bool {
    matches!(delta_mode, DELTA_LINE | DELTA_PAGE)
}

/// Controller input for `event`, if it is a wheel event.
#[must_use]
pub fn wheel_input(event: &Event, page_height: f64, now: f64) -> Option<WheelInput> {
    let wheel = event.dyn_ref::<WheelEvent>()?;
    let mode = wheel.delta_mode();
    let delta_y = normalize_wheel_delta(wheel.delta_y(), mode, page_height);
    Some(if is_notched(mode) {
        WheelInput::notched(delta_y, now)
    } else {
        WheelInput::pixels(delta_y, now)
    })
}

/// Client Y of the first touch that started this touch event.
#[must_use]
pub fn touch_start_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?;
    first_client_y(&touch.touches())
}

/// Client Y of the first touch that lifted in this touch event.
#[must_use]
pub fn touch_end_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?;
    first_client_y(&touch.changed_touches())
}

fn first_client_y(list: &TouchList) -> Option<f64> {
    list.get(0).map(|t| f64::from(t.client_y()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_mode_passes_through() {
        assert!((normalize_wheel_delta(42.5, 0, 900.0) - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_line_mode_scales_by_line_height() {
        assert!((normalize_wheel_delta(3.0, DELTA_LINE, 900.0) - 48.0).abs() < f64::EPSILON);
        assert!((normalize_wheel_delta(-3.0, DELTA_LINE, 900.0) + 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_page_mode_scales_by_page_height() {
        assert!((normalize_wheel_delta(1.0, DELTA_PAGE, 720.0) - 720.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_only_line_and_page_modes_are_notched() {
        assert!(is_notched(DELTA_LINE));
        assert!(is_notched(DELTA_PAGE));
        assert!(!is_notched(0));
    }

    #[test]
    fn test_unknown_mode_is_treated_as_pixels() {
        assert!((normalize_wheel_delta(7.0, 9, 720.0) - 7.0).abs() < f64::EPSILON);
    }
}
