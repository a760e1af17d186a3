//! Window resize handling
//!
//! Debounced resize listener plus the sizing math for the full-viewport
//! background canvas.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use super::listeners::EventHandle;
use crate::error::{Result, UiError};

/// Largest device pixel ratio honoured for the backing store.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Calculate the canvas backing-store size for a viewport.
///
/// The ratio is clamped to `[1, MAX_PIXEL_RATIO]`.
///
/// # Errors
///
/// Returns an error if either dimension is not finite or non-positive.
///
/// # Example
///
/// ```
/// use orin_ui::dom::resize::calculate_canvas_size;
///
/// let (width, height) = calculate_canvas_size(1280.0, 720.0, 2.0)?;
/// assert_eq!((width, height), (2560, 1440));
/// # Ok::<(), orin_ui::error::UiError>(())
/// ```
pub fn calculate_canvas_size(
    window_width: f64,
    window_height: f64,
    pixel_ratio: f64,
) -> Result<(u32, u32)> {
    if !window_width.is_finite() || window_width <= 0.0 {
        return Err(UiError::Canvas(format!(
            "invalid window width: {window_width}"
        )));
    }
    if !window_height.is_finite() || window_height <= 0.0 {
        return Err(UiError::Canvas(format!(
            "invalid window height: {window_height}"
        )));
    }

    let ratio = if pixel_ratio.is_finite() {
        pixel_ratio.clamp(1.0, MAX_PIXEL_RATIO)
    } else {
        1.0
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scale = |v: f64| (v * ratio).floor().max(1.0) as u32;

    Ok((scale(window_width), scale(window_height)))
}

/// Get current window inner dimensions in CSS pixels
///
/// # Errors
///
/// Returns an error if there is no window or its dimensions are not numbers.
pub fn window_size() -> Result<(f64, f64)> {
    let window = super::window()?;
    let read = |value: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .ok_or(UiError::WindowNotAvailable)
    };
    Ok((read(window.inner_width())?, read(window.inner_height())?))
}

/// Owns a resize listener and its pending debounce timer.
///
/// Dropping the handler removes the listener and cancels any pending call.
pub struct ResizeHandler {
    _listener: EventHandle,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ResizeHandler {
    /// Drop the listener now.
    pub fn remove(self) {
        drop(self);
    }
}

impl Drop for ResizeHandler {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

/// Attach a debounced window resize listener.
///
/// `on_resize` receives the window's inner width and height once resizing has
/// been quiet for `debounce_ms`. A `debounce_ms` of zero calls it on every
/// event.
///
/// # Errors
///
/// Returns an error if there is no window or the listener cannot be attached.
pub fn attach_resize_listener<F>(debounce_ms: u32, on_resize: F) -> Result<ResizeHandler>
where
    F: Fn(f64, f64) + 'static,
{
    let window = super::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let on_resize = Rc::new(on_resize);

    let notify = |on_resize: &Rc<F>| match window_size() {
        Ok((width, height)) => on_resize(width, height),
        Err(e) => e.log("resize"),
    };

    let pending_for_listener = Rc::clone(&pending);
    let listener = EventHandle::attach(&window, "resize", move |_| {
        if debounce_ms == 0 {
            notify(&on_resize);
            return;
        }

        // Restart the quiet period; dropping a Timeout cancels it
        pending_for_listener.borrow_mut().take();

        let on_resize = Rc::clone(&on_resize);
        let pending_inner = Rc::clone(&pending_for_listener);
        let timeout = Timeout::new(debounce_ms, move || {
            notify(&on_resize);
            pending_inner.borrow_mut().take();
        });
        *pending_for_listener.borrow_mut() = Some(timeout);
    })?;

    Ok(ResizeHandler {
        _listener: listener,
        pending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_canvas_size_basic() -> Result<()> {
        let (w, h) = calculate_canvas_size(1920.0, 1080.0, 1.0)?;
        assert_eq!((w, h), (1920, 1080));
        Ok(())
    }

    #[test]
    fn test_calculate_canvas_size_scales_by_ratio() -> Result<()> {
        let (w, h) = calculate_canvas_size(375.0, 812.0, 1.5)?;
        assert_eq!((w, h), (562, 1218));
        Ok(())
    }

    #[test]
    fn test_calculate_canvas_size_clamps_high_ratio() -> Result<()> {
        let (w, _) = calculate_canvas_size(1000.0, 800.0, 3.0)?;
        assert_eq!(w, 2000);
        Ok(())
    }

    #[test]
    fn test_calculate_canvas_size_non_finite_ratio_is_one() -> Result<()> {
        let (w, h) = calculate_canvas_size(640.0, 480.0, f64::NAN)?;
        assert_eq!((w, h), (640, 480));
        Ok(())
    }

    #[test]
    fn test_calculate_canvas_size_rejects_zero_width() {
        assert!(calculate_canvas_size(0.0, 600.0, 1.0).is_err());
    }

    #[test]
    fn test_calculate_canvas_size_rejects_nan_height() {
        assert!(calculate_canvas_size(800.0, f64::NAN, 1.0).is_err());
    }
}
