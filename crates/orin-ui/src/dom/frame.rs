//! requestAnimationFrame helpers
//!
//! Two shapes are needed: a one-shot `FrameRequest` the scroll driver uses to
//! defer an index commit to the next paint, and a continuous loop for the
//! animated background that pauses while the tab is hidden.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::listeners::EventHandle;
use crate::error::{Result, UiError};

/// A single pending animation frame, cancelled if dropped before it fires.
pub struct FrameRequest {
    window: Window,
    id: i32,
    _closure: Closure<dyn FnMut(f64)>,
}

impl FrameRequest {
    /// Schedule `callback` for the next frame.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or the request is rejected.
    pub fn new<F>(callback: F) -> Result<Self>
    where
        F: FnOnce(f64) + 'static,
    {
        let window = super::window()?;
        let closure: Closure<dyn FnMut(f64)> = Closure::once(callback);
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| UiError::FrameRequestFailed(format!("{e:?}")))?;
        Ok(Self {
            window,
            id,
            _closure: closure,
        })
    }
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        // No-op if the frame already ran.
        let _ = self.window.cancel_animation_frame(self.id);
    }
}

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Frames are being scheduled
    Running,
    /// Tab hidden; resumes on `visibilitychange`
    Paused,
    /// Stopped for good
    Stopped,
}

/// Frame timing information
#[derive(Debug, Clone, Copy)]
pub struct FrameTiming {
    /// Current timestamp from RAF (milliseconds)
    pub timestamp: f64,
    /// Delta time since last frame (milliseconds)
    pub delta: f64,
    /// Frames per second (calculated)
    pub fps: f64,
}

impl FrameTiming {
    const fn initial(timestamp: f64) -> Self {
        Self {
            timestamp,
            delta: 0.0,
            fps: 60.0,
        }
    }

    fn next(self, timestamp: f64) -> Self {
        let delta = timestamp - self.timestamp;
        let fps = if delta > 0.0 { 1000.0 / delta } else { 60.0 };

        Self {
            timestamp,
            delta,
            fps,
        }
    }
}

struct LoopState {
    window: Window,
    state: Cell<AnimationState>,
    request_id: Cell<Option<i32>>,
    timing: Cell<Option<FrameTiming>>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    visibility: RefCell<Option<EventHandle>>,
}

impl LoopState {
    fn schedule(&self) -> Result<()> {
        let closure = self.closure.borrow();
        let callback = closure
            .as_ref()
            .ok_or_else(|| UiError::FrameRequestFailed("loop is stopped".to_string()))?;
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| UiError::FrameRequestFailed(format!("{e:?}")))?;
        self.request_id.set(Some(id));
        Ok(())
    }

    fn cancel_pending(&self) {
        if let Some(id) = self.request_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }

    fn pause(&self) {
        if self.state.get() == AnimationState::Running {
            self.state.set(AnimationState::Paused);
            self.cancel_pending();
        }
    }

    fn resume(&self) {
        if self.state.get() != AnimationState::Paused {
            return;
        }
        self.state.set(AnimationState::Running);
        // Restart timing so the first frame back has no huge delta.
        self.timing.set(None);
        if let Err(e) = self.schedule() {
            e.log("animation resume");
        }
    }
}

/// Handle to a running animation loop. Dropping it stops the loop.
pub struct AnimationHandle {
    inner: Rc<LoopState>,
}

impl AnimationHandle {
    /// Stop the loop, cancel the pending frame and remove the visibility
    /// listener.
    pub fn stop(&self) {
        self.inner.state.set(AnimationState::Stopped);
        self.inner.cancel_pending();
        self.inner.visibility.borrow_mut().take();
        self.inner.closure.borrow_mut().take();
    }

    pub fn pause(&self) {
        self.inner.pause();
    }

    pub fn resume(&self) {
        self.inner.resume();
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.inner.state.get()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start a `requestAnimationFrame` loop that calls `render_fn` every frame.
///
/// The loop pauses while the document is hidden and resumes when it becomes
/// visible again.
///
/// # Errors
///
/// Returns an error if the window or document is unavailable, the first
/// frame cannot be scheduled, or the visibility listener cannot be attached.
pub fn start_animation_loop<F>(render_fn: F) -> Result<AnimationHandle>
where
    F: Fn(FrameTiming) + 'static,
{
    let window = super::window()?;
    let document = window.document().ok_or(UiError::DocumentNotAvailable)?;

    let inner = Rc::new(LoopState {
        window,
        state: Cell::new(AnimationState::Running),
        request_id: Cell::new(None),
        timing: Cell::new(None),
        closure: RefCell::new(None),
        visibility: RefCell::new(None),
    });

    let weak: Weak<LoopState> = Rc::downgrade(&inner);
    *inner.closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.request_id.set(None);
        if state.state.get() != AnimationState::Running {
            return;
        }

        let timing = state
            .timing
            .get()
            .map_or_else(|| FrameTiming::initial(timestamp), |t| t.next(timestamp));
        state.timing.set(Some(timing));

        render_fn(timing);

        if state.state.get() == AnimationState::Running {
            if let Err(e) = state.schedule() {
                e.log("animation frame");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let weak = Rc::downgrade(&inner);
    let visibility = EventHandle::attach(&document, "visibilitychange", move |_| {
        let (Some(state), Some(document)) = (
            weak.upgrade(),
            web_sys::window().and_then(|w| w.document()),
        ) else {
            return;
        };
        if document.hidden() {
            state.pause();
        } else {
            state.resume();
        }
    })?;
    *inner.visibility.borrow_mut() = Some(visibility);

    inner.schedule()?;

    Ok(AnimationHandle { inner })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timing_initial() {
        let timing = FrameTiming::initial(1000.0);
        assert!((timing.timestamp - 1000.0).abs() < f64::EPSILON);
        assert!(timing.delta.abs() < f64::EPSILON);
        assert!((timing.fps - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frame_timing_next() {
        let next = FrameTiming::initial(1000.0).next(1016.67);
        assert!((next.delta - 16.67).abs() < 0.01);
        assert!((next.fps - 60.0).abs() < 1.0);
    }

    #[test]
    fn test_frame_timing_zero_delta_keeps_nominal_fps() {
        let next = FrameTiming::initial(500.0).next(500.0);
        assert!((next.fps - 60.0).abs() < f64::EPSILON);
    }
}
