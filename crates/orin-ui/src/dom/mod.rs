//! Thin, panic-free wrappers over the browser APIs the page uses.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod frame;
pub mod listeners;
pub mod resize;

use orin_core::SectionId;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::error::{Result, UiError};

pub use frame::{AnimationHandle, FrameRequest, FrameTiming, start_animation_loop};
pub use listeners::EventHandle;
pub use resize::{ResizeHandler, attach_resize_listener, window_size};

/// Get window object
///
/// # Errors
///
/// Returns `UiError::WindowNotAvailable` outside a browser.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowNotAvailable)
}

/// Get document from the window
///
/// # Errors
///
/// Returns an error if either the window or its document is missing.
pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::DocumentNotAvailable)
}

/// Look up an element by id
///
/// # Errors
///
/// Returns `UiError::ElementNotFound` if no element carries `id`.
pub fn element_by_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::ElementNotFound(id.to_string()))
}

/// High-resolution timestamp in milliseconds.
///
/// Uses `performance.now()` and falls back to `Date.now()` when the
/// Performance API is missing, so the value is always usable as a clock.
#[must_use]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// Smooth-scroll a section's top edge into view.
///
/// # Errors
///
/// Returns an error if the section element is not in the document.
pub fn scroll_into_view(section: SectionId) -> Result<()> {
    let element = element_by_id(section.as_str())?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Toggle `overflow: hidden` on both `<html>` and `<body>`.
///
/// # Errors
///
/// Returns an error if the document or its root elements are unavailable,
/// or if the style update is rejected.
pub fn lock_document_scroll(locked: bool) -> Result<()> {
    let document = document()?;
    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(UiError::DocumentNotAvailable)?;
    let body = document.body().ok_or(UiError::DocumentNotAvailable)?;

    [root, body].iter().try_for_each(|el| set_overflow(el, locked))
}

fn set_overflow(element: &HtmlElement, hidden: bool) -> Result<()> {
    let style = element.style();
    let outcome = if hidden {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    outcome.map_err(|e| UiError::StyleFailed {
        property: "overflow",
        reason: format!("{e:?}"),
    })
}

/// Current calendar year, for the footer.
#[must_use]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
