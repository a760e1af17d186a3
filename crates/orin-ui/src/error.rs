//! Error types for browser-side failures
//!
//! Event callbacks have no caller to hand an error to, so most of these end
//! up logged through `UiError::log` and the page simply stays where it is.

use wasm_bindgen::JsValue;

/// Errors raised while talking to the DOM
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// No `window` (not running in a browser)
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// No `document` on the window
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// Element lookup by id came back empty
    #[error("element not found: #{0}")]
    ElementNotFound(String),

    /// `addEventListener` rejected the callback
    #[error("failed to add {event} listener: {reason}")]
    ListenerAttachFailed { event: &'static str, reason: String },

    /// `removeEventListener` rejected the callback
    #[error("failed to remove {event} listener: {reason}")]
    ListenerDetachFailed { event: &'static str, reason: String },

    /// `requestAnimationFrame` failed
    #[error("failed to request animation frame: {0}")]
    FrameRequestFailed(String),

    /// Could not obtain or use the 2D canvas context
    #[error("canvas error: {0}")]
    Canvas(String),

    /// Inline style update failed
    #[error("failed to set style {property}: {reason}")]
    StyleFailed { property: &'static str, reason: String },
}

impl UiError {
    pub(crate) fn attach(event: &'static str, err: &JsValue) -> Self {
        Self::ListenerAttachFailed {
            event,
            reason: format!("{err:?}"),
        }
    }

    pub(crate) fn detach(event: &'static str, err: &JsValue) -> Self {
        Self::ListenerDetachFailed {
            event,
            reason: format!("{err:?}"),
        }
    }

    /// Log at `error` level and drop.
    pub fn log(&self, context: &str) {
        tracing::error!("{context}: {self}");
    }
}

/// Result type alias for DOM operations
pub type Result<T> = std::result::Result<T, UiError>;
