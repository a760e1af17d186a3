//! Owned DOM event listeners
//!
//! An `EventHandle` keeps its closure alive and removes the listener when it
//! is dropped, so listener lifetimes follow ordinary Rust ownership.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::{Result, UiError};

pub struct EventHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventHandle {
    /// Attach a passive listener.
    ///
    /// # Errors
    ///
    /// Returns `UiError::ListenerAttachFailed` if the browser rejects it.
    pub fn attach<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::attach_with(target, event, true, callback)
    }

    /// Attach a listener that may call `preventDefault`.
    ///
    /// Wheel and touch listeners are passive by default in modern browsers,
    /// and `preventDefault` is ignored on passive listeners.
    ///
    /// # Errors
    ///
    /// Returns `UiError::ListenerAttachFailed` if the browser rejects it.
    pub fn attach_non_passive<F>(
        target: &EventTarget,
        event: &'static str,
        callback: F,
    ) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::attach_with(target, event, false, callback)
    }

    fn attach_with<F>(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        callback: F,
    ) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| UiError::attach(event, &e))?;

        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    #[must_use]
    pub const fn event(&self) -> &'static str {
        self.event
    }

    fn detach(&self) -> Result<()> {
        self.target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .map_err(|e| UiError::detach(self.event, &e))
    }
}

impl Drop for EventHandle {
    fn drop(&mut self) {
        if let Err(e) = self.detach() {
            e.log("listener cleanup");
        }
    }
}

impl std::fmt::Debug for EventHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandle")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
