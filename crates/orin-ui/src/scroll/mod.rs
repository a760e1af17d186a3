//! Browser driver for the section scroll controller
//!
//! `SectionScrollController` decides; `ScrollDriver` does. The driver feeds
//! DOM events and timer expiries into the controller and executes the
//! `Command`s it returns: it owns the wheel/touch/resize/scroll listeners,
//! the debounce/settle/step timeouts and the pending animation frame, and it
//! publishes the committed index to a Leptos signal for the navbar and dots.
//! In mobile mode the scroll listener reports the section in view so the
//! index follows native scrolling.
//!
//! Every callback holds a `Weak` reference to the driver, so once the driver
//! is torn down nothing it scheduled can reach the controller again.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod input;
pub mod probe;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use orin_core::{Command, Reaction, ScrollConfig, SectionScrollController, SectionSequence};
use tracing::debug;

use crate::dom::{self, EventHandle, FrameRequest, ResizeHandler};
use crate::error::Result;
use crate::perf::DevPerf;

pub use probe::DomPanelProbe;

/// Resize events are coalesced for this long before the mode is re-evaluated.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

#[derive(Default)]
struct Timers {
    debounce: Option<Timeout>,
    settle: Option<Timeout>,
    step: Option<Timeout>,
    frame: Option<FrameRequest>,
    frame_requested_at: Option<f64>,
}

impl Timers {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Wheel and touch listeners, only present in desktop mode.
struct InputListeners {
    _wheel: EventHandle,
    _touch_start: EventHandle,
    _touch_end: EventHandle,
}

struct DriverInner {
    controller: RefCell<SectionScrollController>,
    timers: RefCell<Timers>,
    input: RefCell<Option<InputListeners>>,
    resize: RefCell<Option<ResizeHandler>>,
    native_scroll: RefCell<Option<EventHandle>>,
    probe: DomPanelProbe,
    current: RwSignal<usize>,
    perf: DevPerf,
}

/// Handle to the running driver. Cloning shares the same driver.
#[derive(Clone)]
pub struct ScrollDriver {
    inner: Rc<DriverInner>,
}

impl ScrollDriver {
    /// Mount the controller against the live window.
    ///
    /// Attaches the resize and scroll listeners, evaluates the initial
    /// viewport mode and, on desktop, locks document scroll and attaches the
    /// input listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or either listener cannot be
    /// attached.
    pub fn start(config: ScrollConfig, current: RwSignal<usize>, perf: DevPerf) -> Result<Self> {
        let inner = Rc::new(DriverInner {
            controller: RefCell::new(SectionScrollController::new(
                config,
                SectionSequence::default(),
            )),
            timers: RefCell::new(Timers::default()),
            input: RefCell::new(None),
            resize: RefCell::new(None),
            native_scroll: RefCell::new(None),
            probe: DomPanelProbe,
            current,
            perf,
        });

        let weak = Rc::downgrade(&inner);
        let resize = dom::attach_resize_listener(RESIZE_DEBOUNCE_MS, move |width, _| {
            with_driver(&weak, |driver| {
                driver.dispatch(|controller| controller.on_resize(width));
            });
        })?;
        *inner.resize.borrow_mut() = Some(resize);

        let weak = Rc::downgrade(&inner);
        let window = dom::window()?;
        let native_scroll = EventHandle::attach(&window, "scroll", move |_| {
            with_driver(&weak, |driver| driver.track_native_position());
        })?;
        *inner.native_scroll.borrow_mut() = Some(native_scroll);

        let (width, _) = dom::window_size()?;
        inner.dispatch(|controller| controller.mount(width));
        inner.track_native_position();

        Ok(Self { inner })
    }

    /// Dot, navbar or footer activation of section `index`.
    pub fn activate(&self, index: usize) {
        let now = dom::now_ms();
        self.inner
            .dispatch(|controller| controller.on_dot_activate(index, now));
    }

    /// Remove every listener and cancel everything scheduled. Idempotent.
    pub fn teardown(&self) {
        self.inner.dispatch(SectionScrollController::teardown);
        self.inner.resize.borrow_mut().take();
        self.inner.native_scroll.borrow_mut().take();
        self.inner.input.borrow_mut().take();
        self.inner.timers.borrow_mut().clear();
    }
}

fn with_driver(weak: &Weak<DriverInner>, f: impl FnOnce(&Rc<DriverInner>)) {
    if let Some(driver) = weak.upgrade() {
        f(&driver);
    }
}

impl DriverInner {
    /// Run one controller transition and execute its reaction.
    ///
    /// The controller borrow ends before any command runs, so commands may
    /// schedule callbacks that re-enter `dispatch` later.
    fn dispatch(self: &Rc<Self>, step: impl FnOnce(&mut SectionScrollController) -> Reaction) {
        let reaction = step(&mut self.controller.borrow_mut());
        self.execute(&reaction);
    }

    fn execute(self: &Rc<Self>, reaction: &Reaction) {
        for command in &reaction.commands {
            self.run(*command);
        }
        self.publish_index();
    }

    fn track_native_position(&self) {
        if self.controller.borrow().mode().is_desktop() {
            return;
        }
        let index = probe::section_in_view(self.controller.borrow().sections());
        if let Some(index) = index {
            self.controller.borrow_mut().on_native_position(index);
            self.publish_index();
        }
    }

    fn publish_index(&self) {
        let index = self.controller.borrow().current_index();
        // The signal may already be disposed during unmount.
        if self.current.try_get_untracked().is_some_and(|shown| shown != index) {
            let _ = self.current.try_set(index);
        }
    }

    #[allow(clippy::too_many_lines)]
    fn run(self: &Rc<Self>, command: Command) {
        match command {
            Command::ArmDebounce { delay_ms } => {
                let weak = Rc::downgrade(self);
                let timeout = Timeout::new(delay_ms, move || {
                    with_driver(&weak, |driver| {
                        driver.timers.borrow_mut().debounce.take();
                        let now = dom::now_ms();
                        driver.dispatch(|controller| controller.on_debounce_elapsed(now));
                    });
                });
                self.timers.borrow_mut().debounce = Some(timeout);
            }
            Command::CancelDebounce => {
                self.timers.borrow_mut().debounce.take();
            }
            Command::RequestFrame => {
                let weak = Rc::downgrade(self);
                let request = FrameRequest::new(move |_| {
                    with_driver(&weak, |driver| {
                        let requested_at = {
                            let mut timers = driver.timers.borrow_mut();
                            timers.frame.take();
                            timers.frame_requested_at.take()
                        };
                        if let Some(at) = requested_at {
                            driver.perf.record_scroll_latency(dom::now_ms() - at);
                        }
                        driver.dispatch(SectionScrollController::on_frame);
                    });
                });
                match request {
                    Ok(request) => {
                        let mut timers = self.timers.borrow_mut();
                        timers.frame = Some(request);
                        timers.frame_requested_at = Some(dom::now_ms());
                    }
                    // The settle timer commits the target if no frame arrives.
                    Err(e) => e.log("scroll frame"),
                }
            }
            Command::CancelFrame => {
                let mut timers = self.timers.borrow_mut();
                timers.frame.take();
                timers.frame_requested_at.take();
            }
            Command::ScrollIntoView(section) => {
                debug!(section = %section, "scrolling into view");
                if let Err(e) = dom::scroll_into_view(section) {
                    e.log("scroll into view");
                }
            }
            Command::ReleaseAfter { delay_ms } => {
                let weak = Rc::downgrade(self);
                let timeout = Timeout::new(delay_ms, move || {
                    with_driver(&weak, |driver| {
                        driver.timers.borrow_mut().settle.take();
                        if let Some(at) = driver.controller.borrow().last_transition_at() {
                            debug!(held_ms = dom::now_ms() - at, "navigation lock released");
                        }
                        driver.dispatch(SectionScrollController::on_settle_elapsed);
                    });
                });
                self.timers.borrow_mut().settle = Some(timeout);
            }
            Command::StepAfter { delay_ms } => {
                let weak = Rc::downgrade(self);
                let timeout = Timeout::new(delay_ms, move || {
                    with_driver(&weak, |driver| {
                        driver.timers.borrow_mut().step.take();
                        driver.dispatch(SectionScrollController::on_step_elapsed);
                    });
                });
                self.timers.borrow_mut().step = Some(timeout);
            }
            Command::CancelTimers => {
                let mut timers = self.timers.borrow_mut();
                timers.settle.take();
                timers.step.take();
            }
            Command::LockDocumentScroll(locked) => {
                if let Err(e) = dom::lock_document_scroll(locked) {
                    e.log("document scroll lock");
                }
            }
            Command::AttachInputListeners => match self.attach_input() {
                Ok(listeners) => *self.input.borrow_mut() = Some(listeners),
                Err(e) => e.log("input listeners"),
            },
            Command::DetachInputListeners => {
                self.input.borrow_mut().take();
            }
        }
    }

    fn attach_input(self: &Rc<Self>) -> Result<InputListeners> {
        let window = dom::window()?;

        let weak = Rc::downgrade(self);
        let wheel = EventHandle::attach_non_passive(&window, "wheel", move |event| {
            with_driver(&weak, |driver| {
                let page_height = dom::window_size().map_or(0.0, |(_, h)| h);
                let Some(wheel) = input::wheel_input(&event, page_height, dom::now_ms()) else {
                    return;
                };
                let reaction = driver
                    .controller
                    .borrow_mut()
                    .on_wheel(wheel, &driver.probe);
                if reaction.prevent_default {
                    event.prevent_default();
                }
                driver.execute(&reaction);
            });
        })?;

        let weak = Rc::downgrade(self);
        let touch_start = EventHandle::attach(&window, "touchstart", move |event| {
            with_driver(&weak, |driver| {
                if let Some(y) = input::touch_start_y(&event) {
                    driver.controller.borrow_mut().on_touch_start(y);
                }
            });
        })?;

        let weak = Rc::downgrade(self);
        let touch_end = EventHandle::attach(&window, "touchend", move |event| {
            with_driver(&weak, |driver| {
                let Some(y) = input::touch_end_y(&event) else {
                    return;
                };
                let now = dom::now_ms();
                driver.dispatch(|controller| controller.on_touch_end(y, now, &driver.probe));
            });
        })?;

        Ok(InputListeners {
            _wheel: wheel,
            _touch_start: touch_start,
            _touch_end: touch_end,
        })
    }
}
