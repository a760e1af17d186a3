//! Virtual-clock host for driving the scroll controller in tests.
//!
//! Executes `Command`s the way the browser driver does, but against a fake
//! clock: timers become due timestamps and animation frames fire 16ms later.

#![allow(dead_code)]

use std::collections::HashMap;

use orin_core::{
    Command, PanelGeometry, PanelProbe, Reaction, ScrollConfig, SectionId,
    SectionScrollController, SectionSequence, WheelInput,
};

pub const DESKTOP_WIDTH: f64 = 1440.0;
pub const MOBILE_WIDTH: f64 = 375.0;
pub const FRAME_MS: f64 = 16.0;

#[derive(Debug, Default)]
pub struct StubPanels {
    geometry: HashMap<SectionId, PanelGeometry>,
}

impl StubPanels {
    pub fn set(&mut self, section: SectionId, geometry: PanelGeometry) {
        self.geometry.insert(section, geometry);
    }
}

impl PanelProbe for StubPanels {
    fn geometry(&self, section: SectionId) -> Option<PanelGeometry> {
        Some(
            self.geometry
                .get(&section)
                .copied()
                .unwrap_or_else(|| PanelGeometry::fitted(900.0)),
        )
    }
}

#[derive(Debug)]
pub struct Harness {
    pub controller: SectionScrollController,
    pub panels: StubPanels,
    pub now: f64,
    pub visits: Vec<(f64, SectionId)>,
    pub listeners_attached: i32,
    pub document_locked: bool,
    pub prevented: usize,
    debounce_at: Option<f64>,
    settle_at: Option<f64>,
    step_at: Option<f64>,
    frame_at: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
enum Due {
    Frame,
    Debounce,
    Step,
    Settle,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(ScrollConfig::default())
    }

    pub fn with_config(config: ScrollConfig) -> Self {
        Self {
            controller: SectionScrollController::new(config, SectionSequence::default()),
            panels: StubPanels::default(),
            now: 0.0,
            visits: Vec::new(),
            listeners_attached: 0,
            document_locked: false,
            prevented: 0,
            debounce_at: None,
            settle_at: None,
            step_at: None,
            frame_at: None,
        }
    }

    pub fn desktop() -> Self {
        let mut harness = Self::new();
        harness.mount(DESKTOP_WIDTH);
        harness
    }

    pub fn mount(&mut self, width: f64) {
        let reaction = self.controller.mount(width);
        self.apply(&reaction);
    }

    pub fn resize(&mut self, width: f64) -> Reaction {
        let reaction = self.controller.on_resize(width);
        self.apply(&reaction);
        reaction
    }

    pub fn wheel(&mut self, delta_y: f64) -> Reaction {
        self.wheel_input(WheelInput::pixels(delta_y, self.now))
    }

    /// One detent of a line-mode wheel, already converted to pixels.
    pub fn notch(&mut self, delta_y: f64) -> Reaction {
        self.wheel_input(WheelInput::notched(delta_y, self.now))
    }

    fn wheel_input(&mut self, input: WheelInput) -> Reaction {
        let reaction = self.controller.on_wheel(input, &self.panels);
        self.apply(&reaction);
        reaction
    }

    /// The browser scrolled natively to section `index`.
    pub fn native_scroll_to(&mut self, index: usize) {
        self.controller.on_native_position(index);
    }

    pub fn swipe(&mut self, from_y: f64, to_y: f64) -> Reaction {
        self.controller.on_touch_start(from_y);
        let reaction = self.controller.on_touch_end(to_y, self.now, &self.panels);
        self.apply(&reaction);
        reaction
    }

    pub fn dot(&mut self, index: usize) -> Reaction {
        let reaction = self.controller.on_dot_activate(index, self.now);
        self.apply(&reaction);
        reaction
    }

    pub fn teardown(&mut self) -> Reaction {
        let reaction = self.controller.teardown();
        self.apply(&reaction);
        reaction
    }

    /// Advance the clock, firing every callback that falls due on the way.
    pub fn advance(&mut self, ms: f64) {
        let until = self.now + ms;
        while let Some((at, due)) = self.next_due(until) {
            self.now = at;
            let reaction = match due {
                Due::Frame => {
                    self.frame_at = None;
                    self.controller.on_frame()
                }
                Due::Debounce => {
                    self.debounce_at = None;
                    self.controller.on_debounce_elapsed(self.now)
                }
                Due::Step => {
                    self.step_at = None;
                    self.controller.on_step_elapsed()
                }
                Due::Settle => {
                    self.settle_at = None;
                    self.controller.on_settle_elapsed()
                }
            };
            self.apply(&reaction);
        }
        self.now = until;
    }

    /// Advance until the controller is idle with nothing scheduled.
    pub fn settle(&mut self) {
        self.advance(5_000.0);
    }

    pub fn index(&self) -> usize {
        self.controller.current_index()
    }

    pub fn has_scheduled(&self) -> bool {
        self.debounce_at.is_some()
            || self.settle_at.is_some()
            || self.step_at.is_some()
            || self.frame_at.is_some()
    }

    fn next_due(&self, until: f64) -> Option<(f64, Due)> {
        [
            (self.frame_at, Due::Frame),
            (self.debounce_at, Due::Debounce),
            (self.step_at, Due::Step),
            (self.settle_at, Due::Settle),
        ]
        .into_iter()
        .filter_map(|(at, due)| at.map(|at| (at, due)))
        .filter(|(at, _)| *at <= until)
        .min_by(|a, b| a.0.total_cmp(&b.0))
    }

    fn apply(&mut self, reaction: &Reaction) {
        if reaction.prevent_default {
            self.prevented += 1;
        }
        for command in &reaction.commands {
            match *command {
                Command::ArmDebounce { delay_ms } => {
                    self.debounce_at = Some(self.now + f64::from(delay_ms));
                }
                Command::CancelDebounce => self.debounce_at = None,
                Command::RequestFrame => self.frame_at = Some(self.now + FRAME_MS),
                Command::CancelFrame => self.frame_at = None,
                Command::ScrollIntoView(section) => self.visits.push((self.now, section)),
                Command::ReleaseAfter { delay_ms } => {
                    self.settle_at = Some(self.now + f64::from(delay_ms));
                }
                Command::StepAfter { delay_ms } => {
                    self.step_at = Some(self.now + f64::from(delay_ms));
                }
                Command::CancelTimers => {
                    self.settle_at = None;
                    self.step_at = None;
                }
                Command::LockDocumentScroll(locked) => self.document_locked = locked,
                Command::AttachInputListeners => self.listeners_attached += 1,
                Command::DetachInputListeners => self.listeners_attached -= 1,
            }
        }
    }
}
