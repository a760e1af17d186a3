//! Full-page section snapping controller.
//!
//! [`SectionScrollController`] decides, for every wheel, touch, resize or dot
//! input, whether to snap the viewport to another section, ignore the input,
//! or leave it to native scrolling inside an overflowing panel.
//!
//! The controller is a pure state machine. It never touches the DOM or the
//! clock: inputs carry a monotonic timestamp in milliseconds, and every call
//! returns a [`Reaction`] whose [`Command`]s the host executes (arm timers,
//! request animation frames, scroll elements into view). Timer and frame
//! callbacks come back in through `on_debounce_elapsed`, `on_frame`,
//! `on_step_elapsed` and `on_settle_elapsed`.
//!
//! # State machine
//!
//! ```text
//! Idle --(qualifying gesture | dot click)--> Transitioning --(settle elapsed)--> Idle
//! ```
//!
//! Boundary rejections and native-scroll hand-offs never leave `Idle`. On
//! desktop only the navigation routine mutates `current_index`; input
//! handlers just read it. In mobile mode the controller holds no lock and
//! the index follows the native scroll position.

use tracing::debug;

use crate::config::ScrollConfig;
use crate::gesture::{DeviceClass, Direction, ScrollAccumulator};
use crate::panel::{Handoff, PanelProbe};
use crate::section::{SectionId, SectionSequence};
use crate::viewport::ViewportMode;

/// Navigation lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A snap is in flight; every new navigation request is dropped.
    Transitioning,
}

/// Side effect requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// (Re)arm the wheel debounce timer, superseding any pending one.
    ArmDebounce { delay_ms: u32 },
    CancelDebounce,
    /// Call [`SectionScrollController::on_frame`] on the next animation frame.
    RequestFrame,
    CancelFrame,
    /// Smooth-scroll the section's element into view. Missing element: no-op.
    ScrollIntoView(SectionId),
    /// Call [`SectionScrollController::on_settle_elapsed`] after the delay.
    ReleaseAfter { delay_ms: u32 },
    /// Call [`SectionScrollController::on_step_elapsed`] after the delay.
    StepAfter { delay_ms: u32 },
    /// Cancel pending settle and step timers.
    CancelTimers,
    LockDocumentScroll(bool),
    AttachInputListeners,
    DetachInputListeners,
}

/// Outcome of one controller call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    /// The input was consumed; the host must `preventDefault` it.
    pub prevent_default: bool,
    pub commands: Vec<Command>,
}

impl Reaction {
    /// Leave the input to the browser.
    #[must_use]
    pub const fn native() -> Self {
        Self {
            prevent_default: false,
            commands: Vec::new(),
        }
    }

    const fn consumed() -> Self {
        Self {
            prevent_default: true,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn contains(&self, command: Command) -> bool {
        self.commands.contains(&command)
    }

    /// Section scrolled into view by this reaction, if any.
    #[must_use]
    pub fn scrolled_to(&self) -> Option<SectionId> {
        self.commands.iter().find_map(|command| match command {
            Command::ScrollIntoView(id) => Some(*id),
            _ => None,
        })
    }
}

/// One wheel event, delta already normalized to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub delta_y: f64,
    pub now: f64,
    /// The device reported whole lines or pages (a detented mouse wheel).
    pub notched: bool,
}

impl WheelInput {
    /// Pixel-mode event: trackpads, and most wheels in Chromium and Safari.
    #[must_use]
    pub const fn pixels(delta_y: f64, now: f64) -> Self {
        Self {
            delta_y,
            now,
            notched: false,
        }
    }

    /// Line- or page-mode event, already converted to pixels.
    #[must_use]
    pub const fn notched(delta_y: f64, now: f64) -> Self {
        Self {
            delta_y,
            now,
            notched: true,
        }
    }
}

/// Owns the current section index and adjudicates every navigation request.
#[derive(Debug, Clone)]
pub struct SectionScrollController {
    config: ScrollConfig,
    sections: SectionSequence,
    current_index: usize,
    phase: Phase,
    last_transition_at: Option<f64>,
    mode: ViewportMode,
    accumulator: ScrollAccumulator,
    touch_start_y: Option<f64>,
    /// Target committed on the next animation frame.
    pending_frame: Option<usize>,
    /// Final index of a multi-step dot traversal.
    traversal_target: Option<usize>,
    debounce_armed: bool,
    settle_armed: bool,
    step_armed: bool,
    listeners_attached: bool,
    document_locked: bool,
}

impl SectionScrollController {
    /// Controller at index 0, `Idle`, in mobile mode until [`mount`](Self::mount).
    #[must_use]
    pub fn new(config: ScrollConfig, sections: SectionSequence) -> Self {
        Self {
            config,
            sections,
            current_index: 0,
            phase: Phase::Idle,
            last_transition_at: None,
            mode: ViewportMode::Mobile,
            accumulator: ScrollAccumulator::new(),
            touch_start_y: None,
            pending_frame: None,
            traversal_target: None,
            debounce_armed: false,
            settle_armed: false,
            step_armed: false,
            listeners_attached: false,
            document_locked: false,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Set the initial viewport mode and apply its scroll lock and listeners.
    pub fn mount(&mut self, width: f64) -> Reaction {
        let mode = ViewportMode::from_width(width, self.config.mobile_breakpoint);
        let mut reaction = Reaction::native();
        self.apply_mode(mode, &mut reaction.commands);
        reaction
    }

    /// Recompute the viewport mode; only a mode change produces commands.
    pub fn on_resize(&mut self, width: f64) -> Reaction {
        let mode = ViewportMode::from_width(width, self.config.mobile_breakpoint);
        let mut reaction = Reaction::native();
        if mode != self.mode {
            debug!(from = %self.mode, to = %mode, width, "viewport mode changed");
            self.apply_mode(mode, &mut reaction.commands);
        }
        reaction
    }

    /// Cancel every pending callback, detach input listeners and unlock the
    /// document. The controller must not receive further input afterwards.
    pub fn teardown(&mut self) -> Reaction {
        let mut reaction = Reaction::native();
        let commands = &mut reaction.commands;
        if self.debounce_armed {
            commands.push(Command::CancelDebounce);
        }
        if self.pending_frame.is_some() {
            commands.push(Command::CancelFrame);
        }
        if self.settle_armed || self.step_armed {
            commands.push(Command::CancelTimers);
        }
        if self.listeners_attached {
            commands.push(Command::DetachInputListeners);
        }
        if self.document_locked {
            commands.push(Command::LockDocumentScroll(false));
        }

        self.debounce_armed = false;
        self.settle_armed = false;
        self.step_armed = false;
        self.listeners_attached = false;
        self.document_locked = false;
        self.pending_frame = None;
        self.traversal_target = None;
        self.touch_start_y = None;
        self.accumulator.reset();
        self.phase = Phase::Idle;
        reaction
    }

    fn apply_mode(&mut self, mode: ViewportMode, commands: &mut Vec<Command>) {
        self.mode = mode;
        if mode.is_desktop() {
            commands.push(Command::LockDocumentScroll(true));
            self.document_locked = true;
            if !self.listeners_attached {
                commands.push(Command::AttachInputListeners);
                self.listeners_attached = true;
            }
        } else {
            commands.push(Command::LockDocumentScroll(false));
            self.document_locked = false;
            if self.listeners_attached {
                commands.push(Command::DetachInputListeners);
                self.listeners_attached = false;
            }
            self.accumulator.reset();
            self.touch_start_y = None;
            self.cancel_debounce(commands);
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Handle one wheel event.
    pub fn on_wheel(&mut self, input: WheelInput, probe: &impl PanelProbe) -> Reaction {
        if !self.mode.is_desktop() {
            return Reaction::native();
        }

        let direction = Direction::from_delta(input.delta_y);
        if self.active_handoff(direction, probe) == Handoff::Native {
            return Reaction::native();
        }

        let mut reaction = Reaction::consumed();
        if self.phase == Phase::Transitioning {
            return reaction;
        }

        let magnitude = input.delta_y.abs();
        if direction == Direction::None || magnitude < self.config.noise_floor {
            return reaction;
        }

        let Some(target) = self.sections.offset(self.current_index, direction.step()) else {
            debug!(index = self.current_index, ?direction, "wheel past sequence edge");
            self.accumulator.reset();
            self.cancel_debounce(&mut reaction.commands);
            return reaction;
        };

        // One detent is one deliberate click, whatever its pixel size.
        let (class, magnitude) = if input.notched {
            let class = DeviceClass::classify(magnitude, &self.config).at_least_wheel();
            (class, magnitude.max(class.threshold(&self.config)))
        } else {
            (DeviceClass::classify(magnitude, &self.config), magnitude)
        };
        let total = self.accumulator.accumulate(
            direction,
            magnitude,
            class,
            input.now,
            self.config.accumulation_window_ms,
        );

        if total >= class.threshold(&self.config) {
            debug!(?class, total, target, "wheel threshold reached");
            self.begin_navigation(target, input.now, &mut reaction.commands);
        } else {
            self.debounce_armed = true;
            reaction.commands.push(Command::ArmDebounce {
                delay_ms: self.config.debounce_ms,
            });
        }
        reaction
    }

    /// Debounce timer fired: commit a quiet, partial gesture if it qualifies.
    ///
    /// A lone sub-threshold event never navigates. A stream of two or more
    /// events that reached `trailing_commit_ratio` of its threshold does.
    pub fn on_debounce_elapsed(&mut self, now: f64) -> Reaction {
        let mut reaction = Reaction::native();
        if !self.debounce_armed {
            return reaction;
        }
        self.debounce_armed = false;

        if self.phase == Phase::Transitioning || self.accumulator.is_empty() {
            self.accumulator.reset();
            return reaction;
        }

        let threshold = self
            .accumulator
            .class()
            .map_or(self.config.wheel_threshold, |class| {
                class.threshold(&self.config)
            });
        let qualifies = self.accumulator.events() >= 2
            && self.accumulator.magnitude() >= threshold * self.config.trailing_commit_ratio;
        if !qualifies {
            self.accumulator.reset();
            return reaction;
        }

        let direction = self.accumulator.direction();
        match self.sections.offset(self.current_index, direction.step()) {
            Some(target) => {
                debug!(?direction, target, "trailing wheel gesture committed");
                self.begin_navigation(target, now, &mut reaction.commands);
            }
            None => self.accumulator.reset(),
        }
        reaction
    }

    /// Record where a touch began.
    pub fn on_touch_start(&mut self, y: f64) {
        if self.mode.is_desktop() {
            self.touch_start_y = Some(y);
        }
    }

    /// Finish a touch: a swipe past the threshold navigates immediately.
    pub fn on_touch_end(&mut self, y: f64, now: f64, probe: &impl PanelProbe) -> Reaction {
        let Some(start_y) = self.touch_start_y.take() else {
            return Reaction::native();
        };
        if !self.mode.is_desktop() || self.active_is_overflow_scrollable(probe) {
            return Reaction::native();
        }

        let displacement = start_y - y;
        if displacement.abs() <= self.config.swipe_threshold {
            return Reaction::native();
        }
        self.navigate(Direction::from_delta(displacement), now)
    }

    /// Dot indicator (or nav link) clicked.
    ///
    /// Adjacent targets navigate directly; farther ones step through every
    /// section in between, holding the lock until the last step settles.
    ///
    /// In mobile mode the page scrolls natively, so the known index may be
    /// stale: the target is always scrolled to, with no lock or traversal.
    pub fn on_dot_activate(&mut self, index: usize, now: f64) -> Reaction {
        let mut reaction = Reaction::native();
        let Some(section) = self.sections.get(index) else {
            return reaction;
        };

        if !self.mode.is_desktop() {
            self.current_index = index;
            reaction.commands.push(Command::ScrollIntoView(section));
            return reaction;
        }

        if self.phase == Phase::Transitioning || index == self.current_index {
            return reaction;
        }

        if index.abs_diff(self.current_index) == 1 {
            return self.navigate_to(index, now);
        }

        debug!(from = self.current_index, to = index, "multi-step traversal");
        self.lock(now, &mut reaction.commands);
        self.traversal_target = Some(index);
        self.advance_step(&mut reaction.commands);
        reaction
    }

    /// The browser scrolled natively and `index` is now the section in view.
    ///
    /// Only meaningful in mobile mode; on desktop every index change goes
    /// through navigation and this is ignored.
    pub fn on_native_position(&mut self, index: usize) {
        if !self.mode.is_desktop() && self.sections.get(index).is_some() {
            self.current_index = index;
        }
    }

    /// Step timer fired during a multi-step traversal.
    pub fn on_step_elapsed(&mut self) -> Reaction {
        let mut reaction = Reaction::native();
        if self.step_armed {
            self.step_armed = false;
            self.advance_step(&mut reaction.commands);
        }
        reaction
    }

    // ------------------------------------------------------------------
    // Navigation execution
    // ------------------------------------------------------------------

    /// Navigate one section in `direction`.
    pub fn navigate(&mut self, direction: Direction, now: f64) -> Reaction {
        let mut reaction = Reaction::native();
        match self.sections.offset(self.current_index, direction.step()) {
            Some(target) if direction != Direction::None => {
                self.begin_navigation(target, now, &mut reaction.commands);
            }
            _ => self.accumulator.reset(),
        }
        reaction
    }

    /// Navigate straight to `index` in a single snap.
    pub fn navigate_to(&mut self, index: usize, now: f64) -> Reaction {
        let mut reaction = Reaction::native();
        self.begin_navigation(index, now, &mut reaction.commands);
        reaction
    }

    /// Animation frame: commit the pending index and scroll to it.
    pub fn on_frame(&mut self) -> Reaction {
        let mut reaction = Reaction::native();
        self.commit_pending_frame(&mut reaction.commands);
        reaction
    }

    /// Settle delay elapsed: release the transition lock.
    pub fn on_settle_elapsed(&mut self) -> Reaction {
        let mut reaction = Reaction::native();
        if !self.settle_armed {
            return reaction;
        }
        self.settle_armed = false;
        // The frame may not have run yet, e.g. in a background tab.
        if self.pending_frame.is_some() {
            reaction.commands.push(Command::CancelFrame);
            self.commit_pending_frame(&mut reaction.commands);
        }
        self.phase = Phase::Idle;
        reaction
    }

    fn begin_navigation(&mut self, target: usize, now: f64, commands: &mut Vec<Command>) -> bool {
        if self.sections.get(target).is_none() {
            self.accumulator.reset();
            return false;
        }
        if self.phase == Phase::Transitioning || target == self.current_index {
            return false;
        }

        let direction = if target < self.current_index {
            Direction::Up
        } else {
            Direction::Down
        };
        self.lock(now, commands);
        self.pending_frame = Some(target);
        commands.push(Command::RequestFrame);
        self.arm_settle(direction, commands);
        true
    }

    fn lock(&mut self, now: f64, commands: &mut Vec<Command>) {
        self.phase = Phase::Transitioning;
        self.last_transition_at = Some(now);
        self.accumulator.reset();
        self.cancel_debounce(commands);
    }

    fn advance_step(&mut self, commands: &mut Vec<Command>) {
        let Some(target) = self.traversal_target else {
            return;
        };
        let (next, direction) = if target > self.current_index {
            (self.current_index.saturating_add(1), Direction::Down)
        } else {
            (self.current_index.saturating_sub(1), Direction::Up)
        };
        let Some(section) = self.sections.get(next) else {
            self.traversal_target = None;
            self.arm_settle(direction, commands);
            return;
        };

        self.current_index = next;
        commands.push(Command::ScrollIntoView(section));
        if next == target {
            self.traversal_target = None;
            self.arm_settle(direction, commands);
        } else {
            self.step_armed = true;
            commands.push(Command::StepAfter {
                delay_ms: self.config.step_interval_ms,
            });
        }
    }

    fn commit_pending_frame(&mut self, commands: &mut Vec<Command>) {
        let Some(target) = self.pending_frame.take() else {
            return;
        };
        if let Some(section) = self.sections.get(target) {
            self.current_index = target;
            commands.push(Command::ScrollIntoView(section));
        }
    }

    fn arm_settle(&mut self, direction: Direction, commands: &mut Vec<Command>) {
        let delay_ms = match direction {
            Direction::Up => self
                .config
                .settle_ms
                .saturating_add(self.config.upward_settle_extra_ms),
            Direction::Down | Direction::None => self.config.settle_ms,
        };
        self.settle_armed = true;
        commands.push(Command::ReleaseAfter { delay_ms });
    }

    fn cancel_debounce(&mut self, commands: &mut Vec<Command>) {
        if self.debounce_armed {
            self.debounce_armed = false;
            commands.push(Command::CancelDebounce);
        }
    }

    fn active_handoff(&self, direction: Direction, probe: &impl PanelProbe) -> Handoff {
        self.current_section()
            .and_then(|section| probe.geometry(section))
            .map_or(Handoff::Navigate, |geometry| {
                geometry.handoff(direction, self.config.boundary_margin)
            })
    }

    fn active_is_overflow_scrollable(&self, probe: &impl PanelProbe) -> bool {
        self.current_section()
            .and_then(|section| probe.geometry(section))
            .is_some_and(|geometry| geometry.is_overflow_scrollable(self.config.boundary_margin))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_section(&self) -> Option<SectionId> {
        self.sections.get(self.current_index)
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    #[must_use]
    pub const fn mode(&self) -> ViewportMode {
        self.mode
    }

    #[must_use]
    pub const fn accumulator(&self) -> &ScrollAccumulator {
        &self.accumulator
    }

    #[must_use]
    pub const fn last_transition_at(&self) -> Option<f64> {
        self.last_transition_at
    }

    #[must_use]
    pub const fn sections(&self) -> &SectionSequence {
        &self.sections
    }

    #[must_use]
    pub const fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// True while any timer or frame callback is outstanding.
    #[must_use]
    pub const fn has_pending_callbacks(&self) -> bool {
        self.debounce_armed || self.settle_armed || self.step_armed || self.pending_frame.is_some()
    }
}

impl Default for SectionScrollController {
    fn default() -> Self {
        Self::new(ScrollConfig::default(), SectionSequence::default())
    }
}
