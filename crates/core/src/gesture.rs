//! Wheel gesture classification and accumulation.

use crate::config::ScrollConfig;

/// Vertical direction of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Toward the previous section.
    Up,
    /// Toward the next section.
    Down,
    #[default]
    None,
}

impl Direction {
    /// Direction of a wheel delta or swipe displacement (positive = down).
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Down
        } else if delta < 0.0 {
            Self::Up
        } else {
            Self::None
        }
    }

    /// Signed section step.
    #[must_use]
    pub const fn step(self) -> i8 {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::None => 0,
        }
    }
}

/// Pointing device inferred from per-event magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    VeryFine,
    Trackpad,
    Wheel,
    Fast,
}

impl DeviceClass {
    /// Bucket a raw per-event magnitude.
    #[must_use]
    pub fn classify(magnitude: f64, config: &ScrollConfig) -> Self {
        if magnitude < config.very_fine_max {
            Self::VeryFine
        } else if magnitude < config.trackpad_max {
            Self::Trackpad
        } else if magnitude < config.wheel_max {
            Self::Wheel
        } else {
            Self::Fast
        }
    }

    /// Promote the fine-grained buckets to `Wheel`; `Wheel` and `Fast` stay.
    #[must_use]
    pub const fn at_least_wheel(self) -> Self {
        match self {
            Self::VeryFine | Self::Trackpad => Self::Wheel,
            Self::Wheel | Self::Fast => self,
        }
    }

    /// Accumulated magnitude this class needs before navigating.
    #[must_use]
    pub const fn threshold(self, config: &ScrollConfig) -> f64 {
        match self {
            Self::VeryFine => config.very_fine_threshold,
            Self::Trackpad => config.trackpad_threshold,
            Self::Wheel => config.wheel_threshold,
            Self::Fast => config.fast_threshold,
        }
    }
}

/// Running total of one wheel gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollAccumulator {
    direction: Direction,
    magnitude: f64,
    last_event_at: Option<f64>,
    events: u32,
    class: Option<DeviceClass>,
}

impl ScrollAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the gesture entirely.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add one event, starting a fresh gesture on a direction change or when
    /// the gap since the previous event exceeds `window_ms`.
    ///
    /// Returns the accumulated magnitude after adding.
    pub fn accumulate(
        &mut self,
        direction: Direction,
        magnitude: f64,
        class: DeviceClass,
        now: f64,
        window_ms: f64,
    ) -> f64 {
        let stale = self
            .last_event_at
            .is_some_and(|last| now - last > window_ms);
        if direction != self.direction || stale {
            self.reset();
        }
        self.direction = direction;
        self.magnitude += magnitude.abs();
        self.last_event_at = Some(now);
        self.events = self.events.saturating_add(1);
        self.class = Some(class);
        self.magnitude
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[must_use]
    pub const fn events(&self) -> u32 {
        self.events
    }

    /// Device class of the most recent event.
    #[must_use]
    pub const fn class(&self) -> Option<DeviceClass> {
        self.class
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events == 0
    }
}
