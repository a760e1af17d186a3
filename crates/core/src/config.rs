//! Tunable constants for section scrolling.
//!
//! The device-class buckets and their thresholds came from trial and error
//! across mice, trackpads and touch screens. Adjust them freely; nothing else
//! depends on the exact numbers.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Scroll controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Viewport widths below this are `Mobile`, native scrolling only.
    pub mobile_breakpoint: f64,
    /// Per-event wheel magnitudes below this are ignored as noise.
    pub noise_floor: f64,
    /// Upper bound (exclusive) of the very fine bucket.
    pub very_fine_max: f64,
    /// Upper bound (exclusive) of the trackpad bucket.
    pub trackpad_max: f64,
    /// Upper bound (exclusive) of the wheel bucket; anything above is fast.
    pub wheel_max: f64,
    pub very_fine_threshold: f64,
    pub trackpad_threshold: f64,
    pub wheel_threshold: f64,
    pub fast_threshold: f64,
    /// Gap between wheel events that starts a new gesture.
    pub accumulation_window_ms: f64,
    /// Quiet period after which a partial gesture is re-evaluated.
    pub debounce_ms: u32,
    /// Fraction of the threshold a quiet multi-event gesture needs to commit.
    pub trailing_commit_ratio: f64,
    /// Lock hold time after a navigation.
    pub settle_ms: u32,
    /// Extra hold time for upward navigation, masks reflow on the way back.
    pub upward_settle_extra_ms: u32,
    /// Pause between steps of a multi-section dot traversal.
    pub step_interval_ms: u32,
    /// Minimum vertical swipe distance in pixels.
    pub swipe_threshold: f64,
    /// Distance from a panel edge that still counts as "at the edge".
    pub boundary_margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            noise_floor: 2.0,
            very_fine_max: 10.0,
            trackpad_max: 50.0,
            wheel_max: 200.0,
            very_fine_threshold: 30.0,
            trackpad_threshold: 60.0,
            wheel_threshold: 100.0,
            fast_threshold: 150.0,
            accumulation_window_ms: 200.0,
            debounce_ms: 150,
            trailing_commit_ratio: 0.5,
            settle_ms: 800,
            upward_settle_extra_ms: 150,
            step_interval_ms: 500,
            swipe_threshold: 50.0,
            boundary_margin: 2.0,
        }
    }
}

impl ScrollConfig {
    /// Parse a (possibly partial) TOML document and validate it.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigParseFailed` on malformed TOML and
    /// `Error::InvalidConfig` if the result fails [`ScrollConfig::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| Error::config_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and bucket ordering.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("mobile_breakpoint", self.mobile_breakpoint),
            ("very_fine_max", self.very_fine_max),
            ("trackpad_max", self.trackpad_max),
            ("wheel_max", self.wheel_max),
            ("very_fine_threshold", self.very_fine_threshold),
            ("trackpad_threshold", self.trackpad_threshold),
            ("wheel_threshold", self.wheel_threshold),
            ("fast_threshold", self.fast_threshold),
            ("accumulation_window_ms", self.accumulation_window_ms),
            ("swipe_threshold", self.swipe_threshold),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid_config(field, "must be a positive number"));
            }
        }

        let non_negative = [
            ("noise_floor", self.noise_floor),
            ("boundary_margin", self.boundary_margin),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_config(field, "must not be negative"));
            }
        }

        if !(self.very_fine_max < self.trackpad_max && self.trackpad_max < self.wheel_max) {
            return Err(Error::invalid_config(
                "trackpad_max",
                "bucket bounds must increase: very_fine_max < trackpad_max < wheel_max",
            ));
        }
        if self.noise_floor >= self.very_fine_max {
            return Err(Error::invalid_config(
                "noise_floor",
                "must be below very_fine_max",
            ));
        }
        if !self.trailing_commit_ratio.is_finite()
            || self.trailing_commit_ratio <= 0.0
            || self.trailing_commit_ratio > 1.0
        {
            return Err(Error::invalid_config(
                "trailing_commit_ratio",
                "must be in range (0.0, 1.0]",
            ));
        }
        if self.settle_ms == 0 {
            return Err(Error::invalid_config("settle_ms", "must be non-zero"));
        }
        Ok(())
    }
}
