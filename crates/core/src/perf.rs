#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Development-only performance sampling.
//!
//! Keeps bounded windows of scroll-latency and render samples plus the last
//! load time per component, warns on slow samples, and produces a summary
//! for periodic logging. A disabled monitor drops every sample.

use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Error;
use crate::result::Result;

/// Scroll latency samples kept.
pub const SCROLL_WINDOW: usize = 50;
/// Render samples kept.
pub const RENDER_WINDOW: usize = 100;
/// Scroll latency above this is logged as a warning.
pub const SLOW_SCROLL_MS: f64 = 100.0;
/// Component load time above this is logged as a warning.
pub const SLOW_LOAD_MS: f64 = 200.0;

#[derive(Debug, Clone, Default)]
pub struct PerfMonitor {
    enabled: bool,
    scroll_latency: VecDeque<f64>,
    render_time: VecDeque<f64>,
    component_load: BTreeMap<String, f64>,
}

/// Sample counts per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleCounts {
    pub scroll: usize,
    pub render: usize,
    pub components: usize,
}

/// Snapshot of the collected samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfSummary {
    pub avg_scroll_latency_ms: f64,
    pub avg_render_time_ms: f64,
    pub component_load_ms: BTreeMap<String, f64>,
    pub total_measurements: SampleCounts,
}

impl PerfMonitor {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the time from input to scroll dispatch.
    pub fn record_scroll_latency(&mut self, latency_ms: f64) {
        if !self.enabled || !latency_ms.is_finite() {
            return;
        }
        push_bounded(&mut self.scroll_latency, latency_ms, SCROLL_WINDOW);
        if latency_ms > SLOW_SCROLL_MS {
            warn!("High scroll latency detected: {latency_ms:.2}ms");
        }
    }

    /// Record how long a component took from mount request to ready.
    pub fn record_component_load(&mut self, component: &str, load_ms: f64) {
        if !self.enabled || !load_ms.is_finite() {
            return;
        }
        self.component_load.insert(component.to_string(), load_ms);
        if load_ms > SLOW_LOAD_MS {
            warn!("Slow component load: {component} took {load_ms:.2}ms");
        }
    }

    pub fn record_render(&mut self, render_ms: f64) {
        if !self.enabled || !render_ms.is_finite() {
            return;
        }
        push_bounded(&mut self.render_time, render_ms, RENDER_WINDOW);
    }

    #[must_use]
    pub fn summary(&self) -> PerfSummary {
        PerfSummary {
            avg_scroll_latency_ms: average(&self.scroll_latency),
            avg_render_time_ms: average(&self.render_time),
            component_load_ms: self.component_load.clone(),
            total_measurements: SampleCounts {
                scroll: self.scroll_latency.len(),
                render: self.render_time.len(),
                components: self.component_load.len(),
            },
        }
    }

    /// Emit the summary at `info` level. No-op when disabled.
    ///
    /// # Errors
    ///
    /// Returns `Error::JsonSerializeFailed` if the component map cannot be
    /// serialized.
    pub fn log_summary(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let summary = self.summary();
        let components = serde_json::to_string(&summary.component_load_ms).map_err(|e| {
            Error::JsonSerializeFailed {
                reason: e.to_string(),
            }
        })?;
        info!(
            avg_scroll_latency_ms = summary.avg_scroll_latency_ms,
            avg_render_time_ms = summary.avg_render_time_ms,
            scroll_samples = summary.total_measurements.scroll,
            render_samples = summary.total_measurements.render,
            components = %components,
            "Performance Metrics"
        );
        Ok(())
    }
}

fn push_bounded(window: &mut VecDeque<f64>, sample: f64, capacity: usize) {
    window.push_back(sample);
    while window.len() > capacity {
        window.pop_front();
    }
}

#[allow(clippy::cast_precision_loss)] // Sample counts are tiny
fn average(samples: &VecDeque<f64>) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}
