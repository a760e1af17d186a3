//! Development-build performance sampling.
//!
//! Wraps `orin_core::perf::PerfMonitor` in a reactive-owner-scoped handle so
//! components and the scroll driver can share one monitor. In release builds
//! the monitor is disabled and every call is a no-op.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use orin_core::ResultExt;
use orin_core::perf::PerfMonitor;

/// Period between summaries printed to the console.
pub const SUMMARY_INTERVAL_MS: u32 = 30_000;

#[derive(Debug, Clone, Copy)]
pub struct DevPerf {
    monitor: StoredValue<PerfMonitor>,
}

impl DevPerf {
    #[must_use]
    pub fn new() -> Self {
        Self {
            monitor: StoredValue::new(PerfMonitor::new(cfg!(debug_assertions))),
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.monitor
            .try_with_value(PerfMonitor::is_enabled)
            .unwrap_or(false)
    }

    pub fn record_scroll_latency(self, latency_ms: f64) {
        self.monitor
            .try_update_value(|m| m.record_scroll_latency(latency_ms));
    }

    pub fn record_component_load(self, component: &'static str, load_ms: f64) {
        self.monitor
            .try_update_value(|m| m.record_component_load(component, load_ms));
    }

    pub fn record_render(self, render_ms: f64) {
        self.monitor.try_update_value(|m| m.record_render(render_ms));
    }

    /// Start the periodic summary. Returns `None` when disabled; the summary
    /// stops when the returned `Interval` is dropped.
    #[must_use]
    pub fn start_reporting(self) -> Option<Interval> {
        if !self.is_enabled() {
            return None;
        }
        Some(Interval::new(SUMMARY_INTERVAL_MS, move || {
            self.monitor
                .try_with_value(|m| m.log_summary().into_option_logged());
        }))
    }
}

impl Default for DevPerf {
    fn default() -> Self {
        Self::new()
    }
}

/// The `DevPerf` provided by `App`, or a fresh disabled-in-release one.
#[must_use]
pub fn use_dev_perf() -> DevPerf {
    use_context::<DevPerf>().unwrap_or_default()
}
