//! Animated background canvas
//!
//! A fixed full-viewport canvas with a few large radial-gradient orbs drifting
//! on slow elliptical paths. Drawing runs on a requestAnimationFrame loop
//! that pauses while the tab is hidden; the backing store follows the window
//! size (debounced) and device pixel ratio.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::f64::consts::TAU;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::dom::{self, AnimationHandle, ResizeHandler};
use crate::error::{Result, UiError};
use crate::perf::{DevPerf, use_dev_perf};

/// Debounce for backing-store resizes.
pub const RESIZE_DEBOUNCE_MS: u32 = 200;

/// One drifting orb. Positions and sizes are fractions of the canvas.
#[derive(Debug, Clone, Copy)]
pub struct Orb {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub period_ms: f64,
    pub phase: f64,
    pub color: &'static str,
}

pub const ORBS: [Orb; 3] = [
    Orb {
        x: 0.2,
        y: 0.3,
        radius: 0.35,
        drift_x: 0.08,
        drift_y: 0.06,
        period_ms: 24_000.0,
        phase: 0.0,
        color: "rgba(99, 102, 241, 0.35)",
    },
    Orb {
        x: 0.8,
        y: 0.2,
        radius: 0.3,
        drift_x: 0.06,
        drift_y: 0.1,
        period_ms: 31_000.0,
        phase: 2.1,
        color: "rgba(168, 85, 247, 0.3)",
    },
    Orb {
        x: 0.55,
        y: 0.8,
        radius: 0.4,
        drift_x: 0.1,
        drift_y: 0.05,
        period_ms: 37_000.0,
        phase: 4.2,
        color: "rgba(14, 165, 233, 0.25)",
    },
];

const TRANSPARENT: &str = "rgba(10, 10, 20, 0)";

/// Center and radius of `orb` at time `t_ms` on a `width` x `height` canvas.
#[must_use]
pub fn orb_position(orb: &Orb, t_ms: f64, width: f64, height: f64) -> (f64, f64, f64) {
    let angle = (t_ms / orb.period_ms).mul_add(TAU, orb.phase);
    let x = orb.drift_x.mul_add(angle.cos(), orb.x) * width;
    let y = orb.drift_y.mul_add(angle.sin(), orb.y) * height;
    (x, y, orb.radius * width.max(height))
}

fn draw_orbs(ctx: &CanvasRenderingContext2d, width: f64, height: f64, t_ms: f64) -> Result<()> {
    ctx.clear_rect(0.0, 0.0, width, height);
    for orb in &ORBS {
        let (x, y, radius) = orb_position(orb, t_ms, width, height);
        let gradient = ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius)
            .map_err(|e| UiError::Canvas(format!("{e:?}")))?;
        gradient
            .add_color_stop(0.0, orb.color)
            .and_then(|()| gradient.add_color_stop(1.0, TRANSPARENT))
            .map_err(|e| UiError::Canvas(format!("{e:?}")))?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, width, height);
    }
    Ok(())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| UiError::Canvas(format!("failed to get canvas context: {e:?}")))?
        .ok_or_else(|| UiError::Canvas("canvas context creation returned None".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| UiError::Canvas("context is not a CanvasRenderingContext2d".to_string()))
}

fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<()> {
    let (width, height) = dom::window_size()?;
    let ratio = dom::window()?.device_pixel_ratio();
    let (w, h) = dom::resize::calculate_canvas_size(width, height, ratio)?;
    canvas.set_width(w);
    canvas.set_height(h);
    Ok(())
}

fn start(canvas: HtmlCanvasElement, perf: DevPerf) -> Result<(AnimationHandle, ResizeHandler)> {
    fit_to_window(&canvas)?;
    let ctx = context_2d(&canvas)?;

    let resized = canvas.clone();
    let resize = dom::attach_resize_listener(RESIZE_DEBOUNCE_MS, move |_, _| {
        if let Err(e) = fit_to_window(&resized) {
            e.log("background resize");
        }
    })?;

    let animation = dom::start_animation_loop(move |timing| {
        let started = dom::now_ms();
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        if let Err(e) = draw_orbs(&ctx, width, height, timing.timestamp) {
            e.log("background frame");
        }
        perf.record_render(dom::now_ms() - started);
    })?;

    Ok((animation, resize))
}

#[component]
pub fn Background() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let perf = use_dev_perf();
    let running = StoredValue::new_local(None::<(AnimationHandle, ResizeHandler)>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if running.try_with_value(Option::is_some).unwrap_or(true) {
            return;
        }
        match start(canvas, perf) {
            Ok(handles) => running.set_value(Some(handles)),
            // Decorative only; the page works without it.
            Err(e) => e.log("background"),
        }
    });

    on_cleanup(move || {
        running.try_update_value(Option::take);
    });

    view! { <canvas class="background-canvas" node_ref=canvas_ref aria-hidden="true"></canvas> }
}
