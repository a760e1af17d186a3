//! Leptos 0.7 CSR frontend for the Orin landing page
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7, built with Trunk
//! - Scroll-snapping decisions live in `orin-core`; this crate wires them to
//!   the DOM
//!
//! ## Module Structure
//! - `app`: root component and the `SectionNav` context
//! - `components`: page panels, navigation and the animated background
//! - `scroll`: browser driver for the section scroll controller
//! - `dom`: panic-free wrappers over window, listeners, frames and resize
//! - `content`: static page copy
//! - `config`: embedded scroll tuning
//! - `perf`: development-build performance sampling
//! - `error`: error types for browser failures

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod perf;
pub mod scroll;

pub use app::App;

/// Route `tracing` output to the browser console.
///
/// Debug builds log at `DEBUG`, release builds at `INFO`.
pub fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
