//! Core logic for the Orin landing page.
//!
//! Everything here is plain Rust with no browser dependencies, so it runs
//! under `cargo test` on the host:
//!
//! - `controller`: the section scroll-snapping state machine
//! - `section`, `panel`, `viewport`, `gesture`: the data it reasons over
//! - `config`: tunable scroll constants, loadable from TOML
//! - `newsletter`: signup form state
//! - `perf`: development-only performance sampling
//! - `error` / `result`: error types and Railway-Oriented helpers

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod newsletter;
pub mod panel;
pub mod perf;
pub mod result;
pub mod section;
pub mod viewport;

pub use config::ScrollConfig;
pub use controller::{Command, Phase, Reaction, SectionScrollController, WheelInput};
pub use error::Error;
pub use gesture::{DeviceClass, Direction, ScrollAccumulator};
pub use panel::{Boundary, FittedPanels, Handoff, PanelGeometry, PanelProbe};
pub use result::{Result, ResultExt};
pub use section::{SectionId, SectionSequence};
pub use viewport::ViewportMode;
