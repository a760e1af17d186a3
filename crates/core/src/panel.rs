//! Panel geometry as seen by the scroll controller.
//!
//! The controller never reads the DOM itself. The host hands it a
//! [`PanelProbe`] that reports each panel's scroll metrics, or `None` while a
//! panel is not mounted yet.

use crate::gesture::Direction;
use crate::section::SectionId;

/// Scroll metrics of a single panel element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    /// Current internal scroll offset (`scrollTop`).
    pub scroll_top: f64,
    /// Total content height (`scrollHeight`).
    pub scroll_height: f64,
    /// Visible height (`clientHeight`).
    pub client_height: f64,
}

/// Where a panel's internal scroll position sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// At (or within the margin of) the top edge.
    Top,
    /// At (or within the margin of) the bottom edge.
    Bottom,
    /// Strictly between the edges.
    Interior,
    /// Within the margin of both edges: the overflow is barely larger than
    /// the margin itself.
    Both,
}

/// What the controller should do with a gesture inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// Let the browser scroll the panel natively.
    Native,
    /// The panel has nothing left to scroll this way; navigate sections.
    Navigate,
}

impl PanelGeometry {
    #[must_use]
    pub const fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Panel that fits its viewport exactly.
    #[must_use]
    pub const fn fitted(height: f64) -> Self {
        Self::new(0.0, height, height)
    }

    /// True when content exceeds the visible height by more than `margin`.
    #[must_use]
    pub fn is_overflow_scrollable(&self, margin: f64) -> bool {
        self.scroll_height - self.client_height > margin
    }

    /// Classify the scroll offset against the edges of the scrollable range.
    #[must_use]
    pub fn boundary(&self, margin: f64) -> Boundary {
        let max_offset = (self.scroll_height - self.client_height).max(0.0);
        let at_top = self.scroll_top <= margin;
        let at_bottom = self.scroll_top >= max_offset - margin;
        match (at_top, at_bottom) {
            (true, true) => Boundary::Both,
            (true, false) => Boundary::Top,
            (false, true) => Boundary::Bottom,
            (false, false) => Boundary::Interior,
        }
    }

    /// Decide whether a gesture heading `direction` belongs to the panel or
    /// to section navigation.
    ///
    /// Non-overflowing panels always navigate. Overflowing panels hand off
    /// only when the gesture points past the edge they are resting on.
    #[must_use]
    pub fn handoff(&self, direction: Direction, margin: f64) -> Handoff {
        if !self.is_overflow_scrollable(margin) {
            return Handoff::Navigate;
        }
        match (self.boundary(margin), direction) {
            (Boundary::Top, Direction::Up)
            | (Boundary::Bottom, Direction::Down)
            | (Boundary::Both, Direction::Up | Direction::Down) => Handoff::Navigate,
            _ => Handoff::Native,
        }
    }
}

/// Source of panel geometry, implemented by the DOM layer and by test fakes.
pub trait PanelProbe {
    /// Geometry of the panel for `section`, or `None` if it is not mounted.
    fn geometry(&self, section: SectionId) -> Option<PanelGeometry>;
}

/// Probe that reports every panel as fitting the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct FittedPanels;

impl PanelProbe for FittedPanels {
    fn geometry(&self, _section: SectionId) -> Option<PanelGeometry> {
        Some(PanelGeometry::fitted(800.0))
    }
}
