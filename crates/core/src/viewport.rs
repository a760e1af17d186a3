//! Viewport mode derived from width.

use std::fmt;

/// Layout mode of the page.
///
/// Section snapping only runs on `Desktop`; `Mobile` scrolls natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    /// Mode for a viewport `width` against `breakpoint` (widths below are mobile).
    ///
    /// Non-finite widths fall back to `Mobile` so a broken measurement never
    /// locks document scrolling.
    #[must_use]
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width.is_finite() && width >= breakpoint {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    #[must_use]
    pub const fn is_desktop(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

impl fmt::Display for ViewportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => write!(f, "mobile"),
            Self::Desktop => write!(f, "desktop"),
        }
    }
}
