//! Reads live panel geometry from the DOM.

use orin_core::{PanelGeometry, PanelProbe, SectionId, SectionSequence};

use crate::dom;

/// `PanelProbe` backed by `document.getElementById`.
///
/// A panel that is not in the document yet (still loading) reports `None`.
/// The controller then has no overflow to defer to and navigates as if the
/// panel fit the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomPanelProbe;

impl PanelProbe for DomPanelProbe {
    fn geometry(&self, section: SectionId) -> Option<PanelGeometry> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(section.as_str())?;
        Some(PanelGeometry::new(
            f64::from(element.scroll_top()),
            f64::from(element.scroll_height()),
            f64::from(element.client_height()),
        ))
    }
}

/// Index of the last section whose top edge is at or above `line`.
///
/// `tops` holds each section's top in client pixels, `None` for sections not
/// in the document.
#[must_use]
pub fn index_at_line(tops: impl IntoIterator<Item = Option<f64>>, line: f64) -> Option<usize> {
    tops.into_iter()
        .enumerate()
        .filter(|(_, top)| top.is_some_and(|top| top <= line))
        .map(|(index, _)| index)
        .last()
}

/// Section covering the middle of the viewport after a native scroll.
#[must_use]
pub fn section_in_view(sections: &SectionSequence) -> Option<usize> {
    let (_, height) = dom::window_size().ok()?;
    let document = dom::document().ok()?;
    let tops = sections.iter().map(|section| {
        document
            .get_element_by_id(section.as_str())
            .map(|element| element.get_bounding_client_rect().top())
    });
    index_at_line(tops, height / 2.0)
}
