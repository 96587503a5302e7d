//! Scroll-based navigation highlighting

/// Page offset and height of a `<section>`
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: Some(id.into()),
            top,
            height,
        }
    }

    /// A section counts as reached a third of its height before its top
    pub fn reached(&self, scroll_y: f64) -> bool {
        scroll_y >= self.top - self.height / 3.0
    }
}

/// Id of the last section (in document order) the scroll position has
/// reached. `None` above the first section or when that section has no id.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.reached(scroll_y))
        .and_then(|s| s.id.as_deref())
        .filter(|id| !id.is_empty())
}

/// Whether a nav link points at the current section
pub fn link_matches(href: &str, current: Option<&str>) -> bool {
    current.is_some_and(|id| href.contains(id))
}
