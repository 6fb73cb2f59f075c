/// Vertical bounds of a page element in document coordinates
/// (top-inclusive, bottom-exclusive, measured from the document start).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementBounds {
    pub top: i32,
    pub bottom: i32,
}

impl ElementBounds {
    pub fn new(top: i32, bottom: i32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Bounds of the three elements the header controller watches,
/// recorded while the home document is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageGeometry {
    /// Hero title; governs the compact threshold on wide viewports
    pub title: ElementBounds,
    /// Hero subtitle; governs the compact threshold on narrow viewports
    pub subtitle: ElementBounds,
    /// Hero call-to-action button
    pub cta: ElementBounds,
}
