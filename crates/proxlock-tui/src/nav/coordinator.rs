use proxlock_core::NavConfig;

use super::geometry::PageGeometry;

/// Derives the header's two visibility booleans from scroll position
/// and element geometry. Recomputed on every scroll event from live
/// measurements; nothing is cached across events, so a resize between
/// two events is picked up by the next one.
#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    config: NavConfig,
    header_compact: bool,
    action_button_visible: bool,
}

impl ScrollCoordinator {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            header_compact: false,
            action_button_visible: false,
        }
    }

    /// Recompute both signals from a scroll event.
    ///
    /// Narrow viewports (width at or below the breakpoint) compare the
    /// offset against the subtitle's bottom edge; wide viewports use
    /// the title's bottom edge minus the configured offset. The button
    /// becomes visible once the CTA's bottom edge passes the viewport
    /// top.
    pub fn on_scroll(&mut self, scroll_offset: i32, viewport_width: u16, geometry: &PageGeometry) {
        let narrow = viewport_width <= self.config.mobile_breakpoint;
        let reference = if narrow {
            geometry.subtitle
        } else {
            geometry.title
        };
        let offset = if narrow { 0 } else { self.config.compact_offset };

        self.header_compact = scroll_offset > reference.bottom - offset;

        // CTA bottom in viewport coordinates
        self.action_button_visible = geometry.cta.bottom - scroll_offset < 0;
    }

    /// Force both signals on; the pricing page always renders the
    /// compact header with the button shown.
    pub fn force_compact(&mut self) {
        self.header_compact = true;
        self.action_button_visible = true;
    }

    #[inline]
    pub fn is_header_compact(&self) -> bool {
        self.header_compact
    }

    #[inline]
    pub fn is_action_button_visible(&self) -> bool {
        self.action_button_visible
    }
}
