use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use proxlock_core::content;
use proxlock_core::plans::PlanDescriptor;
use proxlock_core::AppConfig;

use crate::nav::{PageGeometry, ScrollCoordinator};
use crate::reveal::RevealAnimator;
use crate::scroll::PageScroller;
use crate::theme::Theme;

/// Page currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Pricing,
}

/// Plan data as seen by the pricing view. Loading and failure are
/// display states, never errors: the fallback catalog fills the gaps.
#[derive(Debug, Clone)]
pub enum PlansState {
    /// No fetch started yet
    Idle,
    /// Fetch in flight; pricing cards render with the loading style
    Loading,
    Loaded(Vec<PlanDescriptor>),
    /// Fetch failed; masked by fallbacks
    Failed(String),
}

impl PlansState {
    pub fn plans(&self) -> Option<&[PlanDescriptor]> {
        match self {
            PlansState::Loaded(plans) => Some(plans),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PlansState::Loading)
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// Current page
    pub page: Page,
    /// Hero subtitle reveal animation
    pub reveal: RevealAnimator,
    /// Sticky-header visibility controller
    pub nav: ScrollCoordinator,
    /// Animated document offset for the home page
    pub scroller: PageScroller,
    /// Home document element bounds, recorded while building lines
    pub geometry: PageGeometry,
    /// Maximum scroll offset of the home document
    pub max_scroll: i32,
    /// Plan data for the pricing page
    pub plans: PlansState,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g. 'gg')
    pub pending_key: Option<char>,
    /// Terminal size
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, now: Instant) -> Self {
        let mut reveal = RevealAnimator::new(content::HERO_SUBTITLE, config.ui.reveal);
        reveal.start(now);

        Self {
            reveal,
            nav: ScrollCoordinator::new(config.ui.nav),
            scroller: PageScroller::new(config.ui.scroll),
            geometry: PageGeometry::default(),
            max_scroll: 0,
            plans: PlansState::Idle,
            page: Page::Home,
            should_quit: false,
            status_message: None,
            pending_key: None,
            viewport_width: 0,
            viewport_height: 0,
            theme,
            config,
        }
    }

    /// Advance animations one frame. Returns true when a redraw is
    /// needed beyond the regular draw cadence.
    pub fn update(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.page == Page::Home {
            changed |= self.reveal.tick(now);

            let offset = self.scroller.update(now, self.max_scroll);
            self.nav.on_scroll(offset, self.viewport_width, &self.geometry);
        }

        changed || self.scroller.is_animating()
    }

    /// Whether the event loop should poll at the animation frame rate
    pub fn needs_fast_tick(&self) -> bool {
        (self.page == Page::Home && self.reveal.is_animating()) || self.scroller.needs_update()
    }

    /// Switch to the home page. Re-entering counts as a fresh mount:
    /// the reveal runs again from scratch.
    pub fn goto_home(&mut self, now: Instant) {
        if self.page == Page::Home {
            return;
        }
        debug!("switching to home page");
        self.page = Page::Home;
        self.scroller.reset();
        self.reveal.restart();
        self.reveal.start(now);
    }

    /// Switch to the pricing page. The pricing layout always shows the
    /// compact header with the button.
    pub fn goto_pricing(&mut self) {
        debug!("switching to pricing page");
        self.page = Page::Pricing;
        self.nav.force_compact();
    }

    /// Whether the event loop should kick off a plan fetch on its own.
    /// Only an untouched state qualifies: a failed fetch stays on the
    /// fallback catalog and is retried manually, never by the loop.
    pub fn plans_need_fetch(&self) -> bool {
        matches!(self.plans, PlansState::Idle)
    }

    pub fn scroll_down(&mut self) {
        self.scroller
            .scroll_by(self.config.ui.scroll.scroll_lines as i32);
    }

    pub fn scroll_up(&mut self) {
        self.scroller
            .scroll_by(-(self.config.ui.scroll.scroll_lines as i32));
    }

    pub fn scroll_half_page_down(&mut self) {
        self.scroller
            .scroll_by((self.viewport_height / 2).max(1) as i32);
    }

    pub fn scroll_half_page_up(&mut self) {
        self.scroller
            .scroll_by(-((self.viewport_height / 2).max(1) as i32));
    }

    pub fn scroll_page_down(&mut self) {
        self.scroller.scroll_by(self.viewport_height as i32);
    }

    pub fn scroll_page_up(&mut self) {
        self.scroller.scroll_by(-(self.viewport_height as i32));
    }

    pub fn jump_to_top(&mut self) {
        self.scroller.jump_to(0, self.max_scroll);
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroller.jump_to(self.max_scroll, self.max_scroll);
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}
