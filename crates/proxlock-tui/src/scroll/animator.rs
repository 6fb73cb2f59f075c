use std::time::{Duration, Instant};

use proxlock_core::ScrollConfig;

use super::motion::{ease_out_cubic, lerp_i32, progress};

/// In-flight glide toward a target offset
#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: i32,
    to: i32,
    duration: Duration,
}

/// Animated vertical offset for the page document.
///
/// Deltas arriving within one frame are batched and applied against the
/// animation's target, so rapid wheel events chain smoothly. Call
/// `update` every frame with the current time and the document's
/// maximum offset.
#[derive(Debug, Clone)]
pub struct PageScroller {
    glide: Option<Glide>,
    config: ScrollConfig,
    offset: i32,
    pending_delta: i32,
}

impl PageScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            glide: None,
            config,
            offset: 0,
            pending_delta: 0,
        }
    }

    /// Current interpolated offset
    #[inline]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Final offset once the animation settles
    pub fn target(&self) -> i32 {
        self.glide.as_ref().map(|g| g.to).unwrap_or(self.offset)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    /// Whether the next frame still needs a high tick rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.glide.is_some() || self.pending_delta != 0
    }

    /// Queue a scroll by `delta` lines (positive = down)
    pub fn scroll_by(&mut self, delta: i32) {
        self.pending_delta += delta;
    }

    /// Jump immediately, cancelling any animation
    pub fn jump_to(&mut self, target: i32, max_scroll: i32) {
        self.glide = None;
        self.pending_delta = 0;
        self.offset = target.clamp(0, max_scroll);
    }

    /// Advance the animation and return the current offset
    pub fn update(&mut self, now: Instant, max_scroll: i32) -> i32 {
        if self.pending_delta != 0 {
            let target = (self.target() + self.pending_delta).clamp(0, max_scroll);
            self.pending_delta = 0;

            if !self.config.is_smooth() {
                self.offset = target;
                self.glide = None;
            } else if target != self.offset {
                self.glide = Some(Glide {
                    start: now,
                    from: self.offset,
                    to: target,
                    duration: self.config.animation_duration(),
                });
            }
        }

        if let Some(ref glide) = self.glide {
            let t = progress(glide.start, now, glide.duration);
            if t >= 1.0 {
                self.offset = glide.to.min(max_scroll);
                self.glide = None;
            } else {
                self.offset = lerp_i32(glide.from, glide.to, ease_out_cubic(t)).min(max_scroll);
            }
        }

        self.offset
    }

    /// Drop any in-flight animation and return to the top
    pub fn reset(&mut self) {
        self.glide = None;
        self.offset = 0;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            scroll_lines: 3,
        }
    }

    fn instant() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: false,
            animation_duration_ms: 0,
            scroll_lines: 3,
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let now = Instant::now();
        let mut scroller = PageScroller::new(instant());
        scroller.scroll_by(10);
        assert_eq!(scroller.update(now, 100), 10);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_deltas_batch_within_a_frame() {
        let now = Instant::now();
        let mut scroller = PageScroller::new(smooth());
        scroller.scroll_by(5);
        scroller.scroll_by(5);
        scroller.scroll_by(5);
        scroller.update(now, 100);
        assert_eq!(scroller.target(), 15);
    }

    #[test]
    fn test_settles_at_target() {
        let now = Instant::now();
        let mut scroller = PageScroller::new(smooth());
        scroller.scroll_by(40);
        scroller.update(now, 100);
        assert!(scroller.is_animating());

        let settled = scroller.update(now + Duration::from_millis(150), 100);
        assert_eq!(settled, 40);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_clamps_to_document() {
        let now = Instant::now();
        let mut scroller = PageScroller::new(instant());
        scroller.scroll_by(500);
        assert_eq!(scroller.update(now, 100), 100);
        scroller.scroll_by(-500);
        assert_eq!(scroller.update(now, 100), 0);
    }

    #[test]
    fn test_jump_cancels_animation() {
        let now = Instant::now();
        let mut scroller = PageScroller::new(smooth());
        scroller.scroll_by(40);
        scroller.update(now, 100);
        scroller.jump_to(0, 100);
        assert_eq!(scroller.offset(), 0);
        assert!(!scroller.needs_update());
    }
}
