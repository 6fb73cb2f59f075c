//! Decrypt-style text reveal animation for the hero subtitle.
//!
//! The animation reveals the target string one character per tick,
//! rendering the unrevealed suffix as random alphanumeric substitutes
//! that are resampled every frame. Timing follows two knobs: `delay`
//! (initial wait) and `speed` (minimum spacing between reveal ticks);
//! the event loop's frame interval is the real floor on cadence.
//!
//! ```ignore
//! use proxlock_tui::reveal::RevealAnimator;
//! use proxlock_core::RevealConfig;
//!
//! let mut reveal = RevealAnimator::new("Secure API Proxy Management", RevealConfig::new(50, 500));
//! let now = std::time::Instant::now();
//! reveal.start(now);
//!
//! // In the main loop, tick each frame and render the segments
//! if reveal.tick(std::time::Instant::now()) {
//!     // redraw
//! }
//! ```

pub mod animator;
pub mod charset;

pub use animator::{RevealAnimator, RevealChar, RevealPhase, RevealSegment};
