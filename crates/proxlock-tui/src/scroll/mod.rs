//! Smooth scrolling for the page document.
//!
//! Purely a visual nicety: settled offsets are identical to instant
//! scrolling, and the header controller always sees the interpolated
//! offset, so no observable signal depends on whether smoothing is
//! enabled.

pub mod animator;
pub mod motion;

pub use animator::PageScroller;
