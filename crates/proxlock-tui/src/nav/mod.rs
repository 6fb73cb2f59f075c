//! Scroll-driven visibility signals for the sticky header.
//!
//! The coordinator derives two booleans from the scroll offset and the
//! document-space bounds of three reference elements: whether the
//! header renders in its compact sticky mode, and whether the header's
//! "Get Started" button is shown (only once the hero's own button has
//! scrolled off the top). The header widget reads the booleans off the
//! coordinator; nothing else crosses that interface.

pub mod coordinator;
pub mod geometry;

pub use coordinator::ScrollCoordinator;
pub use geometry::{ElementBounds, PageGeometry};
