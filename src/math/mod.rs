//! Math utilities module
//!
//! Provides convenient re-exports from glam and the segment type handed to renderers.

mod segment;

pub use segment::Segment;

// Re-export commonly used glam types
pub use glam::DVec2;
