use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A straight line between two points, as the renderer draws it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    pub fn delta(&self) -> DVec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    /// Unit direction from start to end, `+X` when the segment has no length.
    pub fn direction(&self) -> DVec2 {
        let delta = self.delta();
        let len = delta.length();
        if len > f64::EPSILON {
            delta / len
        } else {
            DVec2::X
        }
    }

    /// Absolute angle of the segment in radians, measured from `+X`.
    pub fn angle(&self) -> f64 {
        let delta = self.delta();
        delta.y.atan2(delta.x)
    }

    pub fn midpoint(&self) -> DVec2 {
        self.start.lerp(self.end, 0.5)
    }

    pub fn at(&self, t: f64) -> DVec2 {
        self.start.lerp(self.end, t)
    }

    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.length() < epsilon
    }
}
