//! Beam endpoint rule
//!
//! A beam follows two moving points (usually the arm tip and the target). Renderers
//! cannot stroke a zero-length line, so every segment emitted here has a length of
//! at least `epsilon`.

use crate::error::{ArmError, ArmResult};
use crate::math::Segment;
use glam::DVec2;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BEAM_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeamState {
    #[default]
    On,
    /// Hidden beams are still emitted, as the shortest valid segment at the start point.
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamRule {
    epsilon: f64,
    offset: DVec2,
}

impl Default for BeamRule {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_BEAM_EPSILON,
            offset: DVec2::new(DEFAULT_BEAM_EPSILON, 0.0),
        }
    }
}

impl BeamRule {
    /// Rule with perturbation `(epsilon, 0)`.
    pub fn new(epsilon: f64) -> ArmResult<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ArmError::tolerance("beam_epsilon", epsilon));
        }
        Ok(Self {
            epsilon,
            offset: DVec2::new(epsilon, 0.0),
        })
    }

    /// Replaces the perturbation vector; it must itself be at least `epsilon` long.
    pub fn with_offset(mut self, offset: DVec2) -> ArmResult<Self> {
        if !offset.is_finite() || offset.length() < self.epsilon {
            return Err(ArmError::config(format!(
                "beam offset {offset} is shorter than epsilon {}",
                self.epsilon
            )));
        }
        self.offset = offset;
        Ok(self)
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    pub fn apply(&self, start: DVec2, end: DVec2) -> Segment {
        if (end - start).length() < self.epsilon {
            log::trace!("beam endpoints coincide at {start}, nudging end");
            return Segment::new(start, start + self.offset);
        }
        Segment::new(start, end)
    }

    pub fn emit(&self, start: DVec2, end: DVec2, state: BeamState) -> Segment {
        match state {
            BeamState::On => self.apply(start, end),
            BeamState::Off => Segment::new(start, start + self.offset),
        }
    }
}
