use crate::error::{ArmError, ArmResult, Link};
use glam::DVec2;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REACH_EPSILON: f64 = 0.01;
pub const DEFAULT_MIN_DISTANCE: f64 = 0.1;

fn inner_reach(link1: f64, link2: f64, min_distance: f64, reach_epsilon: f64) -> f64 {
    let diff = (link1 - link2).abs();
    if diff > 0.0 {
        min_distance.max(diff + reach_epsilon)
    } else {
        min_distance
    }
}

/// Which of the two mirror-image solutions the solver commits to.
///
/// `Positive` adds the shoulder offset to the base angle, `Negative` subtracts it.
/// Both place the end effector at the same point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElbowBranch {
    #[default]
    Positive,
    Negative,
}

impl ElbowBranch {
    pub fn sign(self) -> f64 {
        match self {
            ElbowBranch::Positive => 1.0,
            ElbowBranch::Negative => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ElbowBranch::Positive => ElbowBranch::Negative,
            ElbowBranch::Negative => ElbowBranch::Positive,
        }
    }
}

/// Where the end effector is reported when the requested target had to be clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndEffectorPolicy {
    /// At the clamped target, so the forearm keeps its length.
    #[default]
    Clamped,
    /// At the raw request; the forearm is drawn stretched when a clamp applied.
    Requested,
}

/// Immutable description of one planar two-link arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmConfig {
    pub(crate) origin: DVec2,
    pub(crate) link1_length: f64,
    pub(crate) link2_length: f64,
    pub(crate) elbow: ElbowBranch,
    pub(crate) end_effector: EndEffectorPolicy,
    pub(crate) reach_epsilon: f64,
    pub(crate) min_distance: f64,
}

impl ArmConfig {
    pub fn builder() -> ArmConfigBuilder {
        ArmConfigBuilder::new()
    }

    /// Arm with default branch, policy and tolerances.
    pub fn new(origin: DVec2, link1_length: f64, link2_length: f64) -> ArmResult<Self> {
        Self::builder()
            .origin(origin)
            .link_lengths(link1_length, link2_length)
            .build()
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn link1_length(&self) -> f64 {
        self.link1_length
    }

    pub fn link2_length(&self) -> f64 {
        self.link2_length
    }

    pub fn elbow(&self) -> ElbowBranch {
        self.elbow
    }

    pub fn end_effector_policy(&self) -> EndEffectorPolicy {
        self.end_effector
    }

    pub fn reach_epsilon(&self) -> f64 {
        self.reach_epsilon
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    pub fn total_length(&self) -> f64 {
        self.link1_length + self.link2_length
    }

    /// Farthest distance the solver will place the end effector from the origin.
    pub fn max_reach(&self) -> f64 {
        self.total_length() - self.reach_epsilon
    }

    /// Closest distance the solver will place the end effector from the origin.
    ///
    /// Unequal links cannot fold all the way back onto the shoulder, so the inner
    /// bound grows to `|l1 - l2| + reach_epsilon`.
    pub fn min_reach(&self) -> f64 {
        inner_reach(
            self.link1_length,
            self.link2_length,
            self.min_distance,
            self.reach_epsilon,
        )
    }

    /// Same arm with the opposite elbow solution.
    pub fn mirrored(&self) -> Self {
        Self {
            elbow: self.elbow.flipped(),
            ..*self
        }
    }
}

pub struct ArmConfigBuilder {
    origin: DVec2,
    link1_length: f64,
    link2_length: f64,
    elbow: ElbowBranch,
    end_effector: EndEffectorPolicy,
    reach_epsilon: f64,
    min_distance: f64,
}

impl ArmConfigBuilder {
    pub fn new() -> Self {
        Self {
            origin: DVec2::ZERO,
            link1_length: 0.0,
            link2_length: 0.0,
            elbow: ElbowBranch::default(),
            end_effector: EndEffectorPolicy::default(),
            reach_epsilon: DEFAULT_REACH_EPSILON,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }

    pub fn origin(mut self, origin: DVec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn link_lengths(mut self, link1: f64, link2: f64) -> Self {
        self.link1_length = link1;
        self.link2_length = link2;
        self
    }

    pub fn elbow(mut self, elbow: ElbowBranch) -> Self {
        self.elbow = elbow;
        self
    }

    pub fn end_effector(mut self, policy: EndEffectorPolicy) -> Self {
        self.end_effector = policy;
        self
    }

    pub fn reach_epsilon(mut self, epsilon: f64) -> Self {
        self.reach_epsilon = epsilon;
        self
    }

    pub fn min_distance(mut self, distance: f64) -> Self {
        self.min_distance = distance;
        self
    }

    pub fn build(self) -> ArmResult<ArmConfig> {
        self.validate()?;
        Ok(ArmConfig {
            origin: self.origin,
            link1_length: self.link1_length,
            link2_length: self.link2_length,
            elbow: self.elbow,
            end_effector: self.end_effector,
            reach_epsilon: self.reach_epsilon,
            min_distance: self.min_distance,
        })
    }

    fn validate(&self) -> ArmResult<()> {
        for (link, value) in [
            (Link::Upper, self.link1_length),
            (Link::Fore, self.link2_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                log::warn!("rejecting arm config: {link} length {value}");
                return Err(ArmError::InvalidLinkLength { link, value });
            }
        }

        if !self.origin.is_finite() {
            return Err(ArmError::NonFiniteOrigin);
        }

        let total = self.link1_length + self.link2_length;
        if !self.reach_epsilon.is_finite()
            || self.reach_epsilon < 0.0
            || self.reach_epsilon >= total
        {
            return Err(ArmError::tolerance("reach_epsilon", self.reach_epsilon));
        }

        // A zero inner bound would let the solver divide by a zero target distance.
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(ArmError::tolerance("min_distance", self.min_distance));
        }

        let max_reach = total - self.reach_epsilon;
        let min_reach = inner_reach(
            self.link1_length,
            self.link2_length,
            self.min_distance,
            self.reach_epsilon,
        );
        if min_reach > max_reach {
            log::warn!(
                "rejecting arm config: inner reach {min_reach} exceeds outer reach {max_reach}"
            );
            return Err(if self.min_distance > max_reach {
                ArmError::tolerance("min_distance", self.min_distance)
            } else {
                ArmError::tolerance("reach_epsilon", self.reach_epsilon)
            });
        }

        Ok(())
    }
}

impl Default for ArmConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
