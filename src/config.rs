//! JSON rig description
//!
//! ```json
//! {
//!   "arm": { "origin": [0.0, -2.3], "link1": 2.2, "link2": 1.8, "elbow": "positive" },
//!   "solver": "two_link",
//!   "beam": { "epsilon": 0.01 },
//!   "smoothing": { "preset": "smooth" }
//! }
//! ```
//!
//! Every section and field is optional; omitted values fall back to the
//! letter-writing arm.

use crate::beam::{BeamRule, BeamState, DEFAULT_BEAM_EPSILON};
use crate::dynamics::{SpringParams, SpringPreset};
use crate::error::{ArmError, ArmResult};
use crate::ik::config::{DEFAULT_MIN_DISTANCE, DEFAULT_REACH_EPSILON};
use crate::ik::{ArmConfig, ElbowBranch, EndEffectorPolicy};
use crate::rig::{ArmRig, SolverKind};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArmSettings {
    pub origin: DVec2,
    pub link1: f64,
    pub link2: f64,
    pub elbow: ElbowBranch,
    pub end_effector: EndEffectorPolicy,
    pub reach_epsilon: f64,
    pub min_distance: f64,
}

impl Default for ArmSettings {
    fn default() -> Self {
        Self {
            origin: DVec2::new(0.0, -2.3),
            link1: 2.2,
            link2: 1.8,
            elbow: ElbowBranch::default(),
            end_effector: EndEffectorPolicy::default(),
            reach_epsilon: DEFAULT_REACH_EPSILON,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl ArmSettings {
    pub fn to_config(&self) -> ArmResult<ArmConfig> {
        ArmConfig::builder()
            .origin(self.origin)
            .link_lengths(self.link1, self.link2)
            .elbow(self.elbow)
            .end_effector(self.end_effector)
            .reach_epsilon(self.reach_epsilon)
            .min_distance(self.min_distance)
            .build()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BeamSettings {
    pub epsilon: f64,
    /// Perturbation applied to coincident endpoints, `(epsilon, 0)` when absent.
    pub offset: Option<DVec2>,
    pub state: BeamState,
}

impl Default for BeamSettings {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_BEAM_EPSILON,
            offset: None,
            state: BeamState::On,
        }
    }
}

impl BeamSettings {
    pub fn to_rule(&self) -> ArmResult<BeamRule> {
        let rule = BeamRule::new(self.epsilon)?;
        match self.offset {
            Some(offset) => rule.with_offset(offset),
            None => Ok(rule),
        }
    }
}

/// Either a named preset or explicit spring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SmoothingSettings {
    Preset { preset: SpringPreset },
    Custom(SpringParams),
}

impl SmoothingSettings {
    pub fn params(&self) -> ArmResult<SpringParams> {
        let params = match *self {
            SmoothingSettings::Preset { preset } => preset.params(),
            SmoothingSettings::Custom(params) => params,
        };
        if !(params.frequency.is_finite() && params.frequency > 0.0) {
            return Err(ArmError::tolerance("smoothing.frequency", params.frequency));
        }
        if !(params.damping.is_finite() && params.damping >= 0.0) {
            return Err(ArmError::tolerance("smoothing.damping", params.damping));
        }
        if !params.response.is_finite() {
            return Err(ArmError::tolerance("smoothing.response", params.response));
        }
        Ok(params)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RigConfig {
    pub arm: ArmSettings,
    pub solver: SolverKind,
    pub beam: BeamSettings,
    pub smoothing: Option<SmoothingSettings>,
}

impl RigConfig {
    pub fn from_json_str(json: &str) -> ArmResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ArmResult<Self> {
        let path = path.as_ref();
        log::debug!("loading rig config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validates every section and assembles the rig.
    pub fn build_rig(&self) -> ArmResult<ArmRig> {
        let config = self.arm.to_config()?;
        let beam = self.beam.to_rule()?;

        let mut rig = ArmRig::new(config)
            .with_solver(self.solver)
            .with_beam(beam);
        if let Some(smoothing) = &self.smoothing {
            rig = rig.with_smoothing(smoothing.params()?);
        }
        rig.set_beam(self.beam.state);

        log::debug!(
            "rig ready: links {}/{} solver {:?}",
            config.link1_length(),
            config.link2_length(),
            self.solver
        );
        Ok(rig)
    }
}
