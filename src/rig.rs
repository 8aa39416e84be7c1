//! Per-frame driver
//!
//! The renderer pulls one [`Frame`] per tick by handing the rig the current target.
//! All state that survives between frames (spring smoothing, the last pose, the
//! frame counter) lives here; the solvers stay pure.

use crate::beam::{BeamRule, BeamState};
use crate::dynamics::{SecondOrderDynamics, SpringParams};
use crate::error::{ArmError, ArmResult};
use crate::ik::{ArmConfig, ArmPose, StraightSolver, TwoLinkSolver};
use crate::math::Segment;
use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    #[default]
    TwoLink,
    Straight,
}

/// Everything the renderer needs to draw one frame of the arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub index: u64,
    /// Target as requested by the caller, before smoothing.
    pub target: DVec2,
    /// Target actually handed to the solver.
    pub solved_for: DVec2,
    pub pose: ArmPose,
    pub beam: Segment,
    pub beam_state: BeamState,
}

#[derive(Debug, Clone)]
pub struct ArmRig {
    config: ArmConfig,
    solver: SolverKind,
    beam: BeamRule,
    beam_state: BeamState,
    smoothing: Option<SecondOrderDynamics<DVec2>>,
    last_pose: ArmPose,
    frame: u64,
}

impl ArmRig {
    /// Rig resting with the arm pointing straight up at full reach.
    pub fn new(config: ArmConfig) -> Self {
        let rest = config.origin() + DVec2::Y * config.total_length();
        let last_pose = TwoLinkSolver::solve(&config, rest);
        Self {
            config,
            solver: SolverKind::default(),
            beam: BeamRule::default(),
            beam_state: BeamState::default(),
            smoothing: None,
            last_pose,
            frame: 0,
        }
    }

    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_beam(mut self, beam: BeamRule) -> Self {
        self.beam = beam;
        self
    }

    /// Smooth the incoming target with a spring starting at the current end effector.
    pub fn with_smoothing(mut self, params: SpringParams) -> Self {
        self.smoothing = Some(SecondOrderDynamics::new(params, self.last_pose.end_effector));
        self
    }

    pub fn config(&self) -> &ArmConfig {
        &self.config
    }

    pub fn solver(&self) -> SolverKind {
        self.solver
    }

    pub fn beam_state(&self) -> BeamState {
        self.beam_state
    }

    pub fn set_beam(&mut self, state: BeamState) {
        self.beam_state = state;
    }

    pub fn last_pose(&self) -> &ArmPose {
        &self.last_pose
    }

    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    /// Advances one frame toward `target`; `dt` is only used by smoothing.
    pub fn tick(&mut self, target: DVec2, dt: f64) -> Frame {
        let solved_for = match &mut self.smoothing {
            Some(spring) => spring.update(target, dt),
            None => target,
        };

        let pose = match self.solver {
            SolverKind::TwoLink => TwoLinkSolver::solve(&self.config, solved_for),
            SolverKind::Straight => {
                StraightSolver::solve(&self.config, solved_for).unwrap_or(self.last_pose)
            }
        };
        self.last_pose = pose;

        let beam = self.beam.emit(pose.end_effector, target, self.beam_state);

        let frame = Frame {
            index: self.frame,
            target,
            solved_for,
            pose,
            beam,
            beam_state: self.beam_state,
        };
        log::trace!(
            "frame {}: elbow {} tip {} clamp {:?}",
            frame.index,
            pose.elbow,
            pose.end_effector,
            pose.clamp
        );
        self.frame += 1;
        frame
    }

    /// Like [`ArmRig::tick`] but rejects non-finite targets without advancing.
    pub fn try_tick(&mut self, target: DVec2, dt: f64) -> ArmResult<Frame> {
        if !target.is_finite() {
            return Err(ArmError::NonFiniteTarget {
                x: target.x,
                y: target.y,
            });
        }
        Ok(self.tick(target, dt))
    }

    /// Drops smoothing velocity and snaps the spring onto `position`.
    pub fn reset_smoothing(&mut self, position: DVec2) {
        if let Some(spring) = &mut self.smoothing {
            spring.reset(position);
        }
    }
}
