//! # arm-ik
//!
//! Closed-form inverse kinematics for planar two-link arms, driven one frame at a time
//! by an external animation engine.
//!
//! ## Features
//! - Law-of-cosines two-link solver with reach clamping and a selectable elbow branch
//! - Straight telescoping follower
//! - Beam endpoint rule that never emits zero-length segments
//! - Optional spring smoothing of the target
//! - JSON rig configuration
//!
//! ## Example
//! ```rust
//! use arm_ik::ik::{ArmConfig, TwoLinkSolver};
//! use glam::DVec2;
//!
//! let arm = ArmConfig::new(DVec2::ZERO, 2.0, 1.8).unwrap();
//! let pose = TwoLinkSolver::solve(&arm, DVec2::new(10.0, 0.0));
//!
//! assert!((pose.upper_arm().length() - 2.0).abs() < 1e-9);
//! assert!((pose.effective_target.x - 3.79).abs() < 1e-9);
//! ```

pub mod beam;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod ik;
pub mod math;
pub mod rig;

pub use beam::{BeamRule, BeamState};
pub use config::RigConfig;
pub use dynamics::{Interpolatable, SecondOrderDynamics, SpringParams, SpringPreset};
pub use error::{ArmError, ArmResult};
pub use ik::{
    ArmConfig, ArmConfigBuilder, ArmPose, ElbowBranch, EndEffectorPolicy, ReachClamp,
    StraightSolver, TwoLinkSolver,
};
pub use math::Segment;
pub use rig::{ArmRig, Frame, SolverKind};
