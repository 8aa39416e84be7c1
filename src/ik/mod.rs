//! Inverse Kinematics module
//!
//! Arm configuration, the closed-form two-link solver and the straight follower.

pub mod config;
pub mod solver;
pub mod straight;

pub use config::{ArmConfig, ArmConfigBuilder, ElbowBranch, EndEffectorPolicy};
pub use solver::{ArmPose, ReachClamp, TwoLinkSolver};
pub use straight::StraightSolver;
