use super::config::{ArmConfig, EndEffectorPolicy};
use super::solver::{ArmPose, ReachClamp};
use glam::DVec2;

/// Telescoping follower: both links lie on the line from the origin to the target.
///
/// The elbow sits at the fraction `l1 / (l1 + l2)` of the (clamped) target vector,
/// so link 1 only has its nominal length when the arm is fully extended.
pub struct StraightSolver;

impl StraightSolver {
    /// Returns `None` when the target coincides with the origin; callers keep
    /// their previous pose in that case.
    pub fn solve(config: &ArmConfig, target: DVec2) -> Option<ArmPose> {
        let origin = config.origin;
        let max_reach = config.total_length();

        let mut vec = target - origin;
        let dist = vec.length();
        if dist <= f64::EPSILON {
            log::trace!("straight solve skipped: target on origin");
            return None;
        }

        let clamp = if dist > max_reach {
            vec *= max_reach / dist;
            ReachClamp::Outer
        } else {
            ReachClamp::None
        };

        let effective_target = origin + vec;
        let elbow = origin + vec * (config.link1_length / max_reach);
        let end_effector = match config.end_effector {
            EndEffectorPolicy::Clamped => effective_target,
            EndEffectorPolicy::Requested => target,
        };

        let shoulder_angle = vec.y.atan2(vec.x);
        Some(ArmPose {
            origin,
            elbow,
            end_effector,
            effective_target,
            shoulder_angle,
            elbow_bend: 0.0,
            forearm_angle: shoulder_angle,
            clamp,
        })
    }
}
