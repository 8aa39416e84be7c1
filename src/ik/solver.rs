use super::config::{ArmConfig, EndEffectorPolicy};
use crate::error::{ArmError, ArmResult};
use crate::math::Segment;
use glam::DVec2;
use serde::Serialize;

/// Which reach bound, if any, moved the target before the angle solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReachClamp {
    None,
    /// Target beyond `max_reach`, pulled in along its direction.
    Outer,
    /// Target closer than `min_reach`, pushed out along its direction.
    Inner,
}

/// Joint positions for one evaluation of an arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArmPose {
    pub origin: DVec2,
    pub elbow: DVec2,
    pub end_effector: DVec2,
    /// The point the angles were actually solved for.
    pub effective_target: DVec2,
    /// Absolute angle of link 1, radians from `+X`.
    pub shoulder_angle: f64,
    /// Deviation of link 2 from the direction of link 1; zero when fully extended.
    pub elbow_bend: f64,
    /// Absolute angle of link 2, radians from `+X`.
    pub forearm_angle: f64,
    pub clamp: ReachClamp,
}

impl ArmPose {
    pub fn upper_arm(&self) -> Segment {
        Segment::new(self.origin, self.elbow)
    }

    pub fn forearm(&self) -> Segment {
        Segment::new(self.elbow, self.end_effector)
    }

    pub fn joints(&self) -> [DVec2; 3] {
        [self.origin, self.elbow, self.end_effector]
    }

    pub fn was_clamped(&self) -> bool {
        self.clamp != ReachClamp::None
    }
}

/// Closed-form planar two-link solver (law of cosines).
///
/// Pure: the pose depends only on `(config, target)`.
pub struct TwoLinkSolver;

impl TwoLinkSolver {
    /// Solves for a finite `target`. Unreachable targets are clamped onto the
    /// reachable annulus before the angles are computed.
    pub fn solve(config: &ArmConfig, target: DVec2) -> ArmPose {
        let origin = config.origin;
        let l1 = config.link1_length;
        let l2 = config.link2_length;

        let vec = target - origin;
        let raw_dist = vec.length();

        let direction = if raw_dist > f64::EPSILON {
            vec / raw_dist
        } else {
            DVec2::X
        };

        let max_reach = config.max_reach();
        let min_reach = config.min_reach();

        let (dist, clamp) = if raw_dist > max_reach {
            (max_reach, ReachClamp::Outer)
        } else if raw_dist < min_reach {
            (min_reach, ReachClamp::Inner)
        } else {
            (raw_dist, ReachClamp::None)
        };

        let effective_target = match clamp {
            ReachClamp::None => target,
            _ => {
                log::debug!(
                    "target {target} clamped ({clamp:?}) from {raw_dist:.4} to {dist:.4}"
                );
                origin + direction * dist
            }
        };

        let angle_base = direction.y.atan2(direction.x);

        let cos_bend = ((dist * dist - l1 * l1 - l2 * l2) / (2.0 * l1 * l2)).clamp(-1.0, 1.0);
        let elbow_bend = cos_bend.acos();

        let cos_offset = ((l1 * l1 + dist * dist - l2 * l2) / (2.0 * l1 * dist)).clamp(-1.0, 1.0);
        let shoulder_offset = cos_offset.acos();

        let shoulder_angle = angle_base + config.elbow.sign() * shoulder_offset;
        let elbow = origin + DVec2::from_angle(shoulder_angle) * l1;

        let forearm = effective_target - elbow;
        let forearm_angle = forearm.y.atan2(forearm.x);

        let end_effector = match config.end_effector {
            EndEffectorPolicy::Clamped => effective_target,
            EndEffectorPolicy::Requested => target,
        };

        ArmPose {
            origin,
            elbow,
            end_effector,
            effective_target,
            shoulder_angle,
            elbow_bend,
            forearm_angle,
            clamp,
        }
    }

    /// Like [`TwoLinkSolver::solve`] but rejects NaN or infinite targets.
    pub fn try_solve(config: &ArmConfig, target: DVec2) -> ArmResult<ArmPose> {
        if !target.is_finite() {
            return Err(ArmError::NonFiniteTarget {
                x: target.x,
                y: target.y,
            });
        }
        Ok(Self::solve(config, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ik::config::ElbowBranch;

    const TOL: f64 = 1e-6;

    fn arm() -> ArmConfig {
        ArmConfig::new(DVec2::ZERO, 2.0, 1.8).unwrap()
    }

    fn assert_links_hold(config: &ArmConfig, pose: &ArmPose) {
        let upper = (pose.elbow - config.origin()).length();
        let fore = (pose.effective_target - pose.elbow).length();
        assert!((upper - config.link1_length()).abs() < TOL, "upper {upper}");
        assert!((fore - config.link2_length()).abs() < TOL, "fore {fore}");
    }

    #[test]
    fn far_target_is_clamped_to_max_reach() {
        let config = arm();
        let pose = TwoLinkSolver::solve(&config, DVec2::new(10.0, 0.0));

        assert_eq!(pose.clamp, ReachClamp::Outer);
        assert!((pose.effective_target - DVec2::new(3.79, 0.0)).length() < TOL);
        assert_eq!(pose.end_effector, pose.effective_target);
        assert_links_hold(&config, &pose);
    }

    #[test]
    fn exact_reach_boundary_stays_finite() {
        let config = arm();
        let pose = TwoLinkSolver::solve(&config, DVec2::new(0.0, 3.8));

        assert!(pose.elbow.is_finite());
        assert!(pose.shoulder_angle.is_finite());
        assert_eq!(pose.clamp, ReachClamp::Outer);
        assert_links_hold(&config, &pose);
    }

    #[test]
    fn target_at_origin_is_pushed_out() {
        let config = ArmConfig::new(DVec2::new(1.0, -2.0), 1.5, 1.5).unwrap();
        let pose = TwoLinkSolver::solve(&config, config.origin());

        assert_eq!(pose.clamp, ReachClamp::Inner);
        assert!(pose.elbow.is_finite());
        let reached = (pose.effective_target - config.origin()).length();
        assert!((reached - 0.1).abs() < TOL);
        assert_links_hold(&config, &pose);
    }

    #[test]
    fn unequal_links_respect_inner_reach() {
        let config = arm();
        let pose = TwoLinkSolver::solve(&config, DVec2::new(0.05, 0.0));

        assert_eq!(pose.clamp, ReachClamp::Inner);
        let reached = (pose.effective_target - config.origin()).length();
        assert!(reached >= 0.1);
        assert_links_hold(&config, &pose);
    }

    #[test]
    fn reachable_targets_are_hit_exactly() {
        let config = ArmConfig::new(DVec2::new(0.0, -2.3), 2.2, 1.8).unwrap();
        for target in [
            DVec2::new(1.0, 0.5),
            DVec2::new(-2.0, -1.0),
            DVec2::new(0.3, 1.2),
            DVec2::new(-0.5, -3.0),
        ] {
            let pose = TwoLinkSolver::solve(&config, target);
            assert_eq!(pose.clamp, ReachClamp::None);
            assert_eq!(pose.end_effector, target);
            assert_links_hold(&config, &pose);
        }
    }

    #[test]
    fn branches_mirror_across_the_target_line() {
        let config = arm();
        let target = DVec2::new(2.5, 0.0);
        let up = TwoLinkSolver::solve(&config, target);
        let down = TwoLinkSolver::solve(&config.mirrored(), target);

        assert_eq!(config.elbow(), ElbowBranch::Positive);
        assert!(up.elbow.y > 0.0);
        assert!((up.elbow.x - down.elbow.x).abs() < TOL);
        assert!((up.elbow.y + down.elbow.y).abs() < TOL);
        assert!((up.elbow_bend - down.elbow_bend).abs() < TOL);
    }

    #[test]
    fn requested_policy_keeps_the_raw_target() {
        let config = ArmConfig::builder()
            .link_lengths(2.0, 1.8)
            .end_effector(EndEffectorPolicy::Requested)
            .build()
            .unwrap();
        let target = DVec2::new(10.0, 0.0);
        let pose = TwoLinkSolver::solve(&config, target);

        assert_eq!(pose.end_effector, target);
        assert!(pose.forearm().length() > config.link2_length());
        assert_links_hold(&config, &pose);
    }

    #[test]
    fn fully_extended_arm_has_no_bend() {
        let config = arm();
        let pose = TwoLinkSolver::solve(&config, DVec2::new(50.0, 50.0));
        assert!(pose.elbow_bend < 0.2);
        assert!((pose.shoulder_angle - pose.forearm_angle).abs() < 0.2);
    }

    #[test]
    fn solve_is_deterministic() {
        let config = arm();
        let target = DVec2::new(1.234, -0.987);
        let a = TwoLinkSolver::solve(&config, target);
        let b = TwoLinkSolver::solve(&config, target);
        assert_eq!(a, b);
        assert_eq!(a.elbow.x.to_bits(), b.elbow.x.to_bits());
        assert_eq!(a.elbow.y.to_bits(), b.elbow.y.to_bits());
    }

    #[test]
    fn try_solve_rejects_nan() {
        let err = TwoLinkSolver::try_solve(&arm(), DVec2::new(f64::NAN, 1.0)).unwrap_err();
        assert!(matches!(err, ArmError::NonFiniteTarget { .. }));
        assert!(TwoLinkSolver::try_solve(&arm(), DVec2::ONE).is_ok());
    }
}
