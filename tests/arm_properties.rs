use arm_ik::{
    ArmConfig, ArmError, ArmRig, BeamRule, EndEffectorPolicy, ReachClamp, RigConfig,
    TwoLinkSolver,
};
use glam::DVec2;

const TOL: f64 = 1e-6;

fn assert_triangle(config: &ArmConfig, target: DVec2) {
    let pose = TwoLinkSolver::solve(config, target);
    let upper = (pose.elbow - config.origin()).length();
    let fore = (pose.effective_target - pose.elbow).length();
    assert!(
        (upper - config.link1_length()).abs() < TOL,
        "upper {upper} for target {target}"
    );
    assert!(
        (fore - config.link2_length()).abs() < TOL,
        "fore {fore} for target {target}"
    );
}

#[test]
fn clamp_far_target_onto_max_reach() {
    let config = ArmConfig::new(DVec2::ZERO, 2.0, 1.8).unwrap();
    let pose = TwoLinkSolver::solve(&config, DVec2::new(10.0, 0.0));

    assert_eq!(pose.clamp, ReachClamp::Outer);
    assert!((pose.elbow.length() - 2.0).abs() < TOL);
    assert!((pose.effective_target.length() - 3.79).abs() < TOL);
    assert!(pose.effective_target.y.abs() < TOL);
    assert!(((pose.effective_target - pose.elbow).length() - 1.8).abs() < TOL);
}

#[test]
fn triangle_holds_across_the_plane() {
    let configs = [
        ArmConfig::new(DVec2::ZERO, 2.0, 1.8).unwrap(),
        ArmConfig::new(DVec2::new(0.0, -2.3), 2.2, 1.8).unwrap(),
        ArmConfig::new(DVec2::new(-8.0, 0.0), 2.0, 1.5).unwrap().mirrored(),
        ArmConfig::new(DVec2::new(3.0, 3.0), 1.0, 1.0).unwrap(),
    ];

    for config in &configs {
        for ring in 0..12 {
            let radius = ring as f64 * 0.45;
            for step in 0..16 {
                let angle = step as f64 * std::f64::consts::TAU / 16.0;
                let target = config.origin() + DVec2::from_angle(angle) * radius;
                assert_triangle(config, target);
            }
        }
        assert_triangle(config, config.origin());
    }
}

#[test]
fn stretched_forearm_only_with_requested_policy() {
    let config = ArmConfig::builder()
        .link_lengths(2.0, 1.8)
        .end_effector(EndEffectorPolicy::Requested)
        .build()
        .unwrap();
    let far = DVec2::new(0.0, -9.0);
    let pose = TwoLinkSolver::solve(&config, far);

    assert_eq!(pose.end_effector, far);
    assert_ne!(pose.effective_target, far);
}

#[test]
fn configuration_errors_stop_rig_setup() {
    let err = ArmConfig::new(DVec2::ZERO, 0.0, 1.0).unwrap_err();
    assert!(matches!(err, ArmError::InvalidLinkLength { .. }));

    let rig = RigConfig::from_json_str(r#"{ "arm": { "link2": -1.0 } }"#)
        .unwrap()
        .build_rig();
    assert!(rig.is_err());
}

#[test]
fn rig_frames_serialize_for_the_renderer() {
    let config = ArmConfig::new(DVec2::ZERO, 2.0, 1.8).unwrap();
    let mut rig = ArmRig::new(config).with_beam(BeamRule::new(0.02).unwrap());

    let frame = rig.tick(DVec2::new(1.0, 1.0), 1.0 / 30.0);
    let json = serde_json::to_value(frame).unwrap();

    assert_eq!(json["index"], 0);
    assert_eq!(json["pose"]["clamp"], "none");
    assert_eq!(json["beam_state"], "on");
    assert!(json["pose"]["elbow"].is_array());
    assert!((frame.beam.length() - 0.02).abs() < 1e-12);
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let config = ArmConfig::new(DVec2::new(0.25, -1.5), 2.2, 1.8).unwrap();
    let target = DVec2::new(-1.1, 0.7);
    let first = TwoLinkSolver::solve(&config, target);
    for _ in 0..10 {
        assert_eq!(TwoLinkSolver::solve(&config, target), first);
    }
}
