use super::*;

fn cfg() -> HarnessConfig {
    HarnessConfig {
        assets_dir: PathBuf::from("assets"),
        ..HarnessConfig::default()
    }
}

fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

fn textures_written(steps: &[Step]) -> Vec<(&str, &'static str)> {
    steps
        .iter()
        .filter_map(|s| match s {
            Step::WriteTexture { path, label, .. } => {
                Some((path.file_name().unwrap().to_str().unwrap(), *label))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn full_plan_shape() {
    let steps = build_plan(&cfg(), at(1_000)).unwrap();

    assert_eq!(steps.len(), 73);
    assert_eq!(total_pause(&steps), Duration::from_millis(21_500));

    let settings = steps
        .iter()
        .filter(|s| matches!(s, Step::WriteSettings { .. }))
        .count();
    assert_eq!(settings, 3 + 10);

    assert_eq!(
        textures_written(&steps),
        vec![
            ("player.png", "red"),
            ("player.png", "green"),
            ("player.png", "blue"),
            ("player.png", "yellow"),
            ("temp_test.png", "gray"),
            ("temp_test.png", "orange"),
        ]
    );

    let removes = steps
        .iter()
        .filter(|s| matches!(s, Step::Remove { .. }))
        .count();
    assert_eq!(removes, 2);
}

fn announcements(steps: &[Step]) -> Vec<&str> {
    steps
        .iter()
        .filter_map(|s| match s {
            Step::Announce(msg) => Some(msg.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn plan_ends_without_trailing_phase_pause() {
    let steps = build_plan(&cfg(), at(0)).unwrap();
    assert!(matches!(steps.first(), Some(Step::Announce(_))));

    // The rapid burst ends with its own 0.2s pause, not the 2s inter-phase one.
    let n = steps.len();
    assert_eq!(steps[n - 3], Step::Pause(Duration::from_millis(200)));
    assert_eq!(steps[n - 2], Step::Announce("rapid phase completed".to_owned()));
    assert!(matches!(&steps[n - 1], Step::Announce(msg) if msg.contains("console")));
}

#[test]
fn every_phase_announces_completion() {
    let steps = build_plan(&cfg(), at(0)).unwrap();
    let done: Vec<&str> = announcements(&steps)
        .into_iter()
        .filter(|m| m.ends_with("phase completed"))
        .collect();
    assert_eq!(
        done,
        vec![
            "config phase completed",
            "textures phase completed",
            "churn phase completed",
            "rapid phase completed",
        ]
    );

    // completion lines come before the inter-phase pause
    let idx = steps
        .iter()
        .position(|s| *s == Step::Announce("config phase completed".to_owned()))
        .unwrap();
    assert_eq!(steps[idx + 1], Step::Pause(Duration::from_secs(2)));
}

#[test]
fn time_scale_scales_every_pause() {
    let half = HarnessConfig {
        time_scale: 0.5,
        ..cfg()
    };
    let steps = build_plan(&half, at(0)).unwrap();
    assert_eq!(total_pause(&steps), Duration::from_millis(10_750));

    let zero = HarnessConfig {
        time_scale: 0.0,
        ..cfg()
    };
    assert_eq!(total_pause(&build_plan(&zero, at(0)).unwrap()), Duration::ZERO);
}

#[test]
fn single_phase_has_no_inter_phase_pause() {
    let only = HarnessConfig {
        phases: vec![Phase::Churn],
        ..cfg()
    };
    let steps = build_plan(&only, at(0)).unwrap();
    assert_eq!(total_pause(&steps), Duration::from_secs(3));
    let n = steps.len();
    assert!(matches!(steps[n - 3], Step::Remove { .. }));
    assert_eq!(steps[n - 2], Step::Announce("churn phase completed".to_owned()));
}

#[test]
fn rapid_burst_is_seeded_and_timestamped() {
    let rapid = HarnessConfig {
        phases: vec![Phase::Rapid],
        rapid_changes: 3,
        seed: 77,
        ..cfg()
    };
    let a = build_plan(&rapid, at(500)).unwrap();
    let b = build_plan(&rapid, at(500)).unwrap();
    assert_eq!(a, b);

    let stamps: Vec<f64> = a
        .iter()
        .filter_map(|s| match s {
            Step::WriteSettings { doc, .. } => doc.timestamp,
            _ => None,
        })
        .collect();
    assert_eq!(stamps.len(), 3);
    assert!((stamps[0] - 500.0).abs() < 1e-6);
    assert!((stamps[2] - 500.4).abs() < 1e-6);

    let other_seed = HarnessConfig { seed: 78, ..rapid };
    assert_ne!(a, build_plan(&other_seed, at(500)).unwrap());
}

#[test]
fn invalid_config_is_rejected() {
    let bad = HarnessConfig {
        rapid_changes: 0,
        ..cfg()
    };
    assert!(matches!(
        build_plan(&bad, at(0)),
        Err(ProbeError::Validation(_))
    ));
}

#[test]
fn display_is_one_line_per_step() {
    let steps = build_plan(&cfg(), at(0)).unwrap();
    for s in &steps {
        assert!(!s.to_string().contains('\n'));
    }
    assert!(steps.iter().any(|s| s.to_string().contains("yellow #ffff00")));
}
