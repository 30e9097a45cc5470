use super::*;

#[test]
fn scripted_revisions_match_table() {
    let [a, b, c] = SettingsDoc::scripted();

    assert_eq!(a.version, "1.0.1");
    assert_eq!(a.player_speed, 7.5);
    assert!(a.debug_mode);
    assert_eq!(a.test_iteration, Some(1));
    assert_eq!(a.new_feature, None);

    assert_eq!(b.version, "1.0.2");
    assert_eq!(b.gravity, 12.0);
    assert!(!b.debug_mode);
    assert_eq!(b.new_feature.as_deref(), Some("hot_reload_test"));

    assert_eq!(c.version, "1.0.3");
    assert_eq!(c.jump_height, 10.0);
    assert_eq!(c.difficulty.as_deref(), Some("normal"));
}

#[test]
fn absent_optional_keys_are_omitted() {
    let [a, ..] = SettingsDoc::scripted();
    let v = serde_json::to_value(&a).unwrap();
    let obj = v.as_object().unwrap();
    assert!(obj.contains_key("test_iteration"));
    assert!(!obj.contains_key("new_feature"));
    assert!(!obj.contains_key("difficulty"));
    assert!(!obj.contains_key("timestamp"));
}

#[test]
fn rapid_values_are_bounded_and_seeded() {
    let mut r1 = Rng64::new(9);
    let mut r2 = Rng64::new(9);
    for i in 0..50 {
        let d = SettingsDoc::rapid(i, &mut r1, 100.0);
        assert_eq!(d, SettingsDoc::rapid(i, &mut r2, 100.0));
        assert!((1.0..10.0).contains(&d.player_speed));
        assert!((5.0..20.0).contains(&d.jump_height));
        assert!((5.0..15.0).contains(&d.gravity));
        assert_eq!(d.version, format!("stress-test-{i}"));
        assert_eq!(d.rapid_change_id, Some(i));
    }
}

#[test]
fn write_settings_uses_two_space_indent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("settings.json");
    let [a, ..] = SettingsDoc::scripted();

    write_settings(&path, &a).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"player_speed\": 7.5,"), "{text}");
    let back: SettingsDoc = serde_json::from_str(&text).unwrap();
    assert_eq!(back, a);
}
