use std::fs;

use hacker_runner::config::*;
use hacker_runner::RunnerError;

#[test]
fn defaults_are_valid() {
    GameConfig::default().validate().unwrap();
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let cfg = GameConfig::from_toml_str(
        r#"
        [world]
        base_speed = 400.0

        [spawn]
        jitter = { min = 0.5, max = 1.0 }
        "#,
    )
    .unwrap();
    assert_eq!(cfg.world.base_speed, 400.0);
    assert_eq!(cfg.world.speed_ramp, 3.5);
    assert_eq!(cfg.spawn.jitter, SpawnRange::new(0.5, 1.0));
    assert_eq!(cfg.spawn.drone_chance, 0.25);
    assert_eq!(cfg.player, PlayerConfig::default());
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn inverted_range_is_rejected() {
    let err = GameConfig::from_toml_str("[spawn]\ninterval = { min = 2.0, max = 1.0 }").unwrap_err();
    assert!(matches!(err, RunnerError::ConfigInvalid(_)));
}

#[test]
fn bad_probability_is_rejected() {
    let err = GameConfig::from_toml_str("[spawn]\npowerup_chance = 1.5").unwrap_err();
    assert!(matches!(err, RunnerError::ConfigInvalid(_)));
}

#[test]
fn positive_jump_velocity_is_rejected() {
    let err = GameConfig::from_toml_str("[player]\njump_velocity = 300.0").unwrap_err();
    assert!(matches!(err, RunnerError::ConfigInvalid(_)));
}

#[test]
fn non_finite_values_are_rejected() {
    for text in [
        "[player]\ngravity = nan\n[world]\nbase_speed = nan",
        "[world]\ncull_margin = nan",
        "[world]\ndrone_speed_factor = inf",
        "[spawn]\ntighten_rate = nan",
        "[spawn]\npacket_size = -inf",
        "[spawn]\ndrone_band = { min = nan, max = 96.0 }",
        "[clock]\nmax_step = inf",
    ] {
        let err = GameConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, RunnerError::ConfigInvalid(_)), "{text}: {err}");
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = GameConfig::from_toml_str("[world\nwidth = ").unwrap_err();
    assert!(matches!(err, RunnerError::ConfigParse { .. }));
}

#[test]
fn load_reports_path_on_parse_error() {
    let dir = std::env::temp_dir().join(format!("hacker_runner_cfg_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.toml");
    fs::write(&path, "world = 3").unwrap();
    match GameConfig::load(&path) {
        Err(RunnerError::ConfigParse { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected parse error, got {other:?}"),
    }
    let _ = fs::remove_file(&path);
}

#[test]
fn load_or_default_falls_back() {
    assert_eq!(GameConfig::load_or_default(None), GameConfig::default());
    let missing = std::env::temp_dir().join("hacker_runner_no_such_config.toml");
    assert_eq!(GameConfig::load_or_default(Some(missing.as_path())), GameConfig::default());
}

#[test]
fn load_reads_file() {
    let dir = std::env::temp_dir().join(format!("hacker_runner_cfg_ok_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("game.toml");
    fs::write(&path, "[power]\nslowmo_multiplier = 0.5\n").unwrap();
    let cfg = GameConfig::load(&path).unwrap();
    assert_eq!(cfg.power.slowmo_multiplier, 0.5);
    let _ = fs::remove_file(&path);
}
