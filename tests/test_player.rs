use hacker_runner::compute::{init_state, tick};
use hacker_runner::config::{GameConfig, PlayerConfig};
use hacker_runner::entities::*;
use hacker_runner::player::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    let mut s = init_state(&GameConfig::default());
    s.spawner.countdown = f64::INFINITY;
    s
}

fn pcfg() -> PlayerConfig {
    PlayerConfig::default()
}

// ── jump ──────────────────────────────────────────────────────────────────────

#[test]
fn jump_from_ground() {
    let s = make_state();
    let s2 = jump(&s, &pcfg());
    assert!(!s2.player.grounded);
    assert_eq!(s2.player.vy, -680.0);
    assert_eq!(s2.cues, vec![Cue::Jump]);
}

#[test]
fn jump_while_airborne_is_noop() {
    let s = jump(&make_state(), &pcfg());
    let mut airborne = s.clone();
    airborne.player.vy = -200.0;
    let s2 = jump(&airborne, &pcfg());
    assert_eq!(s2.player, airborne.player);
    assert_eq!(s2.cues, airborne.cues);
}

#[test]
fn jump_while_sliding_is_noop() {
    let s = slide(&make_state(), &pcfg());
    let s2 = jump(&s, &pcfg());
    assert_eq!(s2.player, s.player);
    assert!(s2.cues.is_empty());
}

#[test]
fn jump_after_game_over_is_noop() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    let s2 = jump(&s, &pcfg());
    assert!(s2.player.grounded);
}

#[test]
fn jump_does_not_mutate_original() {
    let s = make_state();
    let _ = jump(&s, &pcfg());
    assert!(s.player.grounded);
}

// ── slide ─────────────────────────────────────────────────────────────────────

#[test]
fn slide_from_ground() {
    let s2 = slide(&make_state(), &pcfg());
    assert!(s2.player.sliding);
    assert_eq!(s2.player.slide_timer, 0.5);
}

#[test]
fn slide_while_airborne_is_noop() {
    let s = jump(&make_state(), &pcfg());
    let s2 = slide(&s, &pcfg());
    assert_eq!(s2.player, s.player);
}

#[test]
fn slide_while_sliding_does_not_restart_timer() {
    let mut s = slide(&make_state(), &pcfg());
    s.player.slide_timer = 0.2;
    let s2 = slide(&s, &pcfg());
    assert_eq!(s2.player.slide_timer, 0.2);
}

#[test]
fn slide_decays_linearly_to_zero() {
    let cfg = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = slide(&make_state(), &cfg.player);
    // 0.125 steps are exact in binary, so the countdown lands on zero.
    for expected in [0.375, 0.25, 0.125] {
        s = tick(&s, 0.125, &cfg, &mut rng);
        assert!(s.player.sliding);
        assert_eq!(s.player.slide_timer, expected);
    }
    s = tick(&s, 0.125, &cfg, &mut rng);
    assert!(!s.player.sliding);
    assert_eq!(s.player.slide_timer, 0.0);
}

// ── integrate ─────────────────────────────────────────────────────────────────

#[test]
fn gravity_only_while_airborne() {
    let cfg = pcfg();
    let mut p = spawn_player(&cfg, 320.0);
    integrate(&mut p, 0.1, 320.0, &cfg);
    assert_eq!(p.y, 320.0);
    assert_eq!(p.vy, 0.0);
    assert!(p.grounded);
}

#[test]
fn airborne_step_applies_gravity_then_velocity() {
    let cfg = pcfg();
    let mut p = spawn_player(&cfg, 320.0);
    p.grounded = false;
    p.vy = -680.0;
    integrate(&mut p, 0.01, 320.0, &cfg);
    // vy = -680 + 19 = -661; y = 320 - 6.61
    assert!((p.vy + 661.0).abs() < 1e-9);
    assert!((p.y - 313.39).abs() < 1e-9);
    assert!(!p.grounded);
}

#[test]
fn landing_snaps_to_baseline() {
    let cfg = pcfg();
    let mut p = spawn_player(&cfg, 320.0);
    p.grounded = false;
    p.y = 318.0;
    p.vy = 500.0;
    integrate(&mut p, 0.02, 320.0, &cfg);
    assert_eq!(p.y, 320.0);
    assert_eq!(p.vy, 0.0);
    assert!(p.grounded);
}

#[test]
fn full_jump_returns_to_ground() {
    let cfg = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = jump(&make_state(), &cfg.player);
    let mut peak = s.player.y;
    for _ in 0..120 {
        s = tick(&s, 1.0 / 60.0, &cfg, &mut rng);
        peak = peak.min(s.player.y);
        assert!(s.player.y <= s.ground_y);
    }
    assert!(s.player.grounded);
    assert_eq!(s.player.y, s.ground_y);
    // v² / 2g ≈ 121.7 px of clearance
    assert!(s.ground_y - peak > 100.0);
}

// ── collision box ─────────────────────────────────────────────────────────────

#[test]
fn standing_box_hangs_from_baseline() {
    let cfg = pcfg();
    let p = spawn_player(&cfg, 320.0);
    let b = collision_box(&p, &cfg);
    assert_eq!((b.x, b.y, b.width, b.height), (120.0, 256.0, 44.0, 64.0));
}

#[test]
fn sliding_box_is_shorter_with_same_bottom() {
    let cfg = pcfg();
    let mut p = spawn_player(&cfg, 320.0);
    p.sliding = true;
    let b = collision_box(&p, &cfg);
    assert!((b.height - 38.4).abs() < 1e-9);
    assert!((b.bottom() - 320.0).abs() < 1e-9);
    assert_eq!(current_height(&p, &cfg), b.height);
}
