use std::fs;
use std::io::BufWriter;

use hacker_runner::assets::*;
use hacker_runner::audio::*;
use hacker_runner::compute::init_state;
use hacker_runner::config::GameConfig;
use hacker_runner::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(EntityKind::Obstacle, EntityKind::Obstacle);
    assert_ne!(EntityKind::Obstacle, EntityKind::Drone);
    assert_ne!(
        EntityKind::PowerUp(PowerKind::Shield),
        EntityKind::PowerUp(PowerKind::SlowMo)
    );
    assert_ne!(GameStatus::Running, GameStatus::GameOver);

    let kind = EntityKind::Packet;
    assert_eq!(kind.clone(), EntityKind::Packet);
}

#[test]
fn entity_rect_matches_fields() {
    let e = Entity {
        x: 10.0,
        y: 20.0,
        width: 30.0,
        height: 40.0,
        speed: 100.0,
        kind: EntityKind::Packet,
    };
    let r = e.rect();
    assert_eq!((r.x, r.y, r.right(), r.bottom()), (10.0, 20.0, 40.0, 60.0));
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(&GameConfig::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.y = 0.0;
    cloned.distance = 999.0;
    cloned.obstacles.push(Entity {
        x: 5.0,
        y: 5.0,
        width: 1.0,
        height: 1.0,
        speed: 0.0,
        kind: EntityKind::Obstacle,
    });

    assert_eq!(original.player.y, original.ground_y);
    assert_eq!(original.distance, 0.0);
    assert!(original.obstacles.is_empty());
}

// ── Assets ────────────────────────────────────────────────────────────────────

#[test]
fn sprite_ids_follow_entity_kinds() {
    assert_eq!(SpriteId::for_kind(EntityKind::Obstacle), SpriteId::Firewall);
    assert_eq!(SpriteId::for_kind(EntityKind::Drone), SpriteId::Drone);
    assert_eq!(SpriteId::for_kind(EntityKind::Packet), SpriteId::Packet);
    assert_eq!(SpriteId::for_kind(EntityKind::PowerUp(PowerKind::Shield)), SpriteId::Vpn);
    assert_eq!(
        SpriteId::for_kind(EntityKind::PowerUp(PowerKind::SlowMo)),
        SpriteId::Speedhack
    );
}

#[test]
fn empty_assets_are_never_ready() {
    let assets = Assets::empty();
    for id in SpriteId::ALL {
        assert!(!assets.is_ready(id));
        assert!(assets.sprite(id).is_none());
    }
}

#[test]
fn load_dir_picks_up_present_sprites_only() {
    let dir = std::env::temp_dir().join(format!("hacker_runner_assets_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("hacker.txt"), " o \n/|\\\n/ \\\n").unwrap();
    fs::write(dir.join("drone.txt"), "   \n").unwrap(); // blank: treated as missing

    let assets = Assets::load_dir(&dir);
    assert!(assets.is_ready(SpriteId::Runner));
    assert_eq!(assets.sprite(SpriteId::Runner).unwrap().rows.len(), 3);
    assert!(!assets.is_ready(SpriteId::Drone));
    assert!(!assets.is_ready(SpriteId::Firewall));

    let _ = fs::remove_dir_all(&dir);
}

// ── Audio ─────────────────────────────────────────────────────────────────────

#[test]
fn drain_plays_in_order_and_clears() {
    let mut cues = vec![Cue::Jump, Cue::Collect, Cue::GameOver];
    let mut rec = Recorder::default();
    drain_cues(&mut cues, &mut rec);
    assert!(cues.is_empty());
    assert_eq!(rec.played, vec![Cue::Jump, Cue::Collect, Cue::GameOver]);
}

#[test]
fn bell_skips_collect_cues() {
    let mut out = Vec::new();
    let mut bell = TerminalBell::new(&mut out);
    let mut cues = vec![Cue::Collect, Cue::PowerUp];
    drain_cues(&mut cues, &mut bell);
    // one bell for the power-up, none for the packet
    assert_eq!(out, b"\x07");
}

#[test]
fn bell_stays_in_the_frame_buffer_until_flush() {
    let mut frame = BufWriter::new(Vec::new());
    let mut cues = vec![Cue::Jump];
    drain_cues(&mut cues, &mut TerminalBell::new(&mut frame));
    assert_eq!(frame.buffer(), b"\x07");
    assert!(frame.get_ref().is_empty());
}

#[test]
fn silent_sink_accepts_everything() {
    let mut sink = Silent;
    let mut cues = vec![Cue::Jump, Cue::GameOver];
    drain_cues(&mut cues, &mut sink);
    assert!(cues.is_empty());
}
