//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`. Side effects are limited to the injected RNG.

use rand::Rng;

use crate::collision;
use crate::config::{GameConfig, WorldConfig};
use crate::entities::{Entity, GameState, GameStatus};
use crate::player::{self, spawn_player};
use crate::power;
use crate::spawn::{self, Spawner};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state of a brand-new session.
pub fn init_state(cfg: &GameConfig) -> GameState {
    let ground_y = cfg.world.height - cfg.world.ground_offset;
    GameState {
        player: spawn_player(&cfg.player, ground_y),
        obstacles: Vec::new(),
        drones: Vec::new(),
        packets: Vec::new(),
        powerups: Vec::new(),
        scroll_speed: cfg.world.base_speed,
        world_multiplier: 1.0,
        distance: 0.0,
        packets_collected: 0,
        elapsed: 0.0,
        spawner: Spawner::new(&cfg.spawn),
        active_power: None,
        status: GameStatus::Running,
        cues: Vec::new(),
        width: cfg.world.width,
        height: cfg.world.height,
        ground_y,
    }
}

// ── Per-frame tick (nearly pure; RNG is injected) ────────────────────────────

/// Advance the simulation by `dt` seconds. All randomness comes through `rng`
/// so callers control determinism (tests use a seeded RNG).
///
/// A session that is not running is returned unchanged. Negative deltas are
/// treated as zero.
pub fn tick(state: &GameState, dt: f64, cfg: &GameConfig, rng: &mut impl Rng) -> GameState {
    if !state.is_running() {
        return state.clone();
    }
    let dt = dt.max(0.0);
    let mut next = state.clone();

    // ── 1. Session clock & power expiry ──────────────────────────────────────
    next.elapsed += dt;
    power::refresh(&mut next, &cfg.power);

    // ── 2. Scroll & distance ─────────────────────────────────────────────────
    scroll(&mut next, dt, &cfg.world);

    // ── 3. Spawns ────────────────────────────────────────────────────────────
    spawn::advance(&mut next, dt, &cfg.spawn, rng);

    // ── 4. Player physics ────────────────────────────────────────────────────
    let ground_y = next.ground_y;
    player::integrate(&mut next.player, dt, ground_y, &cfg.player);

    // ── 5. Move & cull entities ──────────────────────────────────────────────
    move_entities(&mut next, dt, &cfg.world);

    // ── 6. Collisions ────────────────────────────────────────────────────────
    collision::resolve(&mut next, cfg);

    next
}

/// Ramp the scroll speed and accumulate distance.
///
/// Distance uses the average speed over the step, which is exact for the
/// linear ramp.
fn scroll(state: &mut GameState, dt: f64, world: &WorldConfig) {
    let before = state.scroll_speed;
    state.scroll_speed += world.speed_ramp * dt;
    let average = (before + state.scroll_speed) * 0.5;
    state.distance += average * state.world_multiplier * dt * world.distance_scale;
}

/// Entities travel at the speed stamped on them at spawn; the world
/// multiplier never touches them.
fn move_entities(state: &mut GameState, dt: f64, world: &WorldConfig) {
    let step = |list: &mut Vec<Entity>| {
        for e in list.iter_mut() {
            e.x -= e.speed * dt * spawn::speed_factor(e.kind, world);
        }
        list.retain(|e| e.x + e.width >= -world.cull_margin);
    };
    step(&mut state.obstacles);
    step(&mut state.drones);
    step(&mut state.packets);
    step(&mut state.powerups);
}

/// Distance the runner would cover over `seconds` of uninterrupted play at
/// full world speed.
pub fn projected_distance(seconds: f64, world: &WorldConfig) -> f64 {
    world.distance_scale * (world.base_speed * seconds + world.speed_ramp * seconds * seconds * 0.5)
}
