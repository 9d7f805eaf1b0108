//! Timer-driven spawner. Each spawn event produces one obstacle-class entity
//! and independently rolls for a packet and for a power-up.

use rand::Rng;

use crate::config::{SpawnConfig, SpawnRange, WorldConfig};
use crate::entities::{Entity, EntityKind, GameState, PowerKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Spawner {
    /// Seconds until the next spawn event.
    pub countdown: f64,
}

impl Spawner {
    pub fn new(cfg: &SpawnConfig) -> Self {
        Self {
            countdown: cfg.initial_interval,
        }
    }
}

fn roll(rng: &mut impl Rng, range: SpawnRange<f64>) -> f64 {
    rng.gen_range(range.min..=range.max)
}

/// Next interval: jittered, tightened by elapsed play time, then clamped.
pub fn next_interval(elapsed: f64, cfg: &SpawnConfig, rng: &mut impl Rng) -> f64 {
    let tighten = (elapsed * cfg.tighten_rate).min(cfg.max_tighten);
    (roll(rng, cfg.jitter) - tighten).clamp(cfg.interval.min, cfg.interval.max)
}

/// Count down by `dt` and spawn when the timer runs out.
pub fn advance(state: &mut GameState, dt: f64, cfg: &SpawnConfig, rng: &mut impl Rng) {
    state.spawner.countdown -= dt;
    if state.spawner.countdown > 0.0 {
        return;
    }
    state.spawner.countdown = next_interval(state.elapsed, cfg, rng);

    if rng.gen_bool(cfg.drone_chance) {
        let drone = spawn_drone(state, cfg, rng);
        state.drones.push(drone);
    } else {
        let obstacle = spawn_obstacle(state, cfg, rng);
        state.obstacles.push(obstacle);
    }
    if rng.gen_bool(cfg.packet_chance) {
        let packet = spawn_packet(state, cfg, rng);
        state.packets.push(packet);
    }
    if rng.gen_bool(cfg.powerup_chance) {
        let powerup = spawn_powerup(state, cfg, rng);
        state.powerups.push(powerup);
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn spawn_obstacle(state: &GameState, cfg: &SpawnConfig, rng: &mut impl Rng) -> Entity {
    let width = roll(rng, cfg.obstacle_width);
    let height = roll(rng, cfg.obstacle_height);
    Entity {
        x: state.width + cfg.obstacle_margin,
        y: state.ground_y - height,
        width,
        height,
        speed: state.scroll_speed,
        kind: EntityKind::Obstacle,
    }
}

pub fn spawn_drone(state: &GameState, cfg: &SpawnConfig, rng: &mut impl Rng) -> Entity {
    Entity {
        x: state.width + cfg.drone_margin,
        y: state.ground_y - roll(rng, cfg.drone_band),
        width: cfg.drone_width,
        height: cfg.drone_height,
        speed: state.scroll_speed + cfg.drone_speed_bonus,
        kind: EntityKind::Drone,
    }
}

pub fn spawn_packet(state: &GameState, cfg: &SpawnConfig, rng: &mut impl Rng) -> Entity {
    Entity {
        x: state.width + cfg.packet_margin,
        y: state.ground_y - roll(rng, cfg.packet_band),
        width: cfg.packet_size,
        height: cfg.packet_size,
        speed: state.scroll_speed,
        kind: EntityKind::Packet,
    }
}

pub fn spawn_powerup(state: &GameState, cfg: &SpawnConfig, rng: &mut impl Rng) -> Entity {
    let kind = if rng.gen_bool(0.5) {
        PowerKind::Shield
    } else {
        PowerKind::SlowMo
    };
    Entity {
        x: state.width + cfg.powerup_margin,
        y: state.ground_y - roll(rng, cfg.powerup_band),
        width: cfg.powerup_size,
        height: cfg.powerup_size,
        speed: state.scroll_speed,
        kind: EntityKind::PowerUp(kind),
    }
}

/// Horizontal speed factor per kind; drones outrun the scroll a little.
pub fn speed_factor(kind: EntityKind, world: &WorldConfig) -> f64 {
    match kind {
        EntityKind::Drone => world.drone_speed_factor,
        _ => 1.0,
    }
}
