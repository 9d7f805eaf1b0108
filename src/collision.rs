//! Axis-aligned box tests and the per-tick collision pass.

use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{Cue, Entity, EntityKind, GameState, GameStatus};
use crate::player::collision_box;
use crate::power;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True unless one of the four separating-axis conditions holds.
    /// Boxes that merely touch count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }
}

/// Run the collision pass against the already-moved world.
///
/// Order: packets, power-ups, then obstacles and drones. A fatal hit stops the
/// pass and flips the session to `GameOver`.
pub fn resolve(state: &mut GameState, cfg: &GameConfig) {
    let player = collision_box(&state.player, &cfg.player);

    // ── Packets ──────────────────────────────────────────────────────────────
    let before = state.packets.len();
    state.packets.retain(|p| !player.overlaps(&p.rect()));
    let collected = (before - state.packets.len()) as u32;
    if collected > 0 {
        state.packets_collected += collected;
        for _ in 0..collected {
            state.cues.push(Cue::Collect);
        }
    }

    // ── Power-ups ────────────────────────────────────────────────────────────
    let mut picked = Vec::new();
    state.powerups.retain(|p| {
        if player.overlaps(&p.rect()) {
            picked.push(p.kind);
            false
        } else {
            true
        }
    });
    for kind in picked {
        if let EntityKind::PowerUp(power_kind) = kind {
            power::activate(state, power_kind, &cfg.power);
            state.cues.push(Cue::PowerUp);
        }
    }

    // ── Hazards ──────────────────────────────────────────────────────────────
    let shielded = power::is_invulnerable(state);
    if !shielded {
        let hit = state
            .obstacles
            .iter()
            .chain(state.drones.iter())
            .any(|e| player.overlaps(&e.rect()));
        if hit {
            debug!(distance = state.distance, "runner hit a hazard");
            state.status = GameStatus::GameOver;
            state.cues.push(Cue::GameOver);
        }
        return;
    }

    let shield_hits = |list: &mut Vec<Entity>| list.retain(|e| !player.overlaps(&e.rect()));
    shield_hits(&mut state.obstacles);
    shield_hits(&mut state.drones);
}
