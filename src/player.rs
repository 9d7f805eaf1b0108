//! Runner body: intents, vertical physics and the collision box.

use crate::collision::Rect;
use crate::config::PlayerConfig;
use crate::entities::{Cue, GameState, Player};

/// Fresh runner standing on `ground_y`.
pub fn spawn_player(cfg: &PlayerConfig, ground_y: f64) -> Player {
    Player {
        x: cfg.x,
        y: ground_y,
        vy: 0.0,
        width: cfg.width,
        height: cfg.height,
        grounded: true,
        sliding: false,
        slide_timer: 0.0,
    }
}

// ── Intents (pure) ───────────────────────────────────────────────────────────

/// Jump if grounded and not sliding; otherwise the state is returned unchanged.
pub fn jump(state: &GameState, cfg: &PlayerConfig) -> GameState {
    let p = &state.player;
    if !state.is_running() || !p.grounded || p.sliding {
        return state.clone();
    }
    let mut cues = state.cues.clone();
    cues.push(Cue::Jump);
    GameState {
        player: Player {
            vy: cfg.jump_velocity,
            grounded: false,
            ..p.clone()
        },
        cues,
        ..state.clone()
    }
}

/// Start a slide if grounded and not already sliding.
pub fn slide(state: &GameState, cfg: &PlayerConfig) -> GameState {
    let p = &state.player;
    if !state.is_running() || !p.grounded || p.sliding {
        return state.clone();
    }
    GameState {
        player: Player {
            sliding: true,
            slide_timer: cfg.slide_duration,
            ..p.clone()
        },
        ..state.clone()
    }
}

// ── Physics ──────────────────────────────────────────────────────────────────

/// Advance gravity and the slide countdown by `dt` seconds.
pub fn integrate(player: &mut Player, dt: f64, ground_y: f64, cfg: &PlayerConfig) {
    if !player.grounded {
        player.vy += cfg.gravity * dt;
        player.y += player.vy * dt;
        if player.y >= ground_y {
            player.y = ground_y;
            player.vy = 0.0;
            player.grounded = true;
        }
    }

    if player.sliding {
        player.slide_timer -= dt;
        if player.slide_timer <= 0.0 {
            player.sliding = false;
            player.slide_timer = 0.0;
        }
    }
}

/// Height of the hit box: shortened while sliding.
pub fn current_height(player: &Player, cfg: &PlayerConfig) -> f64 {
    if player.sliding {
        player.height * cfg.slide_height_factor
    } else {
        player.height
    }
}

/// Hit box hanging up from the foot baseline.
pub fn collision_box(player: &Player, cfg: &PlayerConfig) -> Rect {
    let h = current_height(player, cfg);
    Rect::new(player.x, player.y - h, player.width, h)
}
