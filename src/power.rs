//! The single active power-up slot.
//!
//! Inactive → Active(kind, expires_at) → Inactive. A new pickup overwrites
//! whatever is active; durations never stack. Time is the session clock.

use tracing::debug;

use crate::config::PowerConfig;
use crate::entities::{ActivePower, GameState, PowerKind};

pub fn duration_of(kind: PowerKind, cfg: &PowerConfig) -> f64 {
    match kind {
        PowerKind::Shield => cfg.shield_duration,
        PowerKind::SlowMo => cfg.slowmo_duration,
    }
}

/// Put `kind` in the slot, replacing any current power, and apply its effect.
pub fn activate(state: &mut GameState, kind: PowerKind, cfg: &PowerConfig) {
    let duration = duration_of(kind, cfg);
    debug!(?kind, duration, at = state.elapsed, "power-up activated");
    state.active_power = Some(ActivePower {
        kind,
        duration,
        expires_at: state.elapsed + duration,
    });
    state.world_multiplier = multiplier_for(state, cfg);
}

/// Clear an expired power and re-derive the world multiplier.
pub fn refresh(state: &mut GameState, cfg: &PowerConfig) {
    let expired = state
        .active_power
        .as_ref()
        .map_or(false, |p| state.elapsed >= p.expires_at);
    if expired {
        debug!(at = state.elapsed, "power-up expired");
        state.active_power = None;
    }
    state.world_multiplier = multiplier_for(state, cfg);
}

pub fn multiplier_for(state: &GameState, cfg: &PowerConfig) -> f64 {
    match active_kind(state) {
        Some(PowerKind::SlowMo) => cfg.slowmo_multiplier,
        _ => 1.0,
    }
}

pub fn is_invulnerable(state: &GameState) -> bool {
    active_kind(state) == Some(PowerKind::Shield)
}

/// Kind of the power that is live right now; an unexpired slot only.
pub fn active_kind(state: &GameState) -> Option<PowerKind> {
    state
        .active_power
        .as_ref()
        .filter(|p| state.elapsed < p.expires_at)
        .map(|p| p.kind)
}

/// Seconds left on the active power, never negative.
pub fn remaining(state: &GameState) -> Option<f64> {
    state
        .active_power
        .as_ref()
        .map(|p| (p.expires_at - state.elapsed).max(0.0))
}
