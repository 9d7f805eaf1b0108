//! All game entity types. Pure data, no logic.

use crate::collision::Rect;
use crate::spawn::Spawner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerKind {
    /// Obstacle and drone hits are harmless while active ("VPN").
    Shield,
    /// World speed is scaled down while active ("SPEEDHACK").
    SlowMo,
}

impl PowerKind {
    pub fn label(&self) -> &'static str {
        match self {
            PowerKind::Shield => "VPN",
            PowerKind::SlowMo => "SPEEDHACK",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// Ground-based firewall; jump over it.
    Obstacle,
    /// Floating drone; slide under it. Moves a little faster than the scroll.
    Drone,
    /// Collectible data packet.
    Packet,
    PowerUp(PowerKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Fire-and-forget sound cues raised by a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Jump,
    Collect,
    PowerUp,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    /// Foot baseline; grows downward like the screen.
    pub y: f64,
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    pub grounded: bool,
    pub sliding: bool,
    /// Seconds of slide left.
    pub slide_timer: f64,
}

// ── Scrolling entities ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal speed captured at spawn time (pixels per second).
    pub speed: f64,
    pub kind: EntityKind,
}

impl Entity {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Power slot ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ActivePower {
    pub kind: PowerKind,
    /// Total duration in seconds, kept for the countdown bar.
    pub duration: f64,
    /// Absolute expiry on the session clock.
    pub expires_at: f64,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one session owns. Cloneable so the step functions can return a
/// fresh copy without mutating the caller's state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Entity>,
    pub drones: Vec<Entity>,
    pub packets: Vec<Entity>,
    pub powerups: Vec<Entity>,
    /// Base scroll speed; ramps up forever.
    pub scroll_speed: f64,
    /// 1.0 normally, reduced while SlowMo is active.
    pub world_multiplier: f64,
    pub distance: f64,
    /// Collected packets.
    pub packets_collected: u32,
    /// Session clock in simulated seconds.
    pub elapsed: f64,
    pub spawner: Spawner,
    pub active_power: Option<ActivePower>,
    pub status: GameStatus,
    /// Cues raised since the front end last drained them.
    pub cues: Vec<Cue>,
    /// Logical resolution of the play field.
    pub width: f64,
    pub height: f64,
    /// Ground line; the player's baseline while grounded.
    pub ground_y: f64,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
