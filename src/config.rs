//! Tuning knobs. Every section deserializes from TOML with per-field defaults,
//! so a config file only needs the values it overrides.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, RunnerError};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}

impl SpawnRange<f64> {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Logical play-field resolution.
    pub width: f64,
    pub height: f64,
    /// Distance from the bottom edge to the ground line.
    pub ground_offset: f64,
    pub base_speed: f64,
    /// Scroll speed gained per second of play.
    pub speed_ramp: f64,
    pub distance_scale: f64,
    /// Entities are dropped once their right edge is this far left of the screen.
    pub cull_margin: f64,
    pub drone_speed_factor: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 400.0,
            ground_offset: 80.0,
            base_speed: 320.0,
            speed_ramp: 3.5,
            distance_scale: 0.1,
            cull_margin: 80.0,
            drone_speed_factor: 1.05,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub gravity: f64,
    /// Upward impulse; negative because y grows downward.
    pub jump_velocity: f64,
    pub slide_duration: f64,
    /// Fraction of the standing height kept while sliding.
    pub slide_height_factor: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: 120.0,
            width: 44.0,
            height: 64.0,
            gravity: 1900.0,
            jump_velocity: -680.0,
            slide_duration: 0.5,
            slide_height_factor: 0.6,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub initial_interval: f64,
    /// Raw random interval before the time-based tightening.
    pub jitter: SpawnRange<f64>,
    /// Seconds shaved off per second of play...
    pub tighten_rate: f64,
    /// ...up to this much.
    pub max_tighten: f64,
    /// Final clamp on the interval.
    pub interval: SpawnRange<f64>,
    pub drone_chance: f64,
    pub packet_chance: f64,
    pub powerup_chance: f64,

    pub obstacle_width: SpawnRange<f64>,
    pub obstacle_height: SpawnRange<f64>,
    pub obstacle_margin: f64,

    pub drone_width: f64,
    pub drone_height: f64,
    pub drone_margin: f64,
    pub drone_speed_bonus: f64,
    /// Height of the drone's top edge above the ground line.
    pub drone_band: SpawnRange<f64>,

    pub packet_size: f64,
    pub packet_margin: f64,
    pub packet_band: SpawnRange<f64>,

    pub powerup_size: f64,
    pub powerup_margin: f64,
    pub powerup_band: SpawnRange<f64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_interval: 1.0,
            jitter: SpawnRange::new(0.7, 1.4),
            tighten_rate: 0.0015,
            max_tighten: 0.5,
            interval: SpawnRange::new(0.6, 1.4),
            drone_chance: 0.25,
            packet_chance: 0.4,
            powerup_chance: 0.08,

            obstacle_width: SpawnRange::new(38.0, 66.0),
            obstacle_height: SpawnRange::new(36.0, 72.0),
            obstacle_margin: 40.0,

            drone_width: 64.0,
            drone_height: 36.0,
            drone_margin: 60.0,
            drone_speed_bonus: 80.0,
            // Low enough to hit a standing runner, high enough to clear a sliding one.
            drone_band: SpawnRange::new(84.0, 96.0),

            packet_size: 30.0,
            packet_margin: 40.0,
            packet_band: SpawnRange::new(50.0, 130.0),

            powerup_size: 36.0,
            powerup_margin: 40.0,
            powerup_band: SpawnRange::new(60.0, 140.0),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PowerConfig {
    pub shield_duration: f64,
    pub slowmo_duration: f64,
    pub slowmo_multiplier: f64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            shield_duration: 4.0,
            slowmo_duration: 3.5,
            slowmo_multiplier: 0.45,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoreConfig {
    pub packet_bonus: u32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self { packet_bonus: 50 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Largest simulation step in seconds.
    pub max_step: f64,
    /// Target frame period in milliseconds.
    pub frame_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            max_step: 0.033,
            frame_ms: 16,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Downward drag, in terminal rows, that turns a press into a slide.
    pub swipe_threshold: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { swipe_threshold: 2 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub spawn: SpawnConfig,
    pub power: PowerConfig,
    pub score: ScoreConfig,
    pub clock: ClockConfig,
    pub input: InputConfig,
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|err| match err {
            RunnerError::ConfigParse { source, .. } => RunnerError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: GameConfig = toml::from_str(text).map_err(|source| RunnerError::ConfigParse {
            path: Default::default(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load `path` if given, falling back to defaults when it is missing or bad.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("using default config: {err}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.check_finite()?;

        let w = &self.world;
        if w.width <= 0.0 || w.height <= 0.0 {
            return Err(invalid("world resolution must be positive"));
        }
        if w.ground_offset < 0.0 || w.ground_offset >= w.height {
            return Err(invalid("ground_offset must lie inside the play field"));
        }
        if w.base_speed < 0.0 || w.speed_ramp < 0.0 || w.distance_scale < 0.0 {
            return Err(invalid("speeds and scales must be non-negative"));
        }

        let p = &self.player;
        if p.width <= 0.0 || p.height <= 0.0 || p.slide_duration <= 0.0 {
            return Err(invalid("player size and slide duration must be positive"));
        }
        if !(0.0..=1.0).contains(&p.slide_height_factor) {
            return Err(invalid("slide_height_factor must be within [0, 1]"));
        }
        if p.gravity <= 0.0 || p.jump_velocity >= 0.0 {
            return Err(invalid("gravity must be positive and jump_velocity negative"));
        }

        let s = &self.spawn;
        let ranges = [
            ("jitter", s.jitter),
            ("interval", s.interval),
            ("obstacle_width", s.obstacle_width),
            ("obstacle_height", s.obstacle_height),
            ("drone_band", s.drone_band),
            ("packet_band", s.packet_band),
            ("powerup_band", s.powerup_band),
        ];
        for (name, range) in ranges {
            if !range.is_ordered() {
                return Err(invalid(&format!("{name}: min exceeds max")));
            }
        }
        if s.interval.min <= 0.0 || s.initial_interval <= 0.0 {
            return Err(invalid("spawn intervals must be positive"));
        }
        for (name, chance) in [
            ("drone_chance", s.drone_chance),
            ("packet_chance", s.packet_chance),
            ("powerup_chance", s.powerup_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(invalid(&format!("{name} must be within [0, 1]")));
            }
        }

        let pw = &self.power;
        if pw.shield_duration <= 0.0 || pw.slowmo_duration <= 0.0 {
            return Err(invalid("power-up durations must be positive"));
        }
        if !(0.0..=1.0).contains(&pw.slowmo_multiplier) {
            return Err(invalid("slowmo_multiplier must be within [0, 1]"));
        }

        if self.clock.max_step <= 0.0 {
            return Err(invalid("max_step must be positive"));
        }
        Ok(())
    }
}

impl GameConfig {
    /// NaN and infinities slip past every ordered comparison, so they are
    /// rejected up front.
    fn check_finite(&self) -> Result<()> {
        let (w, p, s, pw) = (&self.world, &self.player, &self.spawn, &self.power);
        let scalars = [
            ("world.width", w.width),
            ("world.height", w.height),
            ("world.ground_offset", w.ground_offset),
            ("world.base_speed", w.base_speed),
            ("world.speed_ramp", w.speed_ramp),
            ("world.distance_scale", w.distance_scale),
            ("world.cull_margin", w.cull_margin),
            ("world.drone_speed_factor", w.drone_speed_factor),
            ("player.x", p.x),
            ("player.width", p.width),
            ("player.height", p.height),
            ("player.gravity", p.gravity),
            ("player.jump_velocity", p.jump_velocity),
            ("player.slide_duration", p.slide_duration),
            ("player.slide_height_factor", p.slide_height_factor),
            ("spawn.initial_interval", s.initial_interval),
            ("spawn.tighten_rate", s.tighten_rate),
            ("spawn.max_tighten", s.max_tighten),
            ("spawn.drone_chance", s.drone_chance),
            ("spawn.packet_chance", s.packet_chance),
            ("spawn.powerup_chance", s.powerup_chance),
            ("spawn.obstacle_margin", s.obstacle_margin),
            ("spawn.drone_width", s.drone_width),
            ("spawn.drone_height", s.drone_height),
            ("spawn.drone_margin", s.drone_margin),
            ("spawn.drone_speed_bonus", s.drone_speed_bonus),
            ("spawn.packet_size", s.packet_size),
            ("spawn.packet_margin", s.packet_margin),
            ("spawn.powerup_size", s.powerup_size),
            ("spawn.powerup_margin", s.powerup_margin),
            ("power.shield_duration", pw.shield_duration),
            ("power.slowmo_duration", pw.slowmo_duration),
            ("power.slowmo_multiplier", pw.slowmo_multiplier),
            ("clock.max_step", self.clock.max_step),
        ];
        let ranges = [
            ("spawn.jitter", s.jitter),
            ("spawn.interval", s.interval),
            ("spawn.obstacle_width", s.obstacle_width),
            ("spawn.obstacle_height", s.obstacle_height),
            ("spawn.drone_band", s.drone_band),
            ("spawn.packet_band", s.packet_band),
            ("spawn.powerup_band", s.powerup_band),
        ];
        let bounds = ranges.iter().flat_map(|&(name, r)| [(name, r.min), (name, r.max)]);
        for (name, value) in scalars.into_iter().chain(bounds) {
            if !value.is_finite() {
                return Err(invalid(&format!("{name} must be a finite number")));
            }
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> RunnerError {
    RunnerError::ConfigInvalid(msg.to_string())
}
