//! Session score, HUD snapshot and best-score persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::entities::{GameState, PowerKind};
use crate::error::Result;
use crate::power;

/// `floor(distance) + packets * bonus`, saturating at `u32::MAX`.
pub fn session_score(state: &GameState, cfg: &GameConfig) -> u32 {
    let bonus = state.packets_collected.saturating_mul(cfg.score.packet_bonus);
    distance_score(state).saturating_add(bonus)
}

pub fn distance_score(state: &GameState) -> u32 {
    state.distance.max(0.0).floor() as u32
}

// ── HUD ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PowerReadout {
    pub kind: PowerKind,
    /// Whole seconds left, rounded up.
    pub seconds_left: u32,
    /// Remaining share of the full duration, in [0, 1].
    pub fraction: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudSnapshot {
    pub score: u32,
    pub packets: u32,
    pub power: Option<PowerReadout>,
}

pub fn hud(state: &GameState) -> HudSnapshot {
    let power = state.active_power.as_ref().and_then(|active| {
        let left = power::remaining(state)?;
        Some(PowerReadout {
            kind: active.kind,
            seconds_left: left.ceil() as u32,
            fraction: if active.duration > 0.0 {
                (left / active.duration).clamp(0.0, 1.0)
            } else {
                0.0
            },
        })
    });
    HudSnapshot {
        score: distance_score(state),
        packets: state.packets_collected,
        power,
    }
}

// ── Persistence ──────────────────────────────────────────────────────────────

/// Durable best-score storage. Implementations swallow their own failures so
/// nothing ever reaches the simulation.
pub trait ScoreStore {
    /// Stored best, or 0 when absent or unreadable.
    fn load(&self) -> u32;
    fn save(&mut self, best: u32);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    pub best: Option<u32>,
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.best.unwrap_or(0)
    }

    fn save(&mut self, best: u32) {
        self.best = Some(best);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
struct ScoreRecord {
    best: u32,
}

/// Best score kept as a small JSON document on disk.
#[derive(Clone, Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `<data dir>/hacker_runner/highscore.json`, or the working directory
    /// when the platform has no data dir.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hacker_runner")
            .join("highscore.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record: ScoreRecord = serde_json::from_str(&text)?;
        Ok(Some(record.best))
    }

    pub fn try_save(&self, best: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&ScoreRecord { best })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> u32 {
        match self.try_load() {
            Ok(best) => best.unwrap_or(0),
            Err(err) => {
                warn!(path = %self.path.display(), "could not read best score: {err}");
                0
            }
        }
    }

    fn save(&mut self, best: u32) {
        if let Err(err) = self.try_save(best) {
            warn!(path = %self.path.display(), "could not write best score: {err}");
        }
    }
}

// ── Session end ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct SessionResult {
    pub score: u32,
    pub best: u32,
    pub new_best: bool,
}

/// Fold the finished session into the persisted best score.
pub fn finish_session(
    state: &GameState,
    store: &mut impl ScoreStore,
    cfg: &GameConfig,
) -> SessionResult {
    let score = session_score(state, cfg);
    let previous = store.load();
    let best = previous.max(score);
    store.save(best);
    info!(score, best, packets = state.packets_collected, "session finished");
    SessionResult {
        score,
        best,
        new_best: score > previous,
    }
}
