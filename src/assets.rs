//! Optional text sprites. The renderer asks whether a sprite is ready and
//! draws a placeholder block when it is not.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::entities::{EntityKind, PowerKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Runner,
    Firewall,
    Drone,
    Packet,
    Vpn,
    Speedhack,
}

impl SpriteId {
    pub const ALL: [SpriteId; 6] = [
        SpriteId::Runner,
        SpriteId::Firewall,
        SpriteId::Drone,
        SpriteId::Packet,
        SpriteId::Vpn,
        SpriteId::Speedhack,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteId::Runner => "hacker.txt",
            SpriteId::Firewall => "firewall.txt",
            SpriteId::Drone => "drone.txt",
            SpriteId::Packet => "datapacket.txt",
            SpriteId::Vpn => "vpn.txt",
            SpriteId::Speedhack => "speedhack.txt",
        }
    }

    pub fn for_kind(kind: EntityKind) -> SpriteId {
        match kind {
            EntityKind::Obstacle => SpriteId::Firewall,
            EntityKind::Drone => SpriteId::Drone,
            EntityKind::Packet => SpriteId::Packet,
            EntityKind::PowerUp(PowerKind::Shield) => SpriteId::Vpn,
            EntityKind::PowerUp(PowerKind::SlowMo) => SpriteId::Speedhack,
        }
    }
}

/// Rows of characters; blank cells are transparent.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub rows: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Assets {
    sprites: HashMap<SpriteId, Sprite>,
}

impl Assets {
    /// No sprites at all; everything renders as placeholders.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load whatever sprites exist under `dir`. Missing or empty files are
    /// skipped, never fatal.
    pub fn load_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut assets = Self::empty();
        for id in SpriteId::ALL {
            let path = dir.join(id.file_name());
            match fs::read_to_string(&path) {
                Ok(text) => {
                    let rows: Vec<String> = text.lines().map(str::to_owned).collect();
                    if rows.iter().any(|r| !r.trim().is_empty()) {
                        assets.insert(id, Sprite { rows });
                    }
                }
                Err(err) => debug!(path = %path.display(), "sprite unavailable: {err}"),
            }
        }
        assets
    }

    pub fn insert(&mut self, id: SpriteId, sprite: Sprite) {
        self.sprites.insert(id, sprite);
    }

    pub fn is_ready(&self, id: SpriteId) -> bool {
        self.sprites.contains_key(&id)
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(&id)
    }
}
