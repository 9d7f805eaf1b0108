//! Endless side-scrolling runner: jump firewalls, slide under drones, grab
//! data packets and power-ups. The simulation is pure and deterministic for a
//! given RNG; the binary adds a crossterm front end.

pub mod assets;
pub mod audio;
pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod player;
pub mod power;
pub mod score;
pub mod spawn;

pub use error::{Result, RunnerError};
