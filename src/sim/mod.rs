//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` call advances exactly one frame (constants are per-frame)
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod world;

pub use state::{
    Asteroid, Crystal, GameEvent, GamePhase, GameState, Particle, ParticleKind, Player, Star,
};
pub use tick::{FrameInput, tick};
