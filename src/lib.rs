//! Cosmic Drift - a toroidal arena arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `audio`: Web Audio oscillator tones (no-op off wasm)
//! - `render`: Canvas2D drawing of the world (wasm only)
//! - `ui`: DOM HUD and screen transitions (wasm only)
//! - `settings`: Player preferences persisted to LocalStorage

pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Player ship
    pub const PLAYER_SIZE: f32 = 15.0;
    pub const FUEL_MAX: f32 = 100.0;
    pub const THRUST_POWER: f32 = 0.3;
    pub const MAX_SPEED: f32 = 8.0;
    pub const FRICTION: f32 = 0.98;
    /// Radians of rotation per frame while a turn key is held
    pub const TURN_RATE: f32 = 0.1;
    /// Fuel drained per thrusting frame, scaled by the boost multiplier
    pub const THRUST_FUEL_DRAIN: f32 = 0.5;
    /// Passive fuel regeneration per frame when below FUEL_MAX
    pub const FUEL_REGEN: f32 = 0.1;
    /// Boost doubles thrust power and drain
    pub const BOOST_MULTIPLIER: f32 = 2.0;
    /// Boost only engages with more fuel than this
    pub const BOOST_MIN_FUEL: f32 = 5.0;

    /// Asteroids: size sampled uniformly from [MIN, MIN + RANGE)
    pub const ASTEROID_MIN_SIZE: f32 = 20.0;
    pub const ASTEROID_SIZE_RANGE: f32 = 30.0;
    /// Asteroids never spawn closer to the player than this
    pub const ASTEROID_PLAYER_CLEARANCE: f32 = 200.0;
    /// Drift velocity components sampled from (-MAX_DRIFT, MAX_DRIFT)
    pub const ASTEROID_MAX_DRIFT: f32 = 1.0;
    pub const ASTEROID_MAX_SPIN: f32 = 0.05;
    /// Polygon vertex count: MIN_VERTICES + [0, 4)
    pub const ASTEROID_MIN_VERTICES: u32 = 8;

    /// Crystals
    pub const CRYSTAL_SIZE: f32 = 12.0;
    pub const CRYSTAL_SPIN: f32 = 0.05;
    pub const CRYSTAL_PULSE_SPEED: f32 = 0.1;
    /// Crystals never spawn closer to the player than this
    pub const CRYSTAL_PLAYER_CLEARANCE: f32 = 150.0;
    /// Crystals keep this much clearance beyond each asteroid's size
    pub const CRYSTAL_ASTEROID_MARGIN: f32 = 50.0;
    /// Placement attempts before giving up (a silent no-spawn, not an error)
    pub const CRYSTAL_PLACEMENT_ATTEMPTS: u32 = 50;

    /// Star field (generated once per session)
    pub const STAR_COUNT: usize = 200;

    /// Economy
    pub const IMPACT_FUEL_COST: f32 = 10.0;
    pub const IMPACT_IMPULSE: f32 = 3.0;
    pub const CRYSTAL_FUEL_BONUS: f32 = 20.0;
    pub const CRYSTAL_SCORE_VALUE: u64 = 100;
    /// Level = score / LEVEL_SCORE_STEP + 1
    pub const LEVEL_SCORE_STEP: u64 = 1000;

    /// Spawn director: live-count targets and per-frame Bernoulli probabilities
    pub const INITIAL_ASTEROID_BASE: u32 = 5;
    pub const INITIAL_CRYSTAL_BASE: u32 = 3;
    pub const ASTEROID_TARGET_BASE: u32 = 3;
    pub const CRYSTAL_TARGET_BASE: u32 = 2;
    pub const ASTEROID_SPAWN_CHANCE: f32 = 0.01;
    pub const CRYSTAL_SPAWN_CHANCE: f32 = 0.005;

    /// Particles
    pub const PARTICLE_DRAG: f32 = 0.98;
    pub const THRUST_PARTICLE_DECAY: f32 = 0.05;
    pub const IMPACT_PARTICLE_DECAY: f32 = 0.03;
    pub const COLLECT_PARTICLE_DECAY: f32 = 0.02;
}

/// Wrap a coordinate onto [0, max) - toroidal boundary, exact wrap not clamp.
///
/// A coordinate exactly at `max` maps to 0; idempotent for in-range values.
#[inline]
pub fn wrap_coord(x: f32, max: f32) -> f32 {
    x.rem_euclid(max)
}

/// Wrap with a margin so large bodies slide fully off one edge before
/// reappearing at the other.
#[inline]
pub fn wrap_coord_with_margin(x: f32, max: f32, margin: f32) -> f32 {
    if x < -margin {
        max + margin
    } else if x > max + margin {
        -margin
    } else {
        x
    }
}
