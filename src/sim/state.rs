//! Game state and core simulation types
//!
//! One `GameState` owns the whole world: the player, every entity collection,
//! the session counters, and the seeded RNG. Nothing here touches a platform
//! API; collaborators observe the state through the drained event queue.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::world;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen, world idles behind it
    Start,
    /// Active gameplay
    Playing,
    /// Fuel ran out; simulation frozen
    GameOver,
}

/// Simulation events for the audio/UI collaborators, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ship scraped an asteroid (fires every overlapping frame - no cooldown)
    AsteroidImpact,
    /// Crystal collected
    CrystalCollected,
    /// Level threshold crossed (once per increase)
    LevelUp,
    /// Fuel hit zero
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing angle in radians
    pub angle: f32,
    /// Fuel in [0, FUEL_MAX]; may dip negative within a frame, the game-over
    /// check treats <= 0 as terminal
    pub fuel: f32,
    pub size: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            fuel: FUEL_MAX,
            size: PLAYER_SIZE,
        }
    }

    /// Current speed magnitude
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A drifting asteroid. Asteroids persist for the whole session - they wrap,
/// never despawn.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius-like scalar in [20, 50)
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Polygon outline, generated once at creation, immutable after
    pub vertices: Vec<Vec2>,
}

/// A collectible crystal. Translation-free; only spins and pulses.
#[derive(Debug, Clone)]
pub struct Crystal {
    pub pos: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Phase accumulator driving the visual pulse (not a physics quantity)
    pub pulse: f32,
    pub pulse_speed: f32,
}

impl Crystal {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: CRYSTAL_SIZE,
            rotation: 0.0,
            rotation_speed: CRYSTAL_SPIN,
            pulse: 0.0,
            pulse_speed: CRYSTAL_PULSE_SPEED,
        }
    }
}

/// Visual particle family, used by the renderer for color selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Engine exhaust (warm orange)
    Thrust,
    /// Asteroid impact debris (red)
    Impact,
    /// Crystal collection sparkle (cyan)
    Collect,
}

/// A short-lived visual particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in (0, 1], decremented by `decay` each frame
    pub life: f32,
    pub decay: f32,
    pub size: f32,
    pub kind: ParticleKind,
    /// Per-particle color jitter in [0, 1), fixed at creation
    pub hue_jitter: f32,
}

/// A background star. Generated once per session; only brightness changes.
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Brightness in [0.1, 1], perturbed each frame
    pub brightness: f32,
    pub twinkle: f32,
}

/// Complete game state - the single simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Arena dimensions, re-read from the viewport provider on resize
    pub bounds: Vec2,
    pub phase: GamePhase,
    pub score: u64,
    /// Always score / 1000 + 1
    pub level: u32,
    pub crystals_collected: u32,
    /// Frames elapsed since the session started
    pub time_ticks: u64,
    pub player: Player,
    pub asteroids: Vec<Asteroid>,
    pub crystals: Vec<Crystal>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    /// Pending events for the collaborators; drained once per frame
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session: star field, centered player, initial world
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let bounds = Vec2::new(width, height);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            phase: GamePhase::Start,
            score: 0,
            level: 1,
            crystals_collected: 0,
            time_ticks: 0,
            player: Player::new(bounds / 2.0),
            asteroids: Vec::new(),
            crystals: Vec::new(),
            particles: Vec::new(),
            stars: Vec::new(),
            events: Vec::new(),
        };
        world::generate_stars(&mut state);
        world::reset(&mut state);
        state
    }

    /// Begin play from the start screen or after game over
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
    }

    /// Full session reset back to a fresh level-1 world (stars are kept)
    pub fn reset(&mut self) {
        world::reset(self);
    }

    /// Viewport changed: adopt the new bounds and recenter the player
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.player.pos = self.bounds / 2.0;
    }

    /// Fuel level as a 0-100 percentage for the HUD
    pub fn fuel_percentage(&self) -> f32 {
        (self.player.fuel / FUEL_MAX * 100.0).max(0.0)
    }

    /// Take the pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
