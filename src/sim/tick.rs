//! Per-frame simulation step
//!
//! One `tick` call advances exactly one frame. There is no delta-time: every
//! constant is tuned per-frame, so frame-rate variation changes effective
//! game speed.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::state::{GameEvent, GamePhase, GameState};
use super::world;
use crate::consts::*;
use crate::{wrap_coord, wrap_coord_with_margin};

/// Input intents for a single frame, snapshotted from the held-key set
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust_forward: bool,
    pub thrust_reverse: bool,
    /// Doubles thrust and fuel drain; only engages with fuel above 5
    pub boost: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &FrameInput) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    integrate_player(state, input);
    integrate_asteroids(state);
    integrate_crystals(state);
    integrate_particles(state);
    twinkle_stars(state);

    collision::resolve(state);
    direct_spawns(state);
    update_level(state);

    // Terminal condition: checked after all of the frame's fuel effects
    if state.player.fuel <= 0.0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!(
            "game over: score={} level={} crystals={} ticks={}",
            state.score,
            state.level,
            state.crystals_collected,
            state.time_ticks
        );
    }
}

/// Input, thrust, friction, speed clamp, wraparound, fuel regen
fn integrate_player(state: &mut GameState, input: &FrameInput) {
    // Rotation - both keys held cancel out
    if input.turn_left {
        state.player.angle -= TURN_RATE;
    }
    if input.turn_right {
        state.player.angle += TURN_RATE;
    }

    // Thrust only with fuel in the tank
    if (input.thrust_forward || input.thrust_reverse) && state.player.fuel > 0.0 {
        let multiplier = if input.boost && state.player.fuel > BOOST_MIN_FUEL {
            BOOST_MULTIPLIER
        } else {
            1.0
        };
        let direction = if input.thrust_reverse { -1.0 } else { 1.0 };
        let power = THRUST_POWER * multiplier * direction;

        state.player.vel += Vec2::new(state.player.angle.cos(), state.player.angle.sin()) * power;
        state.player.fuel -= THRUST_FUEL_DRAIN * multiplier;

        collision::spawn_thrust_particles(state);
    }

    // Friction and speed clamp run every frame, thrusting or not
    state.player.vel *= FRICTION;
    let speed = state.player.vel.length();
    if speed > MAX_SPEED {
        state.player.vel *= MAX_SPEED / speed;
    }

    state.player.pos += state.player.vel;
    state.player.pos.x = wrap_coord(state.player.pos.x, state.bounds.x);
    state.player.pos.y = wrap_coord(state.player.pos.y, state.bounds.y);

    // Passive regen runs independent of thrust state
    if state.player.fuel < FUEL_MAX {
        state.player.fuel += FUEL_REGEN;
    }
}

fn integrate_asteroids(state: &mut GameState) {
    let bounds = state.bounds;
    for a in &mut state.asteroids {
        a.pos += a.vel;
        a.rotation += a.rotation_speed;
        a.pos.x = wrap_coord_with_margin(a.pos.x, bounds.x, a.size);
        a.pos.y = wrap_coord_with_margin(a.pos.y, bounds.y, a.size);
    }
}

fn integrate_crystals(state: &mut GameState) {
    for c in &mut state.crystals {
        c.rotation += c.rotation_speed;
        c.pulse += c.pulse_speed;
    }
}

fn integrate_particles(state: &mut GameState) {
    for p in &mut state.particles {
        p.pos += p.vel;
        p.vel *= PARTICLE_DRAG;
        p.life -= p.decay;
    }
    state.particles.retain(|p| p.life > 0.0);
}

fn twinkle_stars(state: &mut GameState) {
    for i in 0..state.stars.len() {
        let jitter = state.rng.random::<f32>() - 0.5;
        let star = &mut state.stars[i];
        star.brightness = (star.brightness + star.twinkle * jitter).clamp(0.1, 1.0);
    }
}

/// Probabilistic top-up toward the level-scaled target counts
fn direct_spawns(state: &mut GameState) {
    if (state.asteroids.len() as u32) < ASTEROID_TARGET_BASE + state.level
        && state.rng.random::<f32>() < ASTEROID_SPAWN_CHANCE
    {
        world::spawn_asteroid(state);
    }
    if (state.crystals.len() as u32) < CRYSTAL_TARGET_BASE + state.level / 2
        && state.rng.random::<f32>() < CRYSTAL_SPAWN_CHANCE
    {
        world::spawn_crystal(state);
    }
}

/// Level is a pure function of score; the event fires once per increase
fn update_level(state: &mut GameState) {
    let new_level = (state.score / LEVEL_SCORE_STEP + 1) as u32;
    if new_level > state.level {
        state.level = new_level;
        state.events.push(GameEvent::LevelUp);
        log::info!("level up -> {}", new_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new(9, 2000.0, 2000.0);
        // Empty arena keeps physics tests free of incidental collisions
        state.asteroids.clear();
        state.crystals.clear();
        state.start();
        state
    }

    #[test]
    fn tick_is_inert_outside_playing() {
        let mut state = GameState::new(9, 2000.0, 2000.0);
        assert_eq!(state.phase, GamePhase::Start);
        let before = state.player.fuel;
        tick(&mut state, &FrameInput::default());
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.fuel, before);
    }

    #[test]
    fn thrust_drains_half_fuel_per_frame() {
        let mut state = playing_state();
        state.player.fuel = 3.0;
        let input = FrameInput {
            thrust_forward: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        // 3 > 0 so the thrust is not fuel-gated: -0.5 drain, +0.1 regen
        assert!((state.player.fuel - 2.6).abs() < 1e-5);
        assert!(state.player.vel.length() > 0.0);
    }

    #[test]
    fn boost_needs_fuel_headroom() {
        let mut state = playing_state();
        state.player.fuel = 4.0; // under the boost threshold
        let input = FrameInput {
            thrust_forward: true,
            boost: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        // Plain thrust: -0.5 + 0.1
        assert!((state.player.fuel - 3.6).abs() < 1e-5);

        let mut state = playing_state();
        state.player.fuel = 50.0;
        tick(&mut state, &input);
        // Boosted: -1.0 + 0.1
        assert!((state.player.fuel - 49.1).abs() < 1e-5);
    }

    #[test]
    fn opposing_turn_keys_cancel() {
        let mut state = playing_state();
        let input = FrameInput {
            turn_left: true,
            turn_right: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.angle, 0.0);
    }

    #[test]
    fn fuel_regenerates_while_coasting() {
        let mut state = playing_state();
        state.player.fuel = 40.0;
        for _ in 0..10 {
            tick(&mut state, &FrameInput::default());
        }
        assert!((state.player.fuel - 41.0).abs() < 1e-4);
    }

    #[test]
    fn fuel_never_exceeds_max() {
        let mut state = playing_state();
        state.player.fuel = FUEL_MAX;
        for _ in 0..100 {
            tick(&mut state, &FrameInput::default());
            assert!(state.player.fuel <= FUEL_MAX);
        }
    }

    #[test]
    fn game_over_iff_fuel_exhausted() {
        let mut state = playing_state();
        state.player.fuel = 0.3;
        let input = FrameInput {
            thrust_forward: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        // 0.3 - 0.5 + 0.1 = -0.1 <= 0
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver));

        // Frozen after game over
        let ticks = state.time_ticks;
        tick(&mut state, &input);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn wrap_is_exact_and_idempotent() {
        let mut state = playing_state();
        state.player.pos = Vec2::new(state.bounds.x, state.bounds.y / 2.0);
        state.player.vel = Vec2::ZERO;
        tick(&mut state, &FrameInput::default());
        assert_eq!(state.player.pos.x, 0.0);

        // Stays put under repeated wraps
        tick(&mut state, &FrameInput::default());
        assert_eq!(state.player.pos.x, 0.0);
    }

    #[test]
    fn asteroid_wraps_with_size_margin() {
        let mut state = playing_state();
        world::spawn_asteroid(&mut state);
        let size = state.asteroids[0].size;
        state.asteroids[0].pos = Vec2::new(-size - 1.0, 100.0);
        state.asteroids[0].vel = Vec2::ZERO;
        tick(&mut state, &FrameInput::default());
        assert_eq!(state.asteroids[0].pos.x, state.bounds.x + size);
    }

    #[test]
    fn level_follows_score_thresholds() {
        let mut state = playing_state();
        // Three level-1 crystals: 300 points, still level 1
        for _ in 0..3 {
            state.player.pos = Vec2::new(500.0, 500.0);
            state
                .crystals
                .push(crate::sim::Crystal::new(Vec2::new(500.0, 500.0)));
            tick(&mut state, &FrameInput::default());
        }
        assert_eq!(state.score, 300);
        assert_eq!(state.level, 1);

        // Push score to exactly 1000: level 2 on that same frame
        state.score = 900;
        state.player.pos = Vec2::new(500.0, 500.0);
        state
            .crystals
            .push(crate::sim::Crystal::new(Vec2::new(500.0, 500.0)));
        tick(&mut state, &FrameInput::default());
        assert_eq!(state.score, 1000);
        assert_eq!(state.level, 2);
        assert!(state.events.contains(&GameEvent::LevelUp));

        // Invariant holds after every update
        assert_eq!(state.level as u64, state.score / LEVEL_SCORE_STEP + 1);
    }

    #[test]
    fn particles_are_filtered_when_dead() {
        let mut state = playing_state();
        state.player.fuel = FUEL_MAX;
        let input = FrameInput {
            thrust_forward: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!(!state.particles.is_empty());
        // Thrust decay is 0.05: everything is gone within 20 coasting frames
        for _ in 0..21 {
            tick(&mut state, &FrameInput::default());
        }
        assert!(state.particles.is_empty());
    }

    #[test]
    fn determinism_same_seed_same_run() {
        let mut a = GameState::new(1234, 1600.0, 900.0);
        let mut b = GameState::new(1234, 1600.0, 900.0);
        a.start();
        b.start();
        let input = FrameInput {
            thrust_forward: true,
            turn_right: true,
            ..Default::default()
        };
        for _ in 0..300 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.player.fuel, b.player.fuel);
        assert_eq!(a.score, b.score);
        assert_eq!(a.asteroids.len(), b.asteroids.len());
    }

    proptest! {
        #[test]
        fn speed_never_exceeds_max(vx in -50.0f32..50.0, vy in -50.0f32..50.0) {
            let mut state = playing_state();
            state.player.vel = Vec2::new(vx, vy);
            tick(&mut state, &FrameInput::default());
            prop_assert!(state.player.speed() <= MAX_SPEED + 1e-4);
        }

        #[test]
        fn wrap_coord_lands_in_range(x in -5000.0f32..5000.0, max in 100.0f32..4000.0) {
            let wrapped = wrap_coord(x, max);
            prop_assert!((0.0..max).contains(&wrapped));
            // Idempotent
            prop_assert_eq!(wrap_coord(wrapped, max), wrapped);
        }

        #[test]
        fn star_brightness_stays_clamped(seed in 0u64..1000) {
            let mut state = GameState::new(seed, 800.0, 600.0);
            state.start();
            for _ in 0..50 {
                tick(&mut state, &FrameInput::default());
            }
            for star in &state.stars {
                prop_assert!((0.1..=1.0).contains(&star.brightness));
            }
        }
    }
}
