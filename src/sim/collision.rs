//! Collision detection and the fuel/score economy
//!
//! Everything is circle-vs-circle on center distance with a strict `<`
//! boundary. Asteroid overlap has no cooldown: a ship that stays inside an
//! asteroid keeps taking damage every frame, exactly as the game intends.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Particle, ParticleKind};
use crate::consts::*;

/// Resolve all player collisions for this frame
pub fn resolve(state: &mut GameState) {
    resolve_asteroid_impacts(state);
    resolve_crystal_pickups(state);
}

fn resolve_asteroid_impacts(state: &mut GameState) {
    for i in 0..state.asteroids.len() {
        let (a_pos, a_size) = {
            let a = &state.asteroids[i];
            (a.pos, a.size)
        };
        let dist = state.player.pos.distance(a_pos);
        if dist < state.player.size + a_size * 0.8 {
            state.player.fuel -= IMPACT_FUEL_COST;

            // Shove the ship outward along the asteroid-to-player axis
            let away = (state.player.pos - a_pos).to_angle();
            state.player.vel += Vec2::new(away.cos(), away.sin()) * IMPACT_IMPULSE;

            let at = state.player.pos;
            spawn_impact_burst(state, at);
            state.events.push(GameEvent::AsteroidImpact);
        }
    }
}

fn resolve_crystal_pickups(state: &mut GameState) {
    let mut i = 0;
    while i < state.crystals.len() {
        let c_pos = state.crystals[i].pos;
        let c_size = state.crystals[i].size;
        if state.player.pos.distance(c_pos) < state.player.size + c_size {
            // Removal makes collection exactly-once
            state.crystals.remove(i);
            state.crystals_collected += 1;
            state.score += CRYSTAL_SCORE_VALUE * state.level as u64;
            state.player.fuel = (state.player.fuel + CRYSTAL_FUEL_BONUS).min(FUEL_MAX);
            spawn_collect_burst(state, c_pos);
            state.events.push(GameEvent::CrystalCollected);
        } else {
            i += 1;
        }
    }
}

/// 8 red debris particles, evenly spaced around the impact point
fn spawn_impact_burst(state: &mut GameState, at: Vec2) {
    for i in 0..8 {
        let angle = (i as f32 / 8.0) * std::f32::consts::TAU;
        let speed = state.rng.random::<f32>() * 4.0 + 2.0;
        let size = state.rng.random::<f32>() * 4.0 + 2.0;
        let hue_jitter = state.rng.random::<f32>();
        state.particles.push(Particle {
            pos: at,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: 1.0,
            decay: IMPACT_PARTICLE_DECAY,
            size,
            kind: ParticleKind::Impact,
            hue_jitter,
        });
    }
}

/// 12 cyan sparkles, evenly spaced around the collected crystal
fn spawn_collect_burst(state: &mut GameState, at: Vec2) {
    for i in 0..12 {
        let angle = (i as f32 / 12.0) * std::f32::consts::TAU;
        let speed = state.rng.random::<f32>() * 3.0 + 1.0;
        let size = state.rng.random::<f32>() * 3.0 + 1.0;
        let hue_jitter = state.rng.random::<f32>();
        state.particles.push(Particle {
            pos: at,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: 1.0,
            decay: COLLECT_PARTICLE_DECAY,
            size,
            kind: ParticleKind::Collect,
            hue_jitter,
        });
    }
}

/// 3 exhaust particles sprayed behind the ship while thrusting
pub fn spawn_thrust_particles(state: &mut GameState) {
    let facing = Vec2::new(state.player.angle.cos(), state.player.angle.sin());
    let tail = state.player.pos - facing * state.player.size;
    for _ in 0..3 {
        let angle =
            state.player.angle + std::f32::consts::PI + (state.rng.random::<f32>() - 0.5) * 0.5;
        let speed = state.rng.random::<f32>() * 3.0 + 2.0;
        let size = state.rng.random::<f32>() * 3.0 + 1.0;
        let hue_jitter = state.rng.random::<f32>();
        state.particles.push(Particle {
            pos: tail,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: 1.0,
            decay: THRUST_PARTICLE_DECAY,
            size,
            kind: ParticleKind::Thrust,
            hue_jitter,
        });
    }
}
