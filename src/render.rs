//! Canvas2D renderer sink
//!
//! Draws the world from the current state arrays; never feeds anything back
//! into the simulation. Canvas calls that can only fail on a detached context
//! are deliberately ignored.

use web_sys::CanvasRenderingContext2d;

use crate::Settings;
use crate::sim::{GamePhase, GameState, ParticleKind};

/// Draw one frame
pub fn draw(ctx: &CanvasRenderingContext2d, state: &GameState, settings: &Settings) {
    // Translucent clear leaves faint motion trails
    ctx.set_fill_style_str("rgba(12, 12, 12, 0.1)");
    ctx.fill_rect(0.0, 0.0, state.bounds.x as f64, state.bounds.y as f64);

    if settings.starfield {
        draw_stars(ctx, state);
    }

    if state.phase == GamePhase::Playing {
        if settings.particles {
            draw_particles(ctx, state);
        }
        draw_asteroids(ctx, state);
        draw_crystals(ctx, state);
        draw_player(ctx, state);
    }
}

fn draw_stars(ctx: &CanvasRenderingContext2d, state: &GameState) {
    ctx.save();
    ctx.set_fill_style_str("#ffffff");
    for star in &state.stars {
        ctx.set_global_alpha(star.brightness as f64);
        ctx.begin_path();
        let _ = ctx.arc(
            star.pos.x as f64,
            star.pos.y as f64,
            star.size as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
    ctx.restore();
}

fn particle_color(kind: ParticleKind, jitter: f32) -> String {
    match kind {
        ParticleKind::Thrust => format!("hsl({}, 100%, 70%)", 15.0 + jitter * 60.0),
        ParticleKind::Impact => format!("hsl(0, 100%, {}%)", 50.0 + jitter * 50.0),
        ParticleKind::Collect => format!("hsl({}, 100%, 70%)", 180.0 + jitter * 60.0),
    }
}

fn draw_particles(ctx: &CanvasRenderingContext2d, state: &GameState) {
    for p in &state.particles {
        ctx.save();
        ctx.set_global_alpha(p.life as f64);
        ctx.set_fill_style_str(&particle_color(p.kind, p.hue_jitter));
        ctx.begin_path();
        let _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.size as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
        ctx.restore();
    }
}

fn draw_asteroids(ctx: &CanvasRenderingContext2d, state: &GameState) {
    for a in &state.asteroids {
        ctx.save();
        let _ = ctx.translate(a.pos.x as f64, a.pos.y as f64);
        let _ = ctx.rotate(a.rotation as f64);

        ctx.set_fill_style_str("#666666");
        ctx.set_stroke_style_str("#999999");
        ctx.set_line_width(1.0);

        ctx.begin_path();
        for (i, v) in a.vertices.iter().enumerate() {
            if i == 0 {
                ctx.move_to(v.x as f64, v.y as f64);
            } else {
                ctx.line_to(v.x as f64, v.y as f64);
            }
        }
        ctx.close_path();
        ctx.fill();
        ctx.stroke();

        ctx.restore();
    }
}

fn draw_crystals(ctx: &CanvasRenderingContext2d, state: &GameState) {
    for c in &state.crystals {
        ctx.save();
        let _ = ctx.translate(c.pos.x as f64, c.pos.y as f64);
        let _ = ctx.rotate(c.rotation as f64);

        let pulse_size = (c.size + c.pulse.sin() * 3.0) as f64;

        // Outer glow
        if let Ok(gradient) =
            ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, pulse_size * 2.0)
        {
            let _ = gradient.add_color_stop(0.0, "rgba(0, 255, 255, 0.3)");
            let _ = gradient.add_color_stop(1.0, "rgba(0, 255, 255, 0)");
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            let _ = ctx.arc(0.0, 0.0, pulse_size * 2.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }

        // Hexagonal body
        ctx.set_fill_style_str("#00ffff");
        ctx.set_stroke_style_str("#ffffff");
        ctx.set_line_width(2.0);

        ctx.begin_path();
        for i in 0..6 {
            let angle = (i as f64 / 6.0) * std::f64::consts::TAU;
            let x = angle.cos() * pulse_size;
            let y = angle.sin() * pulse_size;
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.close_path();
        ctx.fill();
        ctx.stroke();

        ctx.restore();
    }
}

fn draw_player(ctx: &CanvasRenderingContext2d, state: &GameState) {
    let p = &state.player;
    ctx.save();
    let _ = ctx.translate(p.pos.x as f64, p.pos.y as f64);
    let _ = ctx.rotate(p.angle as f64);

    let size = p.size as f64;

    ctx.set_fill_style_str("#00d4ff");
    ctx.set_stroke_style_str("#ffffff");
    ctx.set_line_width(2.0);

    ctx.begin_path();
    ctx.move_to(size, 0.0);
    ctx.line_to(-size * 0.7, -size * 0.5);
    ctx.line_to(-size * 0.3, 0.0);
    ctx.line_to(-size * 0.7, size * 0.5);
    ctx.close_path();
    ctx.fill();
    ctx.stroke();

    // Engine glow while exhaust particles are alive
    let thrusting = state
        .particles
        .iter()
        .any(|p| p.kind == ParticleKind::Thrust && p.life > 0.9);
    if thrusting {
        ctx.set_fill_style_str("#ff6600");
        ctx.begin_path();
        let _ = ctx.arc(-size * 0.5, 0.0, 3.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    ctx.restore();
}
