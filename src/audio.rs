//! Audio system using the Web Audio API
//!
//! Every cue is a single procedurally generated oscillator tone - no audio
//! files. Off wasm the manager keeps the same API and does nothing, so the
//! simulation and driver code never special-case the platform.

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::sim::GameEvent;

/// Oscillator waveform for a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
    Triangle,
    Square,
}

#[cfg(target_arch = "wasm32")]
impl Waveform {
    fn to_oscillator_type(self) -> OscillatorType {
        match self {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
            Waveform::Triangle => OscillatorType::Triangle,
            Waveform::Square => OscillatorType::Square,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        // May fail outside a secure context; audio then degrades to a no-op
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx, volume: 0.8 }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self { volume: 0.8 }
    }

    /// Set the effective volume (0.0 - 1.0); 0 silences all tones
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    /// Resume a suspended context (browsers require a user gesture first)
    #[cfg(target_arch = "wasm32")]
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn resume(&self) {}

    /// Map a simulation event to its tone
    pub fn play_event(&self, event: GameEvent) {
        match event {
            GameEvent::AsteroidImpact => self.play_tone(150.0, 0.3, Waveform::Sawtooth),
            GameEvent::CrystalCollected => self.play_tone(800.0, 0.2, Waveform::Sine),
            GameEvent::LevelUp => self.play_tone(600.0, 0.5, Waveform::Triangle),
            GameEvent::GameOver => self.play_tone(200.0, 0.5, Waveform::Sawtooth),
        }
    }

    /// Play a single fire-and-forget tone with a decaying gain envelope
    #[cfg(target_arch = "wasm32")]
    pub fn play_tone(&self, freq_hz: f32, duration_secs: f64, waveform: Waveform) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = self.create_osc(ctx, freq_hz, waveform.to_oscillator_type())
        else {
            return;
        };
        let t = ctx.current_time();

        let _ = gain.gain().set_value_at_time(0.1 * self.volume, t);
        let _ = gain
            .gain()
            .exponential_ramp_to_value_at_time(0.01, t + duration_secs);

        let _ = osc.start();
        let _ = osc.stop_with_when(t + duration_secs);
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn play_tone(&self, _freq_hz: f32, _duration_secs: f64, _waveform: Waveform) {}

    /// Create an oscillator wired through a gain node to the destination
    #[cfg(target_arch = "wasm32")]
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}
