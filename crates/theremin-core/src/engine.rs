use crate::appearance::AppearanceUpdater;
use crate::bridge::{AudioEngine, AudioParameterBridge, BridgeState};
use crate::config::Config;
use crate::error::ConfigError;
use crate::field::ParticleField;
use crate::integrator::ForceIntegrator;
use crate::pointer::{PointerEvent, PointerMapper, PointerState, Resolved};
use crate::render::RenderTarget;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Owns the particle field, the per-frame passes and the audio bridge.
///
/// Hosts call [`ThereminEngine::handle_pointer`] from input callbacks and
/// [`ThereminEngine::frame`] once per rendered frame, then sync a
/// [`RenderTarget`]. Teardown consumes the engine, so no frame can run on a
/// disposed field.
pub struct ThereminEngine<A: AudioEngine> {
    config: Config,
    field: ParticleField,
    pointer: PointerState,
    mapper: PointerMapper,
    integrator: ForceIntegrator,
    appearance: AppearanceUpdater,
    bridge: AudioParameterBridge<A>,
    elapsed_sec: f64,
    frames: u64,
}

impl<A: AudioEngine> ThereminEngine<A> {
    pub fn new(config: Config, audio: A, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        // Derive independent streams for seeding and respawning from one seed
        let mut seed_rng = StdRng::seed_from_u64(seed);
        let respawn_seed = seed ^ 0x9E37_79B9_7F4A_7C15;
        let field = ParticleField::seed(&config, &mut seed_rng);
        log::info!(
            "[engine] {} particles, primitive={:?}, f={}..{} Hz",
            field.len(),
            config.primitive,
            config.f_min,
            config.f_max
        );
        Ok(Self {
            mapper: PointerMapper::new(&config),
            integrator: ForceIntegrator::new(&config, respawn_seed),
            appearance: AppearanceUpdater::new(&config),
            bridge: AudioParameterBridge::new(audio),
            pointer: PointerState::default(),
            elapsed_sec: 0.0,
            frames: 0,
            field,
            config,
        })
    }

    /// Replace the seeded field, e.g. with known positions.
    ///
    /// Panics if the particle count differs from the configured one.
    pub fn with_field(mut self, field: ParticleField) -> Self {
        assert_eq!(
            field.len(),
            self.config.particle_count,
            "field size must match config.particle_count"
        );
        self.field = field;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn audio_state(&self) -> BridgeState {
        self.bridge.state()
    }

    pub fn audio(&self) -> &A {
        self.bridge.engine()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }

    pub fn resolve(&self) -> Resolved {
        self.mapper.resolve(&self.pointer)
    }

    /// Replace the pointer record and push audio parameters synchronously.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => {
                self.pointer = PointerState::active(x, y);
                let params = self.mapper.activation_params(&self.pointer);
                self.bridge.activate(params);
            }
            PointerEvent::Move { x, y } => {
                if !self.pointer.active {
                    // Remember the hover position; nothing sounds until a press
                    self.pointer = PointerState::inactive(x, y);
                    return;
                }
                self.pointer = PointerState::active(x, y);
                let params = self.mapper.resolve(&self.pointer).audio;
                self.bridge.update(params);
            }
            PointerEvent::Up | PointerEvent::Leave => {
                self.pointer = PointerState::inactive(self.pointer.x, self.pointer.y);
                self.bridge.release();
            }
        }
    }

    /// Advance one rendered frame. `dt` only drives the color clock; motion is
    /// integrated per frame.
    pub fn frame(&mut self, dt: Duration) {
        self.elapsed_sec += dt.as_secs_f64();
        let target = self.mapper.resolve(&self.pointer).target;
        self.integrator.step(&mut self.field, &self.pointer, target);
        self.appearance.step(
            &mut self.field,
            &self.pointer,
            target,
            self.elapsed_sec as f32,
        );
        self.frames += 1;
    }

    pub fn sync<R: RenderTarget + ?Sized>(&self, target: &mut R) {
        target.sync(&self.field);
    }

    /// Stop audio and drop all simulation state.
    pub fn shutdown(mut self) {
        log::info!(
            "[engine] shutdown after {} frames ({} respawns)",
            self.frames,
            self.integrator.resets()
        );
        self.bridge.teardown();
    }
}
