//! Particle field theremin core.
//!
//! Platform-free simulation shared by the native and web frontends: a
//! fixed-size particle field pulled toward the origin and toward the pointer,
//! visual attributes that follow the pointer or relax to baseline, and a
//! bridge that maps the same pointer onto an oscillator's pitch and volume.

pub mod appearance;
pub mod bridge;
pub mod camera;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod field;
pub mod integrator;
pub mod pointer;
pub mod render;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use appearance::AppearanceUpdater;
pub use bridge::{AudioEngine, AudioParameterBridge, BridgeState, SilentEngine};
pub use camera::Camera;
pub use config::{
    AttractionSpace, BaseColor, ColorWave, Config, RenderPrimitive, SpawnShape, VolumePolicy,
};
pub use engine::ThereminEngine;
pub use error::ConfigError;
pub use field::ParticleField;
pub use integrator::ForceIntegrator;
pub use pointer::{AudioParams, PointerEvent, PointerMapper, PointerState, Resolved};
pub use render::{InstanceBuffer, InstanceRaw, PointBuffers, RenderTarget};
