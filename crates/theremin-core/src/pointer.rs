//! Pointer state and its mapping to a world-space target and audio parameters.

use crate::config::{Config, VolumePolicy};
use glam::{Vec2, Vec3};

/// Single-pointer snapshot with coordinates normalized to [0, 1]
/// (x grows rightward, y grows downward, as on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub active: bool,
    pub x: f32,
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::inactive(0.5, 0.5)
    }
}

impl PointerState {
    pub fn active(x: f32, y: f32) -> Self {
        Self {
            active: true,
            x: unit(x),
            y: unit(y),
        }
    }

    pub fn inactive(x: f32, y: f32) -> Self {
        Self {
            active: false,
            x: unit(x),
            y: unit(y),
        }
    }
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Normalized input events produced by a frontend's input capture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    /// Pointer left the interactive surface; treated like `Up`.
    Leave,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioParams {
    pub frequency_hz: f32,
    pub volume: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    pub target: Vec3,
    pub audio: AudioParams,
}

pub struct PointerMapper {
    world_scale: Vec2,
    f_min: f32,
    f_max: f32,
    volume: VolumePolicy,
    activation_volume: Option<f32>,
}

impl PointerMapper {
    pub fn new(config: &Config) -> Self {
        Self {
            world_scale: config.world_scale,
            f_min: config.f_min,
            f_max: config.f_max,
            volume: config.volume,
            activation_volume: config.activation_volume,
        }
    }

    pub fn resolve(&self, pointer: &PointerState) -> Resolved {
        let target = Vec3::new(
            (pointer.x - 0.5) * self.world_scale.x,
            // screen y grows downward, world y grows upward
            (pointer.y - 0.5) * -self.world_scale.y,
            0.0,
        );
        let frequency_hz = self.f_min + pointer.x * (self.f_max - self.f_min);
        // Inactive pointers are muted by the bridge, not here.
        let volume = match self.volume {
            VolumePolicy::InvertedY => 1.0 - pointer.y,
            VolumePolicy::Fixed(v) => v,
        };
        Resolved {
            target,
            audio: AudioParams {
                frequency_hz,
                volume,
            },
        }
    }

    /// Audio parameters pushed on pointer-down; honors `activation_volume`.
    pub fn activation_params(&self, pointer: &PointerState) -> AudioParams {
        let mut audio = self.resolve(pointer).audio;
        if let Some(v) = self.activation_volume {
            audio.volume = v;
        }
        audio
    }
}
