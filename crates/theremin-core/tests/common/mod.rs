// Shared helpers for host-side integration tests.

#![allow(dead_code)]

use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use theremin_core::{AudioEngine, Config, ParticleField};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Start,
    Stop,
    Frequency(f32),
    Volume(f32),
}

/// Audio engine that records every call; clones share one log.
#[derive(Clone, Default)]
pub struct RecordingEngine {
    pub calls: Rc<RefCell<Vec<Call>>>,
}

impl RecordingEngine {
    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn starts(&self) -> usize {
        self.count(&Call::Start)
    }

    pub fn stops(&self) -> usize {
        self.count(&Call::Stop)
    }

    pub fn last_frequency(&self) -> Option<f32> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            Call::Frequency(hz) => Some(*hz),
            _ => None,
        })
    }

    pub fn last_volume(&self) -> Option<f32> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            Call::Volume(v) => Some(*v),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl AudioEngine for RecordingEngine {
    fn start(&mut self) {
        self.calls.borrow_mut().push(Call::Start);
    }
    fn stop(&mut self) {
        self.calls.borrow_mut().push(Call::Stop);
    }
    fn set_frequency(&mut self, hz: f32) {
        self.calls.borrow_mut().push(Call::Frequency(hz));
    }
    fn set_volume(&mut self, volume: f32) {
        self.calls.borrow_mut().push(Call::Volume(volume));
    }
}

/// Field with the given positions, zero velocity, and a shared baseline.
pub fn still_field(positions: &[Vec3]) -> ParticleField {
    let n = positions.len();
    ParticleField::from_particles(
        positions.to_vec(),
        vec![Vec3::ZERO; n],
        vec![Vec3::new(0.1, 0.3, 0.8); n],
        vec![1.0; n],
    )
}

pub fn config_with_count(base: Config, particle_count: usize) -> Config {
    Config {
        particle_count,
        ..base
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

pub fn approx_vec(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}
