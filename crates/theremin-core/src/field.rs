//! Flat per-particle state owned by the simulation.
//!
//! Every attribute lives in its own array indexed by particle id, so the
//! render side can read positions, colors and sizes as contiguous `f32`
//! slices without re-packing.

use crate::config::{BaseColor, Config, SpawnShape};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    base_colors: Vec<Vec3>,
    colors: Vec<Vec3>,
    base_sizes: Vec<f32>,
    sizes: Vec<f32>,
    rotations: Vec<Vec3>,
    /// Position each particle's forces were last evaluated at. Differs from
    /// `positions` only for particles respawned in the last step.
    force_positions: Vec<Vec3>,
}

impl ParticleField {
    /// Allocate and seed `config.particle_count` particles.
    pub fn seed<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let n = config.particle_count;
        let mut positions = Vec::with_capacity(n);
        let mut velocities = Vec::with_capacity(n);
        let mut base_colors = Vec::with_capacity(n);
        let mut base_sizes = Vec::with_capacity(n);
        let mut rotations = Vec::with_capacity(n);

        let (size_min, size_max) = config.size_range;
        for _ in 0..n {
            let position = sample_spawn(rng, config.spawn);
            positions.push(position);
            velocities.push(random_in_cube(rng, config.initial_speed));
            base_colors.push(base_color_at(config.base_color, position));
            base_sizes.push(rng.gen_range(size_min..size_max));
            rotations.push(Vec3::new(
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
            ));
        }
        log::debug!(
            "[field] seeded {} particles ({:?}, speed ±{})",
            n,
            config.spawn,
            config.initial_speed
        );

        Self {
            colors: base_colors.clone(),
            sizes: base_sizes.clone(),
            force_positions: positions.clone(),
            positions,
            velocities,
            base_colors,
            base_sizes,
            rotations,
        }
    }

    /// Build a field from explicit values; live color/size start at baseline.
    ///
    /// Panics if the arrays differ in length.
    pub fn from_particles(
        positions: Vec<Vec3>,
        velocities: Vec<Vec3>,
        base_colors: Vec<Vec3>,
        base_sizes: Vec<f32>,
    ) -> Self {
        let n = positions.len();
        assert!(
            velocities.len() == n && base_colors.len() == n && base_sizes.len() == n,
            "particle arrays must have equal length"
        );
        Self {
            colors: base_colors.clone(),
            sizes: base_sizes.clone(),
            rotations: vec![Vec3::ZERO; n],
            force_positions: positions.clone(),
            positions,
            velocities,
            base_colors,
            base_sizes,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn base_colors(&self) -> &[Vec3] {
        &self.base_colors
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn base_sizes(&self) -> &[f32] {
        &self.base_sizes
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn rotations(&self) -> &[Vec3] {
        &self.rotations
    }

    /// Positions as `N×3` floats.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Live colors as `N×3` floats.
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Overwrite live color/size, e.g. to start a relaxation from a known state.
    pub fn set_appearance(&mut self, index: usize, color: Vec3, size: f32) {
        self.colors[index] = color;
        self.sizes[index] = size;
    }

    pub(crate) fn kinematics_mut(&mut self) -> KinematicsView<'_> {
        KinematicsView {
            positions: &mut self.positions,
            velocities: &mut self.velocities,
            rotations: &mut self.rotations,
            force_positions: &mut self.force_positions,
        }
    }

    pub(crate) fn appearance_mut(&mut self) -> AppearanceView<'_> {
        AppearanceView {
            positions: &self.force_positions,
            base_colors: &self.base_colors,
            colors: &mut self.colors,
            base_sizes: &self.base_sizes,
            sizes: &mut self.sizes,
        }
    }
}

/// Split borrow used by the integrator.
pub(crate) struct KinematicsView<'a> {
    pub positions: &'a mut [Vec3],
    pub velocities: &'a mut [Vec3],
    pub rotations: &'a mut [Vec3],
    pub force_positions: &'a mut [Vec3],
}

/// Split borrow used by the appearance pass: the positions forces saw and the
/// baselines read-only, live attributes writable.
pub(crate) struct AppearanceView<'a> {
    pub positions: &'a [Vec3],
    pub base_colors: &'a [Vec3],
    pub colors: &'a mut [Vec3],
    pub base_sizes: &'a [f32],
    pub sizes: &'a mut [f32],
}

pub(crate) fn sample_spawn<R: Rng + ?Sized>(rng: &mut R, shape: SpawnShape) -> Vec3 {
    match shape {
        SpawnShape::Shell { inner, outer } => {
            let r = rng.gen_range(inner..outer);
            random_direction(rng) * r
        }
        SpawnShape::Ball { radius } => {
            // Cube root for uniform volume distribution
            let r = radius * rng.gen::<f32>().cbrt();
            random_direction(rng) * r
        }
        SpawnShape::Cube { half_extent } => random_in_cube(rng, half_extent),
    }
}

/// Uniform in `[-half, half)` per axis; zero for a zero extent.
pub(crate) fn random_in_cube<R: Rng + ?Sized>(rng: &mut R, half: f32) -> Vec3 {
    if half <= 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
    )
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    // acos(2u - 1) keeps the polar angle area-uniform
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

fn base_color_at(policy: BaseColor, position: Vec3) -> Vec3 {
    match policy {
        BaseColor::Fixed(rgb) => rgb,
        BaseColor::PositionTint { center, gain } => {
            (Vec3::splat(center) + position * gain).clamp(Vec3::ZERO, Vec3::ONE)
        }
    }
}
