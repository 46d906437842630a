use crate::config::{AttractionSpace, Config};
use crate::field::{random_in_cube, KinematicsView, ParticleField};
use crate::pointer::PointerState;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Advances particle kinematics once per frame.
///
/// Forces are applied in units of "per frame": velocities are displacements,
/// so there is no `dt` here. Particles only interact with the origin and the
/// shared pointer target, never with each other.
pub struct ForceIntegrator {
    reset_distance_sq: f32,
    reset_half_extent: f32,
    center_coefficient: f32,
    attraction_coefficient: f32,
    attraction_cap: f32,
    attraction_epsilon: f32,
    space: AttractionSpace,
    spin_rate: Vec3,
    rng: StdRng,
    resets: u64,
}

impl ForceIntegrator {
    pub fn new(config: &Config, seed: u64) -> Self {
        Self {
            reset_distance_sq: config.reset_distance * config.reset_distance,
            reset_half_extent: config.reset_half_extent,
            center_coefficient: config.center_coefficient,
            attraction_coefficient: config.attraction_coefficient,
            attraction_cap: config.attraction_cap,
            attraction_epsilon: config.attraction_epsilon,
            space: config.attraction_space,
            spin_rate: config.spin_rate,
            rng: StdRng::seed_from_u64(seed),
            resets: 0,
        }
    }

    /// Number of boundary resets performed so far.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    pub fn step(&mut self, field: &mut ParticleField, pointer: &PointerState, target: Vec3) {
        let KinematicsView {
            positions,
            velocities,
            rotations,
            force_positions,
        } = field.kinematics_mut();
        for (((pos, vel), rot), seen) in positions
            .iter_mut()
            .zip(velocities.iter_mut())
            .zip(rotations.iter_mut())
            .zip(force_positions.iter_mut())
        {
            *pos += *vel;
            // Forces and this frame's appearance act on the integrated
            // position; a respawn only shows up next frame.
            let p = *pos;
            *seen = p;

            if p.length_squared() > self.reset_distance_sq {
                *pos = random_in_cube(&mut self.rng, self.reset_half_extent);
                self.resets += 1;
            }

            *vel -= p * self.center_coefficient;

            if pointer.active {
                *vel += self.attraction(p, target);
            }

            *rot += self.spin_rate;
        }
    }

    /// Inverse-square pull toward `target`, capped; returns the velocity delta.
    #[inline]
    pub fn attraction(&self, p: Vec3, target: Vec3) -> Vec3 {
        let d = match self.space {
            AttractionSpace::Volume => target - p,
            AttractionSpace::Planar => Vec3::new(target.x - p.x, target.y - p.y, 0.0),
        };
        let dist = d.length() + self.attraction_epsilon;
        let force = (self.attraction_coefficient / (dist * dist)).min(self.attraction_cap);
        d * force
    }
}
