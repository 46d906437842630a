use crate::config::{AttractionSpace, ColorWave, Config};
use crate::field::{AppearanceView, ParticleField};
use crate::pointer::PointerState;
use glam::Vec3;

/// Recolors and resizes particles from their distance to the pointer target,
/// or relaxes them back toward baseline while the pointer is up.
pub struct AppearanceUpdater {
    palette: [ColorWave; 3],
    size_cap: f32,
    size_gain: f32,
    size_offset: f32,
    relaxation_rate: f32,
    epsilon: f32,
    space: AttractionSpace,
}

impl AppearanceUpdater {
    pub fn new(config: &Config) -> Self {
        Self {
            palette: config.palette,
            size_cap: config.size_cap,
            size_gain: config.size_gain,
            size_offset: config.size_offset,
            relaxation_rate: config.relaxation_rate,
            epsilon: config.attraction_epsilon,
            space: config.attraction_space,
        }
    }

    pub fn step(
        &self,
        field: &mut ParticleField,
        pointer: &PointerState,
        target: Vec3,
        elapsed_sec: f32,
    ) {
        let AppearanceView {
            positions,
            base_colors,
            colors,
            base_sizes,
            sizes,
        } = field.appearance_mut();
        if pointer.active {
            for ((p, color), size) in positions.iter().zip(colors.iter_mut()).zip(sizes.iter_mut())
            {
                let dist = self.distance(*p, target);
                *color = self.color_at(dist, elapsed_sec);
                *size = self.size_at(dist);
            }
        } else {
            let t = self.relaxation_rate;
            for (color, base) in colors.iter_mut().zip(base_colors) {
                *color = color.lerp(*base, t);
            }
            for (size, base) in sizes.iter_mut().zip(base_sizes) {
                *size += (*base - *size) * t;
            }
        }
    }

    /// Pointer distance including the epsilon offset, measured like the integrator.
    #[inline]
    pub fn distance(&self, p: Vec3, target: Vec3) -> f32 {
        let d = target - p;
        let len = match self.space {
            AttractionSpace::Volume => d.length(),
            AttractionSpace::Planar => d.truncate().length(),
        };
        len + self.epsilon
    }

    #[inline]
    pub fn color_at(&self, dist: f32, elapsed_sec: f32) -> Vec3 {
        let [r, g, b] = &self.palette;
        Vec3::new(
            r.eval(dist, elapsed_sec),
            g.eval(dist, elapsed_sec),
            b.eval(dist, elapsed_sec),
        )
        .clamp(Vec3::ZERO, Vec3::ONE)
    }

    #[inline]
    pub fn size_at(&self, dist: f32) -> f32 {
        (1.0 + self.size_gain / (dist + self.size_offset)).min(self.size_cap)
    }
}
