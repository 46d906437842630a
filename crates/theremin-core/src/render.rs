//! Render-side copies of the particle field.
//!
//! The field owns canonical state; a `RenderTarget` is refreshed from it once
//! per frame in whatever layout the host uploads to the GPU.

use crate::config::RenderPrimitive;
use crate::field::ParticleField;

pub trait RenderTarget {
    /// Copy the field's current state into this target.
    fn sync(&mut self, field: &ParticleField);
}

/// Separate attribute arrays for a point cloud:
/// positions `N×3`, colors `N×3`, sizes `N`.
#[derive(Clone, Debug, Default)]
pub struct PointBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub sizes: Vec<f32>,
    /// Bumped on every sync; hosts compare it to skip redundant uploads.
    pub generation: u64,
}

impl PointBuffers {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            colors: Vec::with_capacity(count * 3),
            sizes: Vec::with_capacity(count),
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl RenderTarget for PointBuffers {
    fn sync(&mut self, field: &ParticleField) {
        self.positions.clear();
        self.positions.extend_from_slice(field.positions_flat());
        self.colors.clear();
        self.colors.extend_from_slice(field.colors_flat());
        self.sizes.clear();
        self.sizes.extend_from_slice(field.sizes());
        self.generation += 1;
    }
}

/// Per-instance data for instanced meshes; matches `particles.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub position: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub rotation: [f32; 3],
    pub _pad: f32,
}

#[derive(Clone, Debug, Default)]
pub struct InstanceBuffer {
    pub instances: Vec<InstanceRaw>,
    pub alpha: f32,
    pub generation: u64,
}

impl InstanceBuffer {
    pub fn new(alpha: f32) -> Self {
        Self {
            instances: Vec::new(),
            alpha,
            generation: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl RenderTarget for InstanceBuffer {
    fn sync(&mut self, field: &ParticleField) {
        let alpha = self.alpha;
        self.instances.clear();
        self.instances.extend(
            field
                .positions()
                .iter()
                .zip(field.colors())
                .zip(field.sizes())
                .zip(field.rotations())
                .map(|(((p, c), s), r)| InstanceRaw {
                    position: p.to_array(),
                    scale: *s,
                    color: c.extend(alpha).to_array(),
                    rotation: r.to_array(),
                    _pad: 0.0,
                }),
        );
        self.generation += 1;
    }
}

/// Instance layout for either primitive; points get a fixed alpha of 1.
pub fn instance_target(primitive: RenderPrimitive) -> InstanceBuffer {
    match primitive {
        RenderPrimitive::Points => InstanceBuffer::new(1.0),
        RenderPrimitive::Cubes => InstanceBuffer::new(0.8),
    }
}
