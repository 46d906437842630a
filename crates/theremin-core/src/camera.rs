//! Fixed perspective camera shared by both frontends.
//!
//! Native builds its uniform from `view_proj`; web projects points onto a 2D
//! canvas with `project_to_screen`.

use crate::constants::{CAMERA_FOV_DEGREES, CAMERA_Z};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on +Z looking at the origin, matching the pointer world mapping.
    pub fn looking_at_origin(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized screen coordinates (0..1, y down)
    /// plus its clip-space w, or `None` when it is behind the near plane.
    pub fn project_to_screen(&self, world: Vec3) -> Option<(Vec2, f32)> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= self.znear {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some((Vec2::new(ndc.x * 0.5 + 0.5, 0.5 - ndc.y * 0.5), clip.w))
    }
}
