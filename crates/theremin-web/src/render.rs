//! Canvas2D painter: projects particles with the shared camera and draws
//! additive dots or translucent rotated squares.

use crate::color::css_rgb;
use glam::Vec3;
use theremin_core::render::instance_target;
use theremin_core::{Camera, InstanceBuffer, ParticleField, RenderPrimitive, RenderTarget};
use web_sys as web;

/// World-space diameter per unit of particle size.
const POINT_WORLD_SIZE: f32 = 0.04;
const CUBE_WORLD_SIZE: f32 = 0.2;

pub struct Painter {
    camera: Camera,
    primitive: RenderPrimitive,
    instances: InstanceBuffer,
}

impl RenderTarget for Painter {
    fn sync(&mut self, field: &ParticleField) {
        self.instances.sync(field);
    }
}

impl Painter {
    pub fn new(primitive: RenderPrimitive) -> Self {
        Self {
            camera: Camera::looking_at_origin(1.0),
            primitive,
            instances: instance_target(primitive),
        }
    }

    pub fn draw(
        &mut self,
        ctx: &web::CanvasRenderingContext2d,
        width: u32,
        height: u32,
    ) -> Result<(), wasm_bindgen::JsValue> {
        self.camera.set_viewport(width, height);
        let (w, h) = (width as f64, height as f64);
        // Pixels per world unit at clip w == 1
        let focal_px = h / (2.0 * (self.camera.fovy_radians as f64 * 0.5).tan());

        ctx.set_global_composite_operation("source-over")?;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str("#000");
        ctx.fill_rect(0.0, 0.0, w, h);

        let (world_size, composite) = match self.primitive {
            RenderPrimitive::Points => (POINT_WORLD_SIZE, "lighter"),
            RenderPrimitive::Cubes => (CUBE_WORLD_SIZE, "source-over"),
        };
        ctx.set_global_composite_operation(composite)?;

        for inst in &self.instances.instances {
            let Some((uv, clip_w)) = self.camera.project_to_screen(Vec3::from(inst.position))
            else {
                continue;
            };
            let (x, y) = (uv.x as f64 * w, uv.y as f64 * h);
            let px = (inst.scale * world_size) as f64 * focal_px / clip_w as f64;
            if px < 0.25 || x < -px || y < -px || x > w + px || y > h + px {
                continue;
            }
            ctx.set_fill_style_str(&css_rgb(inst.color));
            ctx.set_global_alpha(inst.color[3] as f64);
            match self.primitive {
                RenderPrimitive::Points => {
                    ctx.begin_path();
                    ctx.arc(x, y, px * 0.5, 0.0, std::f64::consts::TAU)?;
                    ctx.fill();
                }
                RenderPrimitive::Cubes => {
                    let angle = inst.rotation.iter().sum::<f32>() as f64;
                    ctx.save();
                    ctx.translate(x, y)?;
                    ctx.rotate(angle)?;
                    ctx.fill_rect(-px * 0.5, -px * 0.5, px, px);
                    ctx.restore();
                }
            }
        }
        Ok(())
    }
}
