use crate::surface::surface_uv;
use web_sys as web;

/// Pointer position in canvas space normalized to [0, 1], y down, or `None`
/// once the pointer is outside the canvas.
#[inline]
pub fn pointer_canvas_uv(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
) -> Option<(f32, f32)> {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    surface_uv(x_css, y_css, rect.width() as f32, rect.height() as f32)
}
