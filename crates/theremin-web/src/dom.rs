use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn wire_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    let closure = Closure::wrap(
        Box::new(move || sync_canvas_backing_size(&canvas)) as Box<dyn FnMut()>
    );
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Value of `key` in the page query string, e.g. `?preset=cubes`.
pub fn query_param(window: &web::Window, key: &str) -> Option<String> {
    let search = window.location().search().ok()?;
    crate::query::query_param(&search, key)
}
