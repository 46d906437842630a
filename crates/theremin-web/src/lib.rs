#![cfg(target_arch = "wasm32")]
//! Browser front-end: a Canvas2D view of the particle field with a WebAudio
//! oscillator, both driven by the same pointer.

mod audio;
mod color;
mod dom;
mod events;
mod frame;
mod input;
mod query;
mod render;
mod surface;

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use theremin_core::{Config, ThereminEngine};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Engine shared by event handlers and the frame loop; `None` after teardown.
pub(crate) type App = Rc<RefCell<Option<ThereminEngine<audio::WebAudioEngine>>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("theremin-web starting");

    init().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::wire_resize(&window, &canvas);

    let preset = dom::query_param(&window, "preset").unwrap_or_else(|| "points".into());
    let config = Config::preset(&preset).unwrap_or_else(|| {
        log::warn!("unknown preset `{preset}`; using points");
        Config::point_cloud()
    });
    let primitive = config.primitive;
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let audio = audio::WebAudioEngine::new(config.f_min);
    let engine = ThereminEngine::new(config, audio, seed)?;
    log::info!("[web] preset `{preset}`, seed {seed}");

    let app: App = Rc::new(RefCell::new(Some(engine)));
    events::wire_pointer_handlers(&canvas, &app);
    events::wire_teardown(&window, &app);

    frame::start_loop(frame::FrameContext {
        app,
        canvas,
        ctx,
        painter: render::Painter::new(primitive),
        last_instant: Instant::now(),
    });
    Ok(())
}
