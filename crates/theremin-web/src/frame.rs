use crate::render::Painter;
use crate::App;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: App,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub painter: Painter,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Advance the engine one frame and repaint. Returns `false` once the
    /// engine has been torn down.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        {
            let mut app = self.app.borrow_mut();
            let Some(engine) = app.as_mut() else {
                return false;
            };
            engine.frame(dt);
            engine.sync(&mut self.painter);
        }
        if let Err(e) = self
            .painter
            .draw(&self.ctx, self.canvas.width(), self.canvas.height())
        {
            log::error!("[frame] draw error: {:?}", e);
        }
        true
    }
}

pub fn start_loop(frame_ctx: FrameContext) {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow_mut().frame() {
            log::info!("[frame] engine stopped; ending loop");
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
