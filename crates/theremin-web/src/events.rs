use crate::input;
use crate::App;
use theremin_core::PointerEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn dispatch(app: &App, event: PointerEvent) {
    if let Some(engine) = app.borrow_mut().as_mut() {
        engine.handle_pointer(event);
    }
}

fn listen(
    canvas: &web::HtmlCanvasElement,
    name: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Route canvas pointer events into the engine. Audio starts lazily on the
/// first `pointerdown`, which is also the browser's user gesture.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, app: &App) {
    {
        let app = app.clone();
        let target = canvas.clone();
        listen(canvas, "pointerdown", move |ev| {
            if let Some((x, y)) = input::pointer_canvas_uv(&ev, &target) {
                dispatch(&app, PointerEvent::Down { x, y });
            }
            ev.prevent_default();
        });
    }
    {
        let app = app.clone();
        let target = canvas.clone();
        // Touch pointers are implicitly captured, so `pointerleave` does not
        // fire mid-drag; leaving the rect mutes instead.
        listen(canvas, "pointermove", move |ev| {
            let event = match input::pointer_canvas_uv(&ev, &target) {
                Some((x, y)) => PointerEvent::Move { x, y },
                None => PointerEvent::Leave,
            };
            dispatch(&app, event);
        });
    }
    for name in ["pointerup", "pointercancel"] {
        let app = app.clone();
        listen(canvas, name, move |_| dispatch(&app, PointerEvent::Up));
    }
    {
        let app = app.clone();
        listen(canvas, "pointerleave", move |_| {
            dispatch(&app, PointerEvent::Leave)
        });
    }
}

/// Tear the engine down when the page is hidden for good.
pub fn wire_teardown(window: &web::Window, app: &App) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(engine) = app.borrow_mut().take() {
            engine.shutdown();
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
