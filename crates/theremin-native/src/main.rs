mod audio;
mod gpu;

use std::time::{Instant, SystemTime, UNIX_EPOCH};
use theremin_core::{Config, PointerEvent, ThereminEngine};
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use audio::CpalEngine;
use gpu::GpuState;

fn normalized(position: PhysicalPosition<f64>, size: PhysicalSize<u32>) -> (f32, f32) {
    let x = position.x / size.width.max(1) as f64;
    let y = position.y / size.height.max(1) as f64;
    (x as f32, y as f32)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // First argument selects the preset: `points` (default) or `cubes`
    let preset = std::env::args().nth(1).unwrap_or_else(|| "points".into());
    let config = Config::preset(&preset)
        .ok_or_else(|| anyhow::anyhow!("unknown preset `{preset}`, expected `points` or `cubes`"))?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let audio = CpalEngine::new(config.f_min);
    let engine = ThereminEngine::new(config, audio, seed)?;
    log::info!("[native] preset `{preset}`, seed {seed}");

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Theremin Field")
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, engine.config()))?;
    let mut engine = Some(engine);
    let mut cursor = (0.5_f32, 0.5_f32);
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => {
            let pointer = match event {
                WindowEvent::Resized(size) => {
                    state.resize(size);
                    None
                }
                WindowEvent::CloseRequested => {
                    if let Some(engine) = engine.take() {
                        engine.shutdown();
                    }
                    elwt.exit();
                    None
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = normalized(position, state.window.inner_size());
                    Some(PointerEvent::Move {
                        x: cursor.0,
                        y: cursor.1,
                    })
                }
                WindowEvent::CursorLeft { .. } => Some(PointerEvent::Leave),
                WindowEvent::MouseInput {
                    state: button_state,
                    button: MouseButton::Left,
                    ..
                } => Some(match button_state {
                    ElementState::Pressed => PointerEvent::Down {
                        x: cursor.0,
                        y: cursor.1,
                    },
                    ElementState::Released => PointerEvent::Up,
                }),
                WindowEvent::Touch(touch) => {
                    cursor = normalized(touch.location, state.window.inner_size());
                    let (x, y) = cursor;
                    Some(match touch.phase {
                        TouchPhase::Started => PointerEvent::Down { x, y },
                        TouchPhase::Moved => PointerEvent::Move { x, y },
                        TouchPhase::Ended | TouchPhase::Cancelled => PointerEvent::Up,
                    })
                }
                _ => None,
            };
            if let (Some(event), Some(engine)) = (pointer, engine.as_mut()) {
                engine.handle_pointer(event);
            }
        }
        Event::AboutToWait => {
            let Some(engine) = engine.as_mut() else {
                return;
            };
            let now = Instant::now();
            engine.frame(now - last_frame);
            last_frame = now;
            engine.sync(&mut state.instances);
            match state.render() {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        Event::LoopExiting => {
            if let Some(engine) = engine.take() {
                engine.shutdown();
            }
        }
        _ => {}
    })?;
    Ok(())
}
