use theremin_core::AudioEngine;
use web_sys as web;

/// Single sine oscillator through one gain node, created on first `start`.
struct Graph {
    ctx: web::AudioContext,
    osc: web::OscillatorNode,
    gain: web::GainNode,
}

fn build_graph(frequency_hz: f32) -> Result<Graph, wasm_bindgen::JsValue> {
    let ctx = web::AudioContext::new()?;
    let gain = web::GainNode::new(&ctx)?;
    gain.gain().set_value(0.0);
    gain.connect_with_audio_node(&ctx.destination())?;

    let osc = web::OscillatorNode::new(&ctx)?;
    osc.set_type(web::OscillatorType::Sine);
    osc.frequency().set_value(frequency_hz);
    osc.connect_with_audio_node(&gain)?;
    osc.start()?;

    // Contexts created outside a gesture start suspended on some browsers
    if ctx.state() == web::AudioContextState::Suspended {
        let _ = ctx.resume();
    }
    Ok(Graph { ctx, osc, gain })
}

pub struct WebAudioEngine {
    graph: Option<Graph>,
    initial_hz: f32,
}

impl WebAudioEngine {
    pub fn new(initial_hz: f32) -> Self {
        Self {
            graph: None,
            initial_hz,
        }
    }
}

impl AudioEngine for WebAudioEngine {
    fn start(&mut self) {
        match build_graph(self.initial_hz) {
            Ok(graph) => {
                log::info!("[audio] context at {} Hz", graph.ctx.sample_rate());
                self.graph = Some(graph);
            }
            Err(e) => log::error!("[audio] WebAudio init error: {:?}", e),
        }
    }

    fn stop(&mut self) {
        let Some(graph) = self.graph.take() else {
            return;
        };
        let _ = graph.osc.stop();
        let _ = graph.osc.disconnect();
        let _ = graph.gain.disconnect();
        let _ = graph.ctx.close();
    }

    fn set_frequency(&mut self, hz: f32) {
        if let Some(g) = &self.graph {
            let _ = g
                .osc
                .frequency()
                .set_value_at_time(hz, g.ctx.current_time());
        }
    }

    fn set_volume(&mut self, volume: f32) {
        if let Some(g) = &self.graph {
            let _ = g.gain.gain().set_value_at_time(volume, g.ctx.current_time());
        }
    }
}
