//! Adapter between pointer-derived audio parameters and an external synth.

use crate::pointer::AudioParams;

/// Contract the core consumes from a frontend's sound source.
///
/// Implementations own device lifecycle; failures are theirs to log.
pub trait AudioEngine {
    fn start(&mut self);
    fn stop(&mut self);
    fn set_frequency(&mut self, hz: f32);
    fn set_volume(&mut self, volume: f32);
}

impl<A: AudioEngine + ?Sized> AudioEngine for Box<A> {
    fn start(&mut self) {
        (**self).start()
    }
    fn stop(&mut self) {
        (**self).stop()
    }
    fn set_frequency(&mut self, hz: f32) {
        (**self).set_frequency(hz)
    }
    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume)
    }
}

/// Engine that makes no sound; used when no output device is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentEngine;

impl AudioEngine for SilentEngine {
    fn start(&mut self) {}
    fn stop(&mut self) {}
    fn set_frequency(&mut self, _hz: f32) {}
    fn set_volume(&mut self, _volume: f32) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeState {
    /// No sound source yet.
    Uninitialized,
    /// Source running and audible.
    Running,
    /// Source running at volume 0.
    Muted,
    /// Source stopped; terminal.
    Stopped,
}

pub struct AudioParameterBridge<A: AudioEngine> {
    engine: A,
    state: BridgeState,
}

impl<A: AudioEngine> AudioParameterBridge<A> {
    pub fn new(engine: A) -> Self {
        Self {
            engine,
            state: BridgeState::Uninitialized,
        }
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn engine(&self) -> &A {
        &self.engine
    }

    /// Pointer down: start the source on first use, then push parameters.
    pub fn activate(&mut self, params: AudioParams) {
        self.assert_live("activate");
        if self.state == BridgeState::Uninitialized {
            log::info!("[audio] starting sound source");
            self.engine.start();
        }
        self.state = BridgeState::Running;
        self.push(params);
    }

    /// Pointer move while active.
    pub fn update(&mut self, params: AudioParams) {
        self.assert_live("update");
        if self.state == BridgeState::Running {
            self.push(params);
        }
    }

    /// Pointer up or leave: mute but keep the source alive.
    pub fn release(&mut self) {
        self.assert_live("release");
        if self.state == BridgeState::Running {
            self.engine.set_volume(0.0);
            self.state = BridgeState::Muted;
        }
    }

    /// Stop the source if one was started. Later calls are no-ops.
    pub fn teardown(&mut self) {
        match self.state {
            BridgeState::Stopped => return,
            BridgeState::Running | BridgeState::Muted => {
                self.engine.set_volume(0.0);
                self.engine.stop();
                log::info!("[audio] sound source stopped");
            }
            BridgeState::Uninitialized => {}
        }
        self.state = BridgeState::Stopped;
    }

    fn push(&mut self, params: AudioParams) {
        self.engine.set_frequency(params.frequency_hz);
        self.engine.set_volume(params.volume.clamp(0.0, 1.0));
    }

    fn assert_live(&self, op: &str) {
        assert!(
            self.state != BridgeState::Stopped,
            "audio bridge `{op}` called after teardown"
        );
    }
}

impl<A: AudioEngine> Drop for AudioParameterBridge<A> {
    fn drop(&mut self) {
        self.teardown();
    }
}
