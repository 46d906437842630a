//! Native sine synth on cpal, driven through the core `AudioEngine` contract.
//!
//! The output stream is opened lazily on `start`, so a run that never presses
//! the pointer never touches the audio device. Parameter changes are applied
//! per sample through a short one-pole glide to avoid clicks.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};
use theremin_core::AudioEngine;

/// Glide time constant for frequency and gain changes.
const SMOOTHING_SEC: f32 = 0.01;
/// Master headroom applied on top of the bridge volume.
const OUTPUT_GAIN: f32 = 0.3;

#[derive(Clone, Copy, Debug)]
struct SynthParams {
    frequency_hz: f32,
    volume: f32,
}

/// Oscillator state owned by the audio callback.
#[derive(Debug)]
struct Voice {
    sample_rate: f32,
    coeff: f32,
    phase: f32,
    frequency_hz: f32,
    gain: f32,
}

impl Voice {
    fn new(sample_rate: f32, frequency_hz: f32) -> Self {
        Self {
            sample_rate,
            coeff: 1.0 - (-1.0 / (SMOOTHING_SEC * sample_rate)).exp(),
            phase: 0.0,
            frequency_hz,
            gain: 0.0,
        }
    }

    /// Advance one sample toward the given targets and return it.
    fn next_sample(&mut self, target_hz: f32, target_volume: f32) -> f32 {
        self.frequency_hz += (target_hz - self.frequency_hz) * self.coeff;
        self.gain += (target_volume - self.gain) * self.coeff;
        let out = self.phase.sin() * self.gain * OUTPUT_GAIN;
        self.phase += std::f32::consts::TAU * self.frequency_hz / self.sample_rate;
        if self.phase > std::f32::consts::TAU {
            self.phase -= std::f32::consts::TAU;
        }
        out
    }

    #[cfg(test)]
    fn gain(&self) -> f32 {
        self.gain
    }
}

pub struct CpalEngine {
    targets: Arc<Mutex<SynthParams>>,
    stream: Option<cpal::Stream>,
}

impl CpalEngine {
    pub fn new(frequency_hz: f32) -> Self {
        Self {
            targets: Arc::new(Mutex::new(SynthParams {
                frequency_hz,
                volume: 0.0,
            })),
            stream: None,
        }
    }

    fn update(&self, f: impl FnOnce(&mut SynthParams)) {
        if let Ok(mut targets) = self.targets.lock() {
            f(&mut targets);
        }
    }
}

impl AudioEngine for CpalEngine {
    fn start(&mut self) {
        match open_stream(Arc::clone(&self.targets)) {
            Ok(stream) => self.stream = Some(stream),
            // Keep running silently; the visuals do not depend on sound.
            Err(err) => log::warn!("[audio] no output stream: {err:#}"),
        }
    }

    fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(err) = stream.pause() {
                log::warn!("[audio] pause failed: {err}");
            }
        }
    }

    fn set_frequency(&mut self, hz: f32) {
        self.update(|t| t.frequency_hz = hz);
    }

    fn set_volume(&mut self, volume: f32) {
        self.update(|t| t.volume = volume);
    }
}

fn open_stream(targets: Arc<Mutex<SynthParams>>) -> anyhow::Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("no default output device"))?;
    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate().0 as f32;
    log::info!(
        "[audio] output {} Hz, {} ch, {:?}",
        sample_rate,
        config.channels(),
        config.sample_format()
    );

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), targets)?,
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), targets)?,
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), targets)?,
        other => anyhow::bail!("unsupported sample format {other:?}"),
    };
    stream.play()?;
    Ok(stream)
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    targets: Arc<Mutex<SynthParams>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let channels = config.channels as usize;
    let initial_hz = targets.lock().map(|t| t.frequency_hz).unwrap_or(440.0);
    let mut voice = Voice::new(config.sample_rate.0 as f32, initial_hz);
    let err_fn = |err| log::error!("[audio] stream error: {err}");

    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            // Snapshot once per buffer; fall back to silence if poisoned
            let t = targets.lock().map(|t| *t).unwrap_or(SynthParams {
                frequency_hz: voice.frequency_hz,
                volume: 0.0,
            });
            for frame in data.chunks_mut(channels) {
                let sample = T::from_sample(voice.next_sample(t.frequency_hz, t.volume));
                frame.fill(sample);
            }
        },
        err_fn,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_glides_toward_target_gain() {
        let mut voice = Voice::new(48_000.0, 440.0);
        let mut prev = voice.gain();
        for _ in 0..480 {
            voice.next_sample(440.0, 1.0);
            assert!(voice.gain() >= prev);
            prev = voice.gain();
        }
        // After one time constant the glide is ~63% of the way
        assert!((voice.gain() - 0.632).abs() < 0.01);
    }

    #[test]
    fn voice_output_is_bounded() {
        let mut voice = Voice::new(44_100.0, 220.0);
        for i in 0..44_100 {
            let hz = if i % 2_000 < 1_000 { 880.0 } else { 220.0 };
            let s = voice.next_sample(hz, 1.0);
            assert!(s.abs() <= OUTPUT_GAIN + 1e-6);
        }
    }

    #[test]
    fn muted_voice_decays_to_silence() {
        let mut voice = Voice::new(48_000.0, 440.0);
        for _ in 0..4_800 {
            voice.next_sample(440.0, 1.0);
        }
        for _ in 0..48_000 {
            voice.next_sample(440.0, 0.0);
        }
        assert!(voice.gain() < 1e-4);
    }
}
