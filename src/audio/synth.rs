//! Synthetic audio generation.
//!
//! Test signals (sine tones, sweeps, noise, click tracks) for driving the
//! spectrogram in demos, benchmarks and tests.

use std::f32::consts::PI;

/// Generate a sine wave.
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `duration` - Duration in seconds
/// * `amplitude` - Amplitude (0.0 to 1.0)
pub fn generate_sine(frequency: f32, sample_rate: u32, duration: f32, amplitude: f32) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            amplitude * (2.0 * PI * frequency * t).sin()
        })
        .collect()
}

/// Generate a linear frequency sweep from `start_freq` to `end_freq`.
///
/// Phase is accumulated per sample so the sweep stays continuous.
pub fn generate_sweep(
    start_freq: f32,
    end_freq: f32,
    sample_rate: u32,
    duration: f32,
    amplitude: f32,
) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    let mut phase = 0.0f32;

    (0..num_samples)
        .map(|i| {
            let progress = i as f32 / num_samples.max(1) as f32;
            let freq = start_freq + (end_freq - start_freq) * progress;
            let sample = amplitude * phase.sin();
            phase = (phase + 2.0 * PI * freq / sample_rate as f32) % (2.0 * PI);
            sample
        })
        .collect()
}

/// Generate white noise.
///
/// Uses a simple linear congruential generator for reproducibility.
pub fn generate_white_noise(
    sample_rate: u32,
    duration: f32,
    amplitude: f32,
    seed: u64,
) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;

    let mut state = seed;
    let a: u64 = 6364136223846793005;
    let c: u64 = 1442695040888963407;

    (0..num_samples)
        .map(|_| {
            state = state.wrapping_mul(a).wrapping_add(c);
            let normalized = (state as f32 / u64::MAX as f32) * 2.0 - 1.0;
            amplitude * normalized
        })
        .collect()
}

/// Generate a click track (metronome).
///
/// Creates short decaying sine clicks at regular intervals based on BPM.
pub fn generate_click_track(
    bpm: f32,
    sample_rate: u32,
    duration: f32,
    click_freq: f32,
) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    let samples_per_beat = ((60.0 / bpm * sample_rate as f32) as usize).max(1);
    let click_samples = (sample_rate as f32 * 0.01) as usize; // 10ms click

    let mut samples = vec![0.0; num_samples];

    let mut pos = 0;
    while pos < num_samples {
        for i in 0..click_samples.min(num_samples - pos) {
            let t = i as f32 / sample_rate as f32;
            let envelope = (1.0 - i as f32 / click_samples as f32).powi(2);
            samples[pos + i] = envelope * (2.0 * PI * click_freq * t).sin();
        }
        pos += samples_per_beat;
    }

    samples
}

/// Sum signals sample by sample; the result is as long as the longest input.
pub fn mix(signals: &[&[f32]]) -> Vec<f32> {
    let len = signals.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut mixed = vec![0.0; len];
    for signal in signals {
        for (out, &sample) in mixed.iter_mut().zip(signal.iter()) {
            *out += sample;
        }
    }
    mixed
}
