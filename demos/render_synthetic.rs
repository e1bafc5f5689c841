//! Example: Scroll a synthetic sweep through the spectrogram.
//!
//! Generates a rising sine sweep mixed with a click track, feeds it through a
//! byte-frequency analyser and runs the render loop for a fixed number of
//! ticks, printing a summary of the resulting surface.
//!
//! Run with:
//!     RUST_LOG=debug cargo run --example render_synthetic

use anyhow::Context;
use waterfall::audio::synth::{generate_click_track, generate_sweep, mix};
use waterfall::{
    AnalysisSource, ByteFrequencyAnalyser, DrawSurface, RenderLoop, Spectrogram,
    SpectrogramConfig, StaticHost, TickBudget,
};

const CONFIG: &str = r#"{
    "id": "spectrogram",
    "use_heat_map_colors": true,
    "highlight_peaks": true,
    "min_frequency_hz": 0,
    "max_frequency_hz": 12000
}"#;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Waterfall - Synthetic Sweep Example");
    println!("===================================\n");

    let sample_rate: u32 = 44100;
    let duration_secs: f32 = 4.0;
    let fft_size = 2048;
    let hop_size = 1024;

    println!("Generating synthetic audio...");
    println!("  Sample rate: {} Hz", sample_rate);
    println!("  Duration: {} seconds", duration_secs);

    let sweep = generate_sweep(200.0, 10000.0, sample_rate, duration_secs, 0.6);
    let clicks = generate_click_track(120.0, sample_rate, duration_secs, 3000.0);
    let samples = mix(&[&sweep, &clicks]);
    println!("  Generated {} samples\n", samples.len());

    let config = SpectrogramConfig::from_json(CONFIG).context("Invalid spectrogram config")?;
    let host = StaticHost::new().with_container(config.id.clone(), 640, 360);
    let spectrogram = Spectrogram::new(config, &host).context("Failed to attach spectrogram")?;

    let source = ByteFrequencyAnalyser::new(samples, sample_rate, fft_size, hop_size)
        .context("Failed to create analyser")?;
    println!("Analyser: {} bins per frame\n", source.bin_count());

    let total_ticks = (duration_secs * sample_rate as f32 / hop_size as f32).ceil() as usize;
    let mut render_loop = RenderLoop::new(spectrogram, source);
    let mut budget = TickBudget::new(total_ticks);

    println!("Running {} ticks...", total_ticks);
    let executed = render_loop.run(&mut budget);

    let spectrogram = render_loop.spectrogram();
    let surface = spectrogram.surface();
    let background = surface.background();
    let lit = surface
        .image()
        .pixels()
        .filter(|&&p| p != background)
        .count();

    println!("\nDone!");
    println!("  Ticks executed: {}", executed);
    println!("  Surface: {}x{}", surface.width(), surface.height());
    println!("  Palette: {} colors", spectrogram.palette().len());
    println!("  Lit pixels: {}", lit);

    Ok(())
}
