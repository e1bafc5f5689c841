//! Integration tests for the tick-driven render loop.


use fixtures::*;
use waterfall::audio::{generate_sine, generate_sweep};
use waterfall::{
    AnalysisSource, ByteFrequencyAnalyser, DrawSurface, RenderLoop, Scheduler, Spectrogram,
    SpectrogramConfig, TickBudget,
};

const SAMPLE_RATE: u32 = 44100;

#[test]
fn test_loop_draws_one_column_per_tick() {
    let spectrogram = Spectrogram::new(small_config(), &host(6)).unwrap();
    let frames = vec![
        ramp_frame(SMALL_BINS),
        falling_frame(SMALL_BINS),
        uniform_frame(SMALL_BINS, 200),
    ];
    let source = ScriptedSource::new(frames.clone(), SMALL_SAMPLE_RATE);
    let mut render_loop = RenderLoop::new(spectrogram, source);

    let mut budget = TickBudget::new(3);
    assert_eq!(render_loop.run(&mut budget), 3);

    let spectrogram = render_loop.spectrogram();
    let surface = spectrogram.surface();
    let palette = spectrogram.palette();
    for (column, frame) in [(3u32, &frames[0]), (4, &frames[1]), (5, &frames[2])] {
        for row in 1..16usize {
            let expected = expected_color(frame, palette, 16, 0, row).unwrap();
            assert_eq!(surface.pixel(column, row as u32), Some(expected));
        }
    }
}

#[test]
fn test_updates_between_ticks_apply_to_next_frame() {
    let spectrogram = Spectrogram::new(small_config(), &host(4)).unwrap();
    let source = ScriptedSource::new(vec![uniform_frame(SMALL_BINS, 255)], SMALL_SAMPLE_RATE);
    let mut render_loop = RenderLoop::new(spectrogram, source);
    let mut budget = TickBudget::new(10);

    render_loop.tick(&mut budget);
    render_loop.spectrogram_mut().update_colors(false);
    render_loop.tick(&mut budget);

    let spectrogram = render_loop.spectrogram();
    let heat = waterfall::Palette::heat_map(true).last();
    assert_eq!(spectrogram.surface().pixel(2, 4), Some(heat));
    assert_eq!(spectrogram.surface().pixel(3, 4), Some(spectrogram.palette().last()));
    assert_eq!(budget.requested(), 2);
}

#[test]
fn test_stopped_loop_does_not_reschedule() {
    let spectrogram = Spectrogram::new(small_config(), &host(4)).unwrap();
    let source = ScriptedSource::new(vec![ramp_frame(SMALL_BINS)], SMALL_SAMPLE_RATE);
    let mut render_loop = RenderLoop::new(spectrogram, source);
    let mut budget = TickBudget::new(10);

    budget.request_tick();
    while budget.next_tick() {
        render_loop.tick(&mut budget);
        if render_loop.ticks() == 4 {
            render_loop.stop();
        }
    }

    // The fourth tick registered the fifth before stop() took effect
    assert_eq!(render_loop.ticks(), 5);
    assert!(!render_loop.is_running());
    assert_eq!(render_loop.source().served, 5);
}

#[test]
fn test_empty_source_ticks_are_skipped() {
    let spectrogram = Spectrogram::new(small_config(), &host(4)).unwrap();
    let source = ScriptedSource::new(Vec::new(), SMALL_SAMPLE_RATE);
    let mut render_loop = RenderLoop::new(spectrogram, source);

    let mut budget = TickBudget::new(3);
    assert_eq!(render_loop.run(&mut budget), 3);
    assert!(!render_loop.spectrogram().is_height_locked());
}

#[test]
fn test_sine_renders_a_horizontal_line() {
    let samples = generate_sine(2000.0, SAMPLE_RATE, 1.0, 0.8);
    let source = ByteFrequencyAnalyser::new(samples, SAMPLE_RATE, 1024, 512).unwrap();
    let bin_count = source.bin_count();
    let expected_bin = (2000.0 * 1024.0 / SAMPLE_RATE as f32).round() as usize;

    let config = SpectrogramConfig {
        max_frequency_hz: 22050.0,
        ..Default::default()
    };
    let spectrogram = Spectrogram::new(config, &host(16)).unwrap();
    let mut render_loop = RenderLoop::new(spectrogram, source);
    let mut budget = TickBudget::new(16);
    render_loop.run(&mut budget);

    let spectrogram = render_loop.spectrogram();
    let surface = spectrogram.surface();
    assert_eq!(surface.height() as usize, bin_count);

    let row = (bin_count - expected_bin) as u32;
    let loud = spectrogram.palette().last();
    for column in 0..16 {
        assert_eq!(surface.pixel(column, row), Some(loud), "column {}", column);
    }
}

#[test]
fn test_sweep_moves_upward() {
    let samples = generate_sweep(500.0, 15000.0, SAMPLE_RATE, 1.0, 0.8);
    let source = ByteFrequencyAnalyser::new(samples, SAMPLE_RATE, 1024, 2048).unwrap();
    let spectrogram = Spectrogram::new(SpectrogramConfig::default(), &host(20)).unwrap();
    let mut render_loop = RenderLoop::new(spectrogram, source);
    let mut budget = TickBudget::new(20);
    render_loop.run(&mut budget);

    let surface = render_loop.spectrogram().surface();
    let background = surface.background();
    let topmost_lit = |column: u32| {
        surface
            .column(column)
            .iter()
            .position(|&p| p != background)
            .unwrap_or(usize::MAX)
    };

    // Higher frequencies sit closer to row 0
    assert!(topmost_lit(19) < topmost_lit(0));
}
