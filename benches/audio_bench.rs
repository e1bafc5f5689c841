//! Benchmarks for analysis sources.

use criterion::{black_box, BatchSize, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use waterfall::audio::synth::{generate_sine, generate_white_noise};
use waterfall::audio::{AnalysisSource, ByteFrequencyAnalyser, SpectrumAnalyzer};

const SAMPLE_RATE: u32 = 44100;

fn bench_fft_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("FFT Analysis");
    let samples = generate_sine(1000.0, SAMPLE_RATE, 1.0, 1.0);

    for fft_size in [512, 1024, 2048, 4096] {
        group.throughput(Throughput::Elements(fft_size as u64));
        group.bench_with_input(BenchmarkId::new("analyze", fft_size), &fft_size, |b, &size| {
            let mut analyzer = match SpectrumAnalyzer::new(size) {
                Ok(a) => a,
                Err(e) => panic!("benchmark setup failed: {}", e),
            };
            b.iter(|| black_box(analyzer.analyze(&samples)));
        });
    }

    group.finish();
}

fn bench_byte_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("Byte Frames");
    let samples = generate_white_noise(SAMPLE_RATE, 1.0, 0.5, 42);

    for fft_size in [1024, 2048] {
        group.bench_with_input(
            BenchmarkId::new("fill_frame", fft_size),
            &fft_size,
            |b, &size| {
                b.iter_batched(
                    || match ByteFrequencyAnalyser::new(samples.clone(), SAMPLE_RATE, size, 512) {
                        Ok(s) => s,
                        Err(e) => panic!("benchmark setup failed: {}", e),
                    },
                    |mut source| {
                        let mut frame = vec![0u8; source.bin_count()];
                        source.fill_frame(&mut frame);
                        black_box(frame)
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fft_analysis, bench_byte_frames);
criterion_main!(benches);
