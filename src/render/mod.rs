//! Tick-driven render loop.
//!
//! The loop never blocks or sleeps: every tick it asks the [`Scheduler`] for
//! the next one, pulls a frame from its [`AnalysisSource`] and draws it. The
//! host decides when ticks actually run.

use crate::audio::AnalysisSource;
use crate::spectrogram::Spectrogram;
use crate::surface::{DrawOutcome, DrawSurface, ImageSurface};

/// "Run on next tick" registration primitive.
pub trait Scheduler {
    /// Register interest in one more tick.
    fn request_tick(&mut self);
}

/// Scheduler that hands out a fixed number of ticks.
///
/// A tick only runs if it was requested, so the chain ends as soon as the
/// loop stops re-registering or the budget is spent.
#[derive(Debug, Clone)]
pub struct TickBudget {
    remaining: usize,
    pending: bool,
    requested: usize,
}

impl TickBudget {
    pub fn new(ticks: usize) -> Self {
        Self {
            remaining: ticks,
            pending: false,
            requested: 0,
        }
    }

    /// Consume a pending request, if any ticks are left.
    pub fn next_tick(&mut self) -> bool {
        if !self.pending || self.remaining == 0 {
            return false;
        }
        self.pending = false;
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Total number of requests received.
    pub fn requested(&self) -> usize {
        self.requested
    }
}

impl Scheduler for TickBudget {
    fn request_tick(&mut self) {
        self.pending = true;
        self.requested += 1;
    }
}

/// Drives a spectrogram from an analysis source, one frame per tick.
pub struct RenderLoop<A: AnalysisSource, S: DrawSurface = ImageSurface> {
    spectrogram: Spectrogram<S>,
    source: A,
    frame: Vec<u8>,
    running: bool,
    ticks: u64,
}

impl<A: AnalysisSource, S: DrawSurface> RenderLoop<A, S> {
    pub fn new(spectrogram: Spectrogram<S>, source: A) -> Self {
        Self {
            spectrogram,
            source,
            frame: Vec::new(),
            running: true,
            ticks: 0,
        }
    }

    /// Run one tick: re-register, fetch a frame, draw it.
    pub fn tick(&mut self, scheduler: &mut impl Scheduler) -> DrawOutcome {
        if self.running {
            scheduler.request_tick();
        }

        let bin_count = self.source.bin_count();
        self.frame.resize(bin_count, 0);
        self.source.fill_frame(&mut self.frame);
        let sample_rate = self.source.sample_rate();

        self.ticks += 1;
        let outcome = self.spectrogram.draw_frame(&self.frame, sample_rate);
        log::trace!("Tick {}: {:?} ({} bins)", self.ticks, outcome, bin_count);
        outcome
    }

    /// Start the tick chain and run it until the budget is spent or the loop
    /// is stopped. Returns the number of ticks executed.
    pub fn run(&mut self, budget: &mut TickBudget) -> usize {
        log::info!(
            "Starting render loop for '{}' ({} ticks available)",
            self.spectrogram.config().id,
            budget.remaining()
        );
        self.running = true;
        budget.request_tick();

        let mut executed = 0;
        while budget.next_tick() {
            self.tick(budget);
            executed += 1;
        }

        log::info!("Render loop idle after {} ticks", executed);
        executed
    }

    /// Stop re-registering; the chain ends after the current tick.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks executed since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn spectrogram(&self) -> &Spectrogram<S> {
        &self.spectrogram
    }

    /// Mutable access for update operations between ticks.
    pub fn spectrogram_mut(&mut self) -> &mut Spectrogram<S> {
        &mut self.spectrogram
    }

    pub fn source(&self) -> &A {
        &self.source
    }

    pub fn into_parts(self) -> (Spectrogram<S>, A) {
        (self.spectrogram, self.source)
    }
}
