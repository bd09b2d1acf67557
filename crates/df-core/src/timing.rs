//! Lightweight stage timing.
//!
//! Timers are inert unless enabled via `DF_TIMING` or [`enable_timing`].
//! Results are reported through `tracing` at info level.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable stage timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("DF_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
    enabled: bool,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            enabled: is_enabled(),
        }
    }

    /// Stop the timer. Returns None if timing is disabled.
    pub fn stop(self) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        let elapsed = self.start.elapsed();
        tracing::debug!(stage = self.label, elapsed_us = elapsed.as_micros() as u64, "stage finished");
        Some(elapsed)
    }
}

/// Per-run stage durations, collected by the CLI.
#[derive(Debug, Default)]
pub struct StageTimings {
    stages: Vec<(&'static str, Duration)>,
}

impl StageTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` under a timer named `label`, recording the duration when enabled.
    pub fn measure<T>(&mut self, label: &'static str, f: impl FnOnce() -> T) -> T {
        let timer = Timer::start(label);
        let out = f();
        if let Some(elapsed) = timer.stop() {
            self.stages.push((label, elapsed));
        }
        out
    }

    pub fn stages(&self) -> &[(&'static str, Duration)] {
        &self.stages
    }

    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, d)| *d).sum()
    }

    /// Log a summary of all recorded stages.
    pub fn report(&self) {
        if self.stages.is_empty() {
            return;
        }
        for (label, elapsed) in &self.stages {
            tracing::info!(stage = *label, elapsed_us = elapsed.as_micros() as u64, "stage timing");
        }
        tracing::info!(total_us = self.total().as_micros() as u64, "total timed");
    }
}
