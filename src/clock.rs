//! Time source for the animation.
//!
//! Rendering only ever needs two things from time: a blocking pause between
//! steps and the elapsed time for the remaining-time estimate. Both go
//! through [`Clock`] so tests can run without sleeping.

use std::thread;
use std::time::{Duration, Instant};

/// Blocking sleep plus a monotonic elapsed-time reading.
pub trait Clock {
    /// Block the current thread for `duration`.
    fn sleep(&mut self, duration: Duration);

    /// Time elapsed since the clock was created.
    fn elapsed(&self) -> Duration;
}

/// Wall clock backed by `std::thread::sleep`.
#[derive(Debug, Clone)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Clock that advances only when slept on, and records every sleep.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    elapsed: Duration,
    sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every duration passed to [`Clock::sleep`], in call order.
    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.sleeps.push(duration);
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
