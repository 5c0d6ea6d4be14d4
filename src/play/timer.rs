//! Wall-clock timing for a session.
//!
//! The stopwatch reads time through the [`Clock`] trait so tests can drive it
//! with a [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of the current time, as a duration since the Unix epoch.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to a stopwatch.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    current_time: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new(start_time: Duration) -> Self {
        Self {
            current_time: Rc::new(Cell::new(start_time)),
        }
    }

    pub fn advance(&self, amount: Duration) {
        self.current_time.set(self.current_time.get() + amount);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.current_time.get()
    }
}

/// Stopwatch reporting elapsed whole seconds.
#[derive(Clone, Debug)]
pub struct Stopwatch<C: Clock> {
    clock: C,
    started_at: Option<Duration>,
    accumulated: Duration,
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            started_at: None,
            accumulated: Duration::ZERO,
        }
    }

    /// Start timing. Does nothing if already running.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
        }
    }

    /// Stop timing, keeping the elapsed time.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += self.clock.now().saturating_sub(started_at);
        }
    }

    /// Stop and zero the stopwatch.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Elapsed time in whole seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        let running = self
            .started_at
            .map_or(Duration::ZERO, |started_at| self.clock.now().saturating_sub(started_at));
        (self.accumulated + running).as_secs()
    }

    /// The clock this stopwatch reads.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
