//! Inter-tick pacing, kept outside the scheduler's pure logic.
//!
//! A fixed sleep between ticks lets a human follow the console log.  The
//! delay is a strategy injected into [`Sim::run`][crate::Sim::run]: the core
//! loop stays wall-clock-free and tests run at full speed with [`NoPacer`].
//!
//! The pause happens strictly between ticks — never inside the tick body —
//! so scheduler state is always consistent while paused.

use std::time::Duration;

use cq_core::Tick;

/// Strategy for pausing between simulation ticks.
pub trait Pacer {
    /// Called after each completed tick except the final one.
    fn pause(&mut self, tick: Tick);
}

/// Run at full speed.  The default for tests and batch runs.
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self, _tick: Tick) {}
}

/// Sleep a fixed duration between ticks for human-readable output pacing.
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, _tick: Tick) {
        std::thread::sleep(self.delay);
    }
}
