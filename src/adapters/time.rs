//! Host clock adapters.
//!
//! - [`StdDelay`]: blocking `embedded_hal` delay on `std::thread::sleep`.
//! - [`DeadlinePacer`]: sleeps until a tick has lasted its minimum duration.
//!
//! Both run on Linux (the Pi) and on a development host alike.

use std::thread;
use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::app::ports::TickPacer;

/// Blocking delay backed by the OS scheduler.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl StdDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Sleep-until-deadline tick pacing.
///
/// A tick that already ran past its minimum (for example because of the
/// mode-change blink) is not padded further, and the next tick starts
/// immediately.
pub struct DeadlinePacer {
    tick_start: Instant,
    overruns: u64,
}

impl Default for DeadlinePacer {
    fn default() -> Self {
        Self::new()
    }
}

impl DeadlinePacer {
    pub fn new() -> Self {
        Self {
            tick_start: Instant::now(),
            overruns: 0,
        }
    }

    /// Ticks that took longer than their minimum.
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Time left until `deadline`, or `None` if it has passed.
    fn remaining(deadline: Instant, now: Instant) -> Option<Duration> {
        deadline.checked_duration_since(now).filter(|d| !d.is_zero())
    }
}

impl TickPacer for DeadlinePacer {
    fn pace(&mut self, min_tick: Duration) {
        let deadline = self.tick_start + min_tick;
        match Self::remaining(deadline, Instant::now()) {
            Some(left) => thread::sleep(left),
            None => {
                self.overruns += 1;
                debug!(
                    "tick overran its {} ms minimum by {} ms",
                    min_tick.as_millis(),
                    self.tick_start.elapsed().saturating_sub(min_tick).as_millis()
                );
            }
        }
        self.tick_start = Instant::now();
    }
}
