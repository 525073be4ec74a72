//! Control loop driver.
//!
//! Owns the engine and every adapter, and repeats ticks forever. Each tick
//! is paced to the minimum duration requested by the active mode; this is
//! the only timing mechanism in the system.

use embedded_hal::delay::DelayNs;

use super::ports::{DigitalIo, EventSink, PwmOutput, TickPacer};
use super::service::{ModeEngine, TickReport};

pub struct ControlLoop<H, D, S, P> {
    engine: ModeEngine,
    hw: H,
    delay: D,
    sink: S,
    pacer: P,
    ticks: u64,
}

impl<H, D, S, P> ControlLoop<H, D, S, P>
where
    H: DigitalIo + PwmOutput,
    D: DelayNs,
    S: EventSink,
    P: TickPacer,
{
    /// Starts the engine (emitting its initial mode) and takes ownership of
    /// the adapters.
    pub fn new(mut engine: ModeEngine, hw: H, delay: D, mut sink: S, pacer: P) -> Self {
        engine.start(&mut sink);
        Self {
            engine,
            hw,
            delay,
            sink,
            pacer,
            ticks: 0,
        }
    }

    /// One tick followed by pacing.
    pub fn step(&mut self) -> TickReport {
        let report = self
            .engine
            .tick(&mut self.hw, &mut self.delay, &mut self.sink);
        self.pacer.pace(report.min_tick);
        self.ticks += 1;
        report
    }

    /// Loop forever. Termination is external (signal or power-off).
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn engine(&self) -> &ModeEngine {
        &self.engine
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }
}
