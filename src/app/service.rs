//! Mode engine: the hexagonal core.
//!
//! [`ModeEngine`] owns the mode machine, the servo and LED drivers, and the
//! configuration. All I/O flows through port traits injected at call sites,
//! making the whole engine testable with mock adapters.
//!
//! ```text
//!  DigitalIo ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                │       ModeEngine       │
//!  PwmOutput ◀── │  edge · FSM · sweep    │ ◀── DelayNs (ack blink)
//!                └────────────────────────┘
//! ```
//!
//! ## Latency
//!
//! A mode change blocks for the acknowledgement blink (2 × 200 ms by
//! default) before the new mode's first output. Button presses during the
//! blink are not seen; the next sample after it is compared against the
//! sample that triggered the change.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::ControllerConfig;
use crate::control::sweep::SweepState;
use crate::drivers::button::ButtonLevel;
use crate::drivers::servo::ServoDriver;
use crate::drivers::status_led::StatusLed;
use crate::error::Result;
use crate::fsm::context::MachineState;
use crate::fsm::states::build_mode_table;
use crate::fsm::{Fsm, Mode};

use super::events::AppEvent;
use super::ports::{DigitalIo, EventSink, PwmOutput};

/// What one tick actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Mode whose output was applied.
    pub mode: Mode,
    /// `true` if this tick's button sample changed the mode.
    pub mode_changed: bool,
    /// Pulse width written to the servo, after clamping.
    pub pulse_us: u16,
    /// LED state written.
    pub led_on: bool,
    /// Minimum duration the control loop should give this tick.
    pub min_tick: Duration,
}

/// The application service orchestrating all domain logic.
pub struct ModeEngine {
    fsm: Fsm,
    config: ControllerConfig,
    servo: ServoDriver,
    led: StatusLed,
    tick_count: u64,
}

impl ModeEngine {
    /// Construct the engine in its power-on state (Idle, sweep at 0°).
    ///
    /// Fails with [`Error::Config`](crate::error::Error::Config) if `config`
    /// does not pass [`ControllerConfig::validate`].
    pub fn new(config: ControllerConfig) -> Result<Self> {
        Self::with_state(config, MachineState::new())
    }

    /// Construct the engine from an explicit machine state.
    pub fn with_state(config: ControllerConfig, state: MachineState) -> Result<Self> {
        config.validate()?;
        let servo = ServoDriver::new(&config);
        let led = StatusLed::new(config.led_pin);
        Ok(Self {
            fsm: Fsm::new(build_mode_table(), state),
            config,
            servo,
            led,
            tick_count: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the initial mode.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        let mode = self.fsm.current_mode();
        sink.emit(&AppEvent::Started(mode));
        info!("ModeEngine started in {}", mode);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control cycle: sample button → maybe change mode → output.
    ///
    /// The `hw` parameter satisfies **both** [`DigitalIo`] and
    /// [`PwmOutput`], which avoids a double mutable borrow while keeping
    /// the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl DigitalIo + PwmOutput),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> TickReport {
        self.tick_count += 1;

        // 1. Edge detection; the previous sample is replaced every tick
        let level = hw.read_digital_input(self.config.button_pin);
        let pressed = self
            .fsm
            .state_mut()
            .button
            .sample(ButtonLevel::from_active_low(level));

        // 2. Transition + acknowledgement
        if pressed {
            let (from, to) = self.fsm.advance();
            sink.emit(&AppEvent::ModeChanged { from, to });
            self.led.acknowledge(
                hw,
                delay,
                self.config.blink_count,
                self.config.blink_half_period_ms,
            );
        }

        // 3. Mode output
        let out = self.fsm.output(&self.config);
        let pulse_us = self.servo.set_pulse(hw, out.pulse_us);
        self.led.set(hw, out.led_on);

        let report = TickReport {
            mode: self.fsm.current_mode(),
            mode_changed: pressed,
            pulse_us,
            led_on: out.led_on,
            min_tick: out.min_tick,
        };
        debug!(
            "tick {} | mode={} pulse={}µs led={}",
            self.tick_count,
            report.mode,
            report.pulse_us,
            if report.led_on { "on" } else { "off" },
        );
        report
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.fsm.current_mode()
    }

    pub fn sweep(&self) -> SweepState {
        self.fsm.state().sweep
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
