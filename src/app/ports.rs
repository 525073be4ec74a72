//! Port traits: the hexagonal boundary between the mode engine and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ModeEngine (domain)
//! ```
//!
//! Driven adapters (GPIO, PWM, event sinks, tick pacing) implement these
//! traits. The [`ModeEngine`](super::service::ModeEngine) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! Peripheral reads and writes are infallible at this boundary. Adapters
//! that can fail log the failure and fall back to a safe value.

use core::time::Duration;

use super::events::AppEvent;

/// Electrical level of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

impl Level {
    pub fn from_high(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }

    pub fn is_high(self) -> bool {
        self == Self::High
    }
}

// ───────────────────────────────────────────────────────────────
// Digital I/O port (driven adapter: domain ↔ GPIO)
// ───────────────────────────────────────────────────────────────

/// Pin-addressed digital input/output.
pub trait DigitalIo {
    /// Sample the current level of an input pin.
    fn read_digital_input(&mut self, pin: u8) -> Level;

    /// Drive an output pin.
    fn write_digital_output(&mut self, pin: u8, level: Level);
}

// ───────────────────────────────────────────────────────────────
// PWM port (driven adapter: domain → servo)
// ───────────────────────────────────────────────────────────────

/// Mark-space PWM output with a fixed 20 ms frame.
pub trait PwmOutput {
    /// Set the high time of `channel` in microseconds. The adapter converts
    /// this into whatever units its peripheral expects.
    fn set_pwm_pulse(&mut self, channel: u8, micros: u16);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`AppEvent`]s through this port. Adapters decide
/// where they go.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Tick pacing (driven adapter: control loop → clock)
// ───────────────────────────────────────────────────────────────

/// Enforces a minimum duration per control-loop iteration.
pub trait TickPacer {
    /// Block until at least `min_tick` has passed since the previous call
    /// returned (or since construction, for the first call).
    fn pace(&mut self, min_tick: Duration);
}
