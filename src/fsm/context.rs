//! Mutable machine state threaded through every mode handler.
//!
//! `MachineState` is owned by the [`Fsm`](super::Fsm) and lent out by
//! exclusive reference for the duration of one tick. Nothing else holds it.

use core::time::Duration;

use super::Mode;
use crate::control::sweep::SweepState;
use crate::drivers::button::EdgeDetector;

/// Everything the controller remembers between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineState {
    /// Active operating mode.
    pub mode: Mode,
    /// Previous button sample, for press-edge detection.
    pub button: EdgeDetector,
    /// Sweep oscillator. Kept across mode changes, so re-entering Sweep
    /// resumes where it left off.
    pub sweep: SweepState,
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineState {
    /// Power-on state: Idle, button released, sweep at 0° heading up.
    pub fn new() -> Self {
        Self {
            mode: Mode::Idle,
            button: EdgeDetector::new(),
            sweep: SweepState::new(),
        }
    }
}

/// What a mode handler wants applied this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeOutput {
    /// Requested servo pulse (µs), before clamping.
    pub pulse_us: i32,
    /// Desired LED state.
    pub led_on: bool,
    /// Minimum duration of this tick; enforced by the control loop.
    pub min_tick: Duration,
}
