//! Sweep oscillator for Sweep mode.
//!
//! Bounces an angle between 0° and 180° in fixed steps and maps it onto the
//! servo pulse range. The LED is driven as a square wave locked to the angle,
//! so it flashes in step with the travel.

use crate::config::{SERVO_MAX_US, SERVO_MIN_US};

/// Upper end of travel in degrees.
pub const SWEEP_MAX_DEG: i16 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// `+1` or `-1`.
    pub fn sign(self) -> i16 {
        match self {
            Self::Increasing => 1,
            Self::Decreasing => -1,
        }
    }
}

/// Oscillation state. Invariant: `0 <= angle <= 180`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepState {
    angle: i16,
    direction: Direction,
}

impl Default for SweepState {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepState {
    pub fn new() -> Self {
        Self {
            angle: 0,
            direction: Direction::Increasing,
        }
    }

    /// Resume from an arbitrary point. Out-of-range angles are clamped.
    pub fn at(angle: i16, direction: Direction) -> Self {
        Self {
            angle: angle.clamp(0, SWEEP_MAX_DEG),
            direction,
        }
    }

    pub fn angle(&self) -> i16 {
        self.angle
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move one step, then reverse at either end stop.
    pub fn advance(&mut self, step_deg: i16) {
        self.angle = (self.angle + self.direction.sign() * step_deg).clamp(0, SWEEP_MAX_DEG);
        if self.angle >= SWEEP_MAX_DEG {
            self.direction = Direction::Decreasing;
        }
        if self.angle <= 0 {
            self.direction = Direction::Increasing;
        }
    }
}

/// Linear map of `angle` onto `[1000, 2000]` µs.
pub fn sweep_pulse(angle: i16) -> i32 {
    sweep_pulse_between(angle, SERVO_MIN_US, SERVO_MAX_US)
}

/// Linear map of `angle` onto `[min_us, max_us]`, integer division as on
/// the wire: `min + angle * (max - min) / 180`.
pub fn sweep_pulse_between(angle: i16, min_us: u16, max_us: u16) -> i32 {
    let span = i32::from(max_us) - i32::from(min_us);
    i32::from(min_us) + i32::from(angle) * span / i32::from(SWEEP_MAX_DEG)
}

/// LED phase for `angle` with the default 20° period, on for the first 10°.
pub fn sweep_led(angle: i16) -> bool {
    sweep_led_with(angle, 20, 10)
}

pub fn sweep_led_with(angle: i16, period_deg: i16, on_deg: i16) -> bool {
    angle.rem_euclid(period_deg) < on_deg
}
