//! Hobby servo driver on a hardware PWM channel.
//!
//! Position is encoded as the pulse high time inside a 20 ms frame,
//! 1000 µs (one end stop) to 2000 µs (the other).
//!
//! ## Safety contract
//!
//! Every pulse passes through [`ServoDriver::set_pulse`], which clamps to the
//! configured range before touching the PWM port. Mode logic may compute any
//! value; the servo never sees one outside its travel.

use log::debug;

use crate::app::ports::PwmOutput;
use crate::config::{ControllerConfig, SERVO_MAX_US, SERVO_MIN_US};

/// Clamp a pulse width to the standard servo range `[1000, 2000]` µs.
pub fn clamp_pulse(pulse: i32) -> u16 {
    clamp_pulse_to(pulse, SERVO_MIN_US, SERVO_MAX_US)
}

/// Clamp a pulse width to `[min, max]` µs.
pub fn clamp_pulse_to(pulse: i32, min: u16, max: u16) -> u16 {
    pulse.clamp(i32::from(min), i32::from(max)) as u16
}

pub struct ServoDriver {
    channel: u8,
    min_us: u16,
    max_us: u16,
}

impl ServoDriver {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            channel: config.servo_channel,
            min_us: config.servo_min_us,
            max_us: config.servo_max_us,
        }
    }

    /// Clamp `pulse` and send it. Returns the width actually written.
    pub fn set_pulse(&mut self, pwm: &mut impl PwmOutput, pulse: i32) -> u16 {
        let clamped = clamp_pulse_to(pulse, self.min_us, self.max_us);
        if i32::from(clamped) != pulse {
            debug!("servo: pulse {} µs clamped to {} µs", pulse, clamped);
        }
        pwm.set_pwm_pulse(self.channel, clamped);
        clamped
    }
}
