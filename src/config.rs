//! Controller configuration parameters
//!
//! All fixed operating constants for the servo mode controller.
//! Nothing here is loaded at runtime; the binary uses
//! [`ControllerConfig::default()`], and the mode engine refuses any
//! config that fails [`ControllerConfig::validate`].

use crate::error::{Error, Result};
use crate::pins;

/// Servo pulse width lower bound (µs).
pub const SERVO_MIN_US: u16 = 1000;
/// Servo pulse width upper bound (µs).
pub const SERVO_MAX_US: u16 = 2000;
/// Servo neutral / center pulse width (µs).
pub const SERVO_CENTER_US: u16 = 1500;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    // --- Pins ---
    /// BCM GPIO number of the status LED (active high).
    pub led_pin: u8,
    /// BCM GPIO number of the mode button (active low, pull-up).
    pub button_pin: u8,
    /// Hardware PWM channel driving the servo.
    pub servo_channel: u8,

    // --- Servo ---
    /// Minimum pulse width sent to the servo (µs).
    pub servo_min_us: u16,
    /// Maximum pulse width sent to the servo (µs).
    pub servo_max_us: u16,
    /// Pulse width held in Idle and Center modes (µs).
    pub servo_center_us: u16,
    /// PWM period (ms). 20 ms = 50 Hz standard servo frame.
    pub pwm_period_ms: u32,

    // --- Sweep ---
    /// Degrees travelled per Sweep tick.
    pub sweep_step_deg: i16,
    /// LED square-wave period, in degrees of sweep travel.
    pub sweep_led_period_deg: i16,
    /// LED is on while `angle % period < sweep_led_on_deg`.
    pub sweep_led_on_deg: i16,

    // --- Mode change acknowledgement ---
    /// Number of on/off blinks after a mode change.
    pub blink_count: u8,
    /// On (and off) duration of each acknowledgement blink (ms).
    pub blink_half_period_ms: u32,

    // --- Timing ---
    /// Minimum tick duration in Idle and Center modes (ms).
    pub hold_tick_ms: u32,
    /// Minimum tick duration in Sweep mode (ms).
    pub sweep_tick_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Pins
            led_pin: pins::LED_GPIO,
            button_pin: pins::BUTTON_GPIO,
            servo_channel: pins::SERVO_PWM_CHANNEL,

            // Servo
            servo_min_us: SERVO_MIN_US,
            servo_max_us: SERVO_MAX_US,
            servo_center_us: SERVO_CENTER_US,
            pwm_period_ms: 20, // 50 Hz

            // Sweep
            sweep_step_deg: 5,
            sweep_led_period_deg: 20,
            sweep_led_on_deg: 10,

            // Acknowledgement blink
            blink_count: 2,
            blink_half_period_ms: 100,

            // Timing
            hold_tick_ms: 200,  // 5 Hz
            sweep_tick_ms: 100, // 10 Hz
        }
    }
}

impl ControllerConfig {
    /// Check that the parameters are internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.servo_min_us >= self.servo_max_us {
            return Err(Error::Config("servo_min_us must be below servo_max_us"));
        }
        if !(self.servo_min_us..=self.servo_max_us).contains(&self.servo_center_us) {
            return Err(Error::Config("servo_center_us outside servo range"));
        }
        if self.pwm_period_ms == 0
            || u32::from(self.servo_max_us) >= self.pwm_period_ms * 1000
        {
            return Err(Error::Config("servo pulse does not fit in the PWM period"));
        }
        if self.sweep_step_deg <= 0 || self.sweep_step_deg > 180 {
            return Err(Error::Config("sweep_step_deg must be in 1..=180"));
        }
        if self.sweep_led_period_deg <= 0
            || self.sweep_led_on_deg < 0
            || self.sweep_led_on_deg > self.sweep_led_period_deg
        {
            return Err(Error::Config("sweep LED duty outside its period"));
        }
        if self.hold_tick_ms == 0 || self.sweep_tick_ms == 0 {
            return Err(Error::Config("tick periods must be non-zero"));
        }
        Ok(())
    }
}
