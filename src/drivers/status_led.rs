//! Single-colour status LED driver.
//!
//! One GPIO output, active high. Besides plain on/off it provides the
//! blocking acknowledgement blink played after a mode change. The delay
//! source is injected so the blink can run against a fake clock in tests.

use embedded_hal::delay::DelayNs;

use crate::app::ports::{DigitalIo, Level};

pub struct StatusLed {
    pin: u8,
}

impl StatusLed {
    pub fn new(pin: u8) -> Self {
        Self { pin }
    }

    pub fn set(&self, io: &mut impl DigitalIo, on: bool) {
        io.write_digital_output(self.pin, Level::from_high(on));
    }

    /// Blink `count` times, `half_period_ms` on then `half_period_ms` off.
    /// Blocks the caller for `2 * count * half_period_ms` and leaves the LED off.
    pub fn acknowledge(
        &self,
        io: &mut impl DigitalIo,
        delay: &mut impl DelayNs,
        count: u8,
        half_period_ms: u32,
    ) {
        for _ in 0..count {
            self.set(io, true);
            delay.delay_ms(half_period_ms);
            self.set(io, false);
            delay.delay_ms(half_period_ms);
        }
    }
}
