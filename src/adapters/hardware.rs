//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! [`PinHardware`] owns the button input, the LED output and the servo PWM
//! channel, and exposes them through [`DigitalIo`] and [`PwmOutput`]. The
//! pins are any `embedded-hal` 1.0 digital pins, so the same adapter serves
//! rppal on the Pi and plain mock pins on the host.
//!
//! Pin ids are bound at construction. Traffic for any other id is dropped
//! with a warning; reads of unknown pins report `High` (button released).

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::warn;

use crate::app::ports::{DigitalIo, Level, PwmOutput};
use crate::error::Result;

/// A single PWM channel that accepts a pulse width in microseconds.
pub trait PulseChannel {
    fn set_pulse_us(&mut self, micros: u16) -> Result<()>;
}

/// Concrete adapter that combines all hardware behind port traits.
pub struct PinHardware<B, L, S> {
    button_pin: u8,
    button: B,
    led_pin: u8,
    led: L,
    servo_channel: u8,
    servo: S,
}

impl<B, L, S> PinHardware<B, L, S>
where
    B: InputPin,
    L: OutputPin,
    S: PulseChannel,
{
    pub fn new(
        (button_pin, button): (u8, B),
        (led_pin, led): (u8, L),
        (servo_channel, servo): (u8, S),
    ) -> Self {
        Self {
            button_pin,
            button,
            led_pin,
            led,
            servo_channel,
            servo,
        }
    }

    pub fn into_parts(self) -> (B, L, S) {
        (self.button, self.led, self.servo)
    }
}

// ── DigitalIo implementation ──────────────────────────────────

impl<B, L, S> DigitalIo for PinHardware<B, L, S>
where
    B: InputPin,
    L: OutputPin,
    S: PulseChannel,
{
    fn read_digital_input(&mut self, pin: u8) -> Level {
        if pin != self.button_pin {
            warn!("GPIO{}: not configured as input, reading HIGH", pin);
            return Level::High;
        }
        match self.button.is_high() {
            Ok(high) => Level::from_high(high),
            Err(e) => {
                warn!("GPIO{}: read failed ({:?}), reading HIGH", pin, e);
                Level::High
            }
        }
    }

    fn write_digital_output(&mut self, pin: u8, level: Level) {
        if pin != self.led_pin {
            warn!("GPIO{}: not configured as output, write dropped", pin);
            return;
        }
        let state = PinState::from(level.is_high());
        if let Err(e) = self.led.set_state(state) {
            warn!("GPIO{}: write failed ({:?})", pin, e);
        }
    }
}

// ── PwmOutput implementation ──────────────────────────────────

impl<B, L, S> PwmOutput for PinHardware<B, L, S>
where
    B: InputPin,
    L: OutputPin,
    S: PulseChannel,
{
    fn set_pwm_pulse(&mut self, channel: u8, micros: u16) {
        if channel != self.servo_channel {
            warn!("PWM{}: channel not configured, pulse dropped", channel);
            return;
        }
        if let Err(e) = self.servo.set_pulse_us(micros) {
            warn!("PWM{}: {}", channel, e);
        }
    }
}

// ── Raspberry Pi (rppal) ──────────────────────────────────────

#[cfg(feature = "rpi")]
pub mod rpi {
    //! rppal-backed peripherals. Dropping them returns the pins to their
    //! previous state and disables the PWM channel.

    use std::time::Duration;

    use log::info;
    use rppal::gpio::{Gpio, InputPin, OutputPin};
    use rppal::pwm::{Channel, Polarity, Pwm};

    use super::{PinHardware, PulseChannel};
    use crate::config::ControllerConfig;
    use crate::error::{Error, Result};

    pub type RpiHardware = PinHardware<InputPin, OutputPin, Pwm>;

    impl PulseChannel for Pwm {
        fn set_pulse_us(&mut self, micros: u16) -> Result<()> {
            self.set_pulse_width(Duration::from_micros(u64::from(micros)))
                .map_err(|e| Error::PeripheralIo(e.to_string()))
        }
    }

    /// Claim the button (input, pull-up) and LED (output, low) pins.
    pub fn init_gpio(config: &ControllerConfig) -> Result<(InputPin, OutputPin)> {
        let gpio = Gpio::new().map_err(|e| Error::PeripheralInit(e.to_string()))?;
        let button = gpio
            .get(config.button_pin)
            .map_err(|e| Error::PeripheralInit(format!("GPIO{}: {e}", config.button_pin)))?
            .into_input_pullup();
        let led = gpio
            .get(config.led_pin)
            .map_err(|e| Error::PeripheralInit(format!("GPIO{}: {e}", config.led_pin)))?
            .into_output_low();
        info!(
            "gpio: button on GPIO{} (pull-up), LED on GPIO{}",
            config.button_pin, config.led_pin
        );
        Ok((button, led))
    }

    /// Enable the servo PWM channel at 50 Hz, starting at center.
    pub fn init_pwm(config: &ControllerConfig) -> Result<Pwm> {
        let channel = match config.servo_channel {
            0 => Channel::Pwm0,
            1 => Channel::Pwm1,
            other => return Err(Error::PwmInit(format!("no PWM channel {other}"))),
        };
        let pwm = Pwm::with_period(
            channel,
            Duration::from_millis(u64::from(config.pwm_period_ms)),
            Duration::from_micros(u64::from(config.servo_center_us)),
            Polarity::Normal,
            true,
        )
        .map_err(|e| Error::PwmInit(e.to_string()))?;
        info!(
            "pwm: channel {} enabled, {} ms period",
            config.servo_channel, config.pwm_period_ms
        );
        Ok(pwm)
    }

    pub fn build(
        config: &ControllerConfig,
        (button, led): (InputPin, OutputPin),
        pwm: Pwm,
    ) -> RpiHardware {
        PinHardware::new(
            (config.button_pin, button),
            (config.led_pin, led),
            (config.servo_channel, pwm),
        )
    }
}
