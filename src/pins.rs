//! GPIO / PWM assignments for the Raspberry Pi 40-pin header.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers. All GPIO numbers use BCM numbering.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output: HIGH = LED on. Physical pin 37.
pub const LED_GPIO: u8 = 26;

// ---------------------------------------------------------------------------
// User button (active-low with pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button that cycles the operating mode. Physical pin 36.
pub const BUTTON_GPIO: u8 = 16;

// ---------------------------------------------------------------------------
// Servo
// ---------------------------------------------------------------------------

/// Hardware PWM channel 0, routed to BCM GPIO 18 (physical pin 12) via ALT5.
pub const SERVO_PWM_CHANNEL: u8 = 0;