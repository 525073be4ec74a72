//! Button, servo and status LED drivers.

pub mod button;
pub mod servo;
pub mod status_led;
