//! Polled mode button with press-edge detection.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up. The line reads HIGH while
//! released and LOW while held. The control loop samples it once per tick.
//!
//! ## Edge detection
//!
//! A press is reported exactly once, on the `Released -> Pressed` sample
//! pair. There is no time-based debounce: the tick period, plus the blocking
//! acknowledgement blink after a mode change, is long enough to ride out
//! contact bounce.

use crate::app::ports::Level;

/// Logical button state derived from the raw line level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLevel {
    Pressed,
    Released,
}

impl ButtonLevel {
    /// Decode an active-low line level.
    pub fn from_active_low(level: Level) -> Self {
        match level {
            Level::Low => Self::Pressed,
            Level::High => Self::Released,
        }
    }
}

/// `true` exactly when the button went from released to pressed.
pub fn detect_press_edge(current: ButtonLevel, previous: ButtonLevel) -> bool {
    previous == ButtonLevel::Released && current == ButtonLevel::Pressed
}

/// Remembers the previous sample between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDetector {
    previous: ButtonLevel,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDetector {
    /// Starts out released, so a button held at boot fires on the first tick.
    pub fn new() -> Self {
        Self {
            previous: ButtonLevel::Released,
        }
    }

    /// Feed one sample. The stored level is replaced on every call.
    pub fn sample(&mut self, current: ButtonLevel) -> bool {
        let edge = detect_press_edge(current, self.previous);
        self.previous = current;
        edge
    }

    pub fn previous(&self) -> ButtonLevel {
        self.previous
    }
}
