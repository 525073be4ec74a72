//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements         | Connects to                   |
//! |------------|--------------------|-------------------------------|
//! | `hardware` | DigitalIo          | embedded-hal pins (rppal GPIO)|
//! |            | PwmOutput          | rppal hardware PWM            |
//! | `log_sink` | EventSink          | `log` facade                  |
//! | `time`     | DelayNs, TickPacer | `std::thread::sleep`          |

pub mod hardware;
pub mod log_sink;
pub mod time;
