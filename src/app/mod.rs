//! Application core: pure domain logic, zero direct I/O.
//!
//! Button edge handling, the mode machine and per-mode actuation live here.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod control_loop;
pub mod events;
pub mod ports;
pub mod service;
