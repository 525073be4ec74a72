//! Servo mode controller library.
//!
//! Exposes the pure-logic modules for integration testing. Raspberry Pi
//! specific code is guarded by the `rpi` feature within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod pins;
